//! PostgREST Repository
//!
//! Talks to a hosted table through its PostgREST endpoint
//! (`{url}/rest/v1/{table}`), the way Supabase exposes it.
//! Works natively and in the browser (reqwest uses `fetch` on wasm32).

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::RemoteConfig;
use crate::domain::{DomainError, DomainResult, NewTodo, Todo, TodoId, TodoPatch};
use super::traits::{Operation, TodoRepository};

/// Ask PostgREST to echo the affected rows back
const PREFER_REPRESENTATION: &str = "return=representation";

/// HTTP implementation of the todo table
pub struct PostgrestRepository {
    client: Client,
    config: RemoteConfig,
}

impl PostgrestRepository {
    pub fn new(config: RemoteConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: RemoteConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn request(&self, op: Operation, method: Method) -> RequestBuilder {
        let endpoint = self.endpoint();
        debug!("[REMOTE] {} {} {}", op.as_str(), method, endpoint);
        self.client
            .request(method, endpoint)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }
}

/// Error body PostgREST returns on non-2xx responses
#[derive(Debug, Deserialize)]
struct PostgrestErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

fn remote_message(body: &str, status: StatusCode) -> String {
    match serde_json::from_str::<PostgrestErrorBody>(body) {
        Ok(err) => {
            let mut msg = err.message;
            if let Some(code) = err.code {
                msg.push_str(&format!(" [{}]", code));
            }
            if let Some(details) = err.details {
                msg.push_str(&format!(": {}", details));
            }
            if let Some(hint) = err.hint {
                msg.push_str(&format!(" (hint: {})", hint));
            }
            msg
        }
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
    }
}

/// Send the request and turn transport failures and non-2xx statuses into errors
async fn send(builder: RequestBuilder) -> DomainResult<Response> {
    let response = builder
        .send()
        .await
        .map_err(|e| DomainError::Transport(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(DomainError::Remote {
        status: status.as_u16(),
        message: remote_message(&body, status),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> DomainResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| DomainError::Decode(e.to_string()))
}

fn match_id(id: TodoId) -> [(&'static str, String); 1] {
    [("id", format!("eq.{}", id))]
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl TodoRepository for PostgrestRepository {
    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let builder = self
            .request(Operation::List, Method::GET)
            .query(&[("select", "*"), ("order", "id.asc")]);
        decode(send(builder).await?).await
    }

    async fn insert(&self, todo: &NewTodo) -> DomainResult<Todo> {
        let builder = self
            .request(Operation::Insert, Method::POST)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(todo);
        let rows: Vec<Todo> = decode(send(builder).await?).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::Decode("insert returned no rows".to_string()))
    }

    async fn update(&self, id: TodoId, patch: &TodoPatch) -> DomainResult<Vec<Todo>> {
        let builder = self
            .request(Operation::Update, Method::PATCH)
            .query(&match_id(id))
            .header("Prefer", PREFER_REPRESENTATION)
            .json(patch);
        decode(send(builder).await?).await
    }

    async fn delete(&self, id: TodoId) -> DomainResult<()> {
        let builder = self
            .request(Operation::Delete, Method::DELETE)
            .query(&match_id(id));
        send(builder).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let repo = PostgrestRepository::new(RemoteConfig::new("https://abc.supabase.co/", "key"));
        assert_eq!(repo.endpoint(), "https://abc.supabase.co/rest/v1/todos");
    }

    #[test]
    fn test_remote_message_uses_error_body() {
        let body = r#"{"message":"permission denied for table todos","code":"42501","details":null,"hint":null}"#;
        assert_eq!(
            remote_message(body, StatusCode::UNAUTHORIZED),
            "permission denied for table todos [42501]"
        );
    }

    #[test]
    fn test_remote_message_falls_back_to_status() {
        assert_eq!(remote_message("", StatusCode::BAD_GATEWAY), "Bad Gateway");
        assert_eq!(remote_message("upstream down", StatusCode::BAD_GATEWAY), "upstream down");
    }
}
