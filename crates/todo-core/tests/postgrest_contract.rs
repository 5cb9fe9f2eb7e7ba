//! PostgREST Repository Contract Tests
//!
//! These tests verify the HTTP shape of every request PostgrestRepository sends
//! and how responses map back into rows or DomainError:
//! - list selects everything ordered by id ascending
//! - insert posts `{task}` and asks for the row back
//! - update patches `{is_complete}` on `id=eq.{id}`
//! - delete targets `id=eq.{id}`
//! - error bodies, bad JSON and unreachable hosts become the right error variant

use serde_json::json;
use todo_core::{DomainError, NewTodo, PostgrestRepository, RemoteConfig, Todo, TodoPatch, TodoRepository};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANON_KEY: &str = "test-anon-key";

fn repo_for(server: &MockServer) -> PostgrestRepository {
    PostgrestRepository::new(RemoteConfig::new(server.uri(), ANON_KEY))
}

// ────────────────────────────────────────────────────────────────────────────
// Request format
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_orders_by_id_ascending() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/todos"))
        .and(query_param("select", "*"))
        .and(query_param("order", "id.asc"))
        .and(header("apikey", ANON_KEY))
        .and(header("authorization", "Bearer test-anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "task": "A", "is_complete": false},
            {"id": 4, "task": "B", "is_complete": true}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let todos = repo_for(&mock_server).list().await.expect("list should succeed");

    assert_eq!(
        todos,
        vec![
            Todo::new(1, "A"),
            Todo { id: 4, task: "B".to_string(), is_complete: true },
        ]
    );
}

#[tokio::test]
async fn test_insert_posts_task_and_returns_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/todos"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!({"task": "Buy milk"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"id": 12, "task": "Buy milk", "is_complete": false}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let new_todo = NewTodo::from_input("Buy milk").unwrap();
    let created = repo_for(&mock_server).insert(&new_todo).await.expect("insert should succeed");

    assert_eq!(created, Todo::new(12, "Buy milk"));
}

#[tokio::test]
async fn test_update_patches_matching_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/todos"))
        .and(query_param("id", "eq.7"))
        .and(body_json(json!({"is_complete": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "task": "Walk dog", "is_complete": true}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let rows = repo_for(&mock_server)
        .update(7, &TodoPatch { is_complete: true })
        .await
        .expect("update should succeed");

    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_complete);
}

#[tokio::test]
async fn test_delete_targets_matching_row() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/todos"))
        .and(query_param("id", "eq.3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    repo_for(&mock_server).delete(3).await.expect("delete should succeed");
}

#[tokio::test]
async fn test_custom_table_name_in_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = RemoteConfig::new(mock_server.uri(), ANON_KEY).with_table("tasks");
    let todos = PostgrestRepository::new(config).list().await.unwrap();

    assert!(todos.is_empty());
}

// ────────────────────────────────────────────────────────────────────────────
// Error mapping
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_body_maps_to_remote_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/todos"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "permission denied for table todos",
            "code": "42501",
            "details": null,
            "hint": null
        })))
        .mount(&mock_server)
        .await;

    let new_todo = NewTodo::from_input("A").unwrap();
    let err = repo_for(&mock_server).insert(&new_todo).await.unwrap_err();

    match err {
        DomainError::Remote { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("permission denied"));
            assert!(message.contains("42501"));
        }
        other => panic!("Expected Remote error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_rows_map_to_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "one"}])))
        .mount(&mock_server)
        .await;

    let err = repo_for(&mock_server).list().await.unwrap_err();
    assert!(matches!(err, DomainError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_empty_insert_response_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/todos"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let new_todo = NewTodo::from_input("A").unwrap();
    let err = repo_for(&mock_server).insert(&new_todo).await.unwrap_err();
    assert!(matches!(err, DomainError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Bind then release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let repo = PostgrestRepository::new(RemoteConfig::new(format!("http://127.0.0.1:{}", port), ANON_KEY));

    let err = repo.list().await.unwrap_err();
    assert!(matches!(err, DomainError::Transport(_)), "got {:?}", err);
}
