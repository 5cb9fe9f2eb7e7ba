//! Configuration
//!
//! Connection settings for the remote table and the view's failure and
//! concurrency policies. Values come from the process environment when
//! running natively, or are baked in at compile time for the WASM bundle.

use crate::domain::{DomainError, DomainResult};

pub const ENV_URL: &str = "SUPABASE_URL";
pub const ENV_ANON_KEY: &str = "SUPABASE_ANON_KEY";
pub const ENV_TABLE: &str = "TODO_TABLE";
pub const ENV_ERROR_POLICY: &str = "TODO_ERROR_POLICY";
pub const ENV_CONCURRENCY: &str = "TODO_CONCURRENCY";

/// Where the `todos` table lives and how to authenticate against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public (anon) API key, sent as `apikey` and bearer token
    pub anon_key: String,
    pub table: String,
}

impl RemoteConfig {
    pub const DEFAULT_TABLE: &'static str = "todos";

    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            table: Self::DEFAULT_TABLE.to_string(),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Read from the process environment at runtime
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read values captured by `option_env!` when the crate was compiled
    pub fn from_build_env() -> DomainResult<Self> {
        Self::from_lookup(build_env)
    }

    /// Build from any name → value source, then validate
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let url = lookup(ENV_URL).unwrap_or_default();
        let anon_key = lookup(ENV_ANON_KEY).unwrap_or_default();
        let mut config = Self::new(url.trim(), anon_key.trim());
        if let Some(table) = lookup(ENV_TABLE).filter(|t| !t.trim().is_empty()) {
            config.table = table.trim().to_string();
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.url.is_empty() {
            return Err(DomainError::InvalidInput(format!("{} is not set", ENV_URL)));
        }
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(DomainError::InvalidInput(format!(
                "{} must start with http:// or https://, got {}",
                ENV_URL, self.url
            )));
        }
        if self.anon_key.is_empty() {
            return Err(DomainError::InvalidInput(format!("{} is not set", ENV_ANON_KEY)));
        }
        if self.table.is_empty() {
            return Err(DomainError::InvalidInput("table name is empty".to_string()));
        }
        Ok(())
    }
}

fn build_env(name: &str) -> Option<String> {
    let value = match name {
        ENV_URL => option_env!("SUPABASE_URL"),
        ENV_ANON_KEY => option_env!("SUPABASE_ANON_KEY"),
        ENV_TABLE => option_env!("TODO_TABLE"),
        ENV_ERROR_POLICY => option_env!("TODO_ERROR_POLICY"),
        ENV_CONCURRENCY => option_env!("TODO_CONCURRENCY"),
        _ => None,
    };
    value.map(str::to_string)
}

/// What happens after a remote call fails and has been logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log and carry on; the user sees nothing
    #[default]
    LogAndContinue,
    /// Also show the error in the view
    Surface,
}

impl ErrorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorPolicy::LogAndContinue => "log",
            ErrorPolicy::Surface => "surface",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "surface" => ErrorPolicy::Surface,
            _ => ErrorPolicy::LogAndContinue,
        }
    }
}

/// Whether overlapping requests on the same row are allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencyPolicy {
    /// Every trigger issues a request, duplicates included
    #[default]
    Unguarded,
    /// Skip toggle/delete on a row that already has a request in flight
    GuardRows,
}

impl ConcurrencyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConcurrencyPolicy::Unguarded => "unguarded",
            ConcurrencyPolicy::GuardRows => "guard-rows",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "guard-rows" => ConcurrencyPolicy::GuardRows,
            _ => ConcurrencyPolicy::Unguarded,
        }
    }
}

/// Behavior switches for the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewConfig {
    pub error_policy: ErrorPolicy,
    pub concurrency: ConcurrencyPolicy,
}

impl ViewConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            error_policy: lookup(ENV_ERROR_POLICY)
                .map(|v| ErrorPolicy::from_str(&v))
                .unwrap_or_default(),
            concurrency: lookup(ENV_CONCURRENCY)
                .map(|v| ConcurrencyPolicy::from_str(&v))
                .unwrap_or_default(),
        }
    }
}
