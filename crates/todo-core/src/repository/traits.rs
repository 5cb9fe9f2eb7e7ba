//! Repository Layer - Core Traits
//!
//! Defines the abstract interface to the remote `todos` table.
//! Implementations can use PostgREST over HTTP, in-memory, etc.

use async_trait::async_trait;
use crate::domain::{DomainResult, NewTodo, Todo, TodoId, TodoPatch};

/// The four requests the view issues against the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    List,
    Insert,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// Diagnostic line written when this request fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::List => "Error fetching todos",
            Operation::Insert => "Error adding todo",
            Operation::Update => "Error updating todo",
            Operation::Delete => "Error deleting todo",
        }
    }
}

/// Remote table access.
///
/// Browser futures are not `Send`, so the trait drops the bound on wasm32.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait TodoRepository {
    /// Every row, ordered ascending by id
    async fn list(&self) -> DomainResult<Vec<Todo>>;

    /// Insert a row; storage assigns `id` and `is_complete`
    async fn insert(&self, todo: &NewTodo) -> DomainResult<Todo>;

    /// Apply `patch` to the row matching `id`, returning the updated rows
    async fn update(&self, id: TodoId, patch: &TodoPatch) -> DomainResult<Vec<Todo>>;

    /// Delete the row matching `id`
    async fn delete(&self, id: TodoId) -> DomainResult<()>;
}
