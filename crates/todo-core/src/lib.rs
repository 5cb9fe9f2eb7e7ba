//! Todo Core
//!
//! Layered architecture:
//! - domain: the `Todo` row and the shared error type
//! - repository: remote table access (PostgREST) and an in-memory stand-in
//! - config: connection settings and view policies
//! - view: the list/create/toggle/delete operations and view state

pub mod domain;
pub mod repository;
pub mod config;
pub mod view;

pub use config::{ConcurrencyPolicy, ErrorPolicy, RemoteConfig, ViewConfig};
pub use domain::{DomainError, DomainResult, NewTodo, Todo, TodoId, TodoPatch};
pub use repository::{InMemoryTodoRepository, Operation, PostgrestRepository, TodoRepository};
pub use view::{TodoService, TodoViewState, ViewChange, ViewSink};
