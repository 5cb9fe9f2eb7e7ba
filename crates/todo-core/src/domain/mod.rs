//! Domain Layer
//!
//! Contains the to-do entity and the error type shared by every layer.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod todo;

pub use error::{DomainError, DomainResult};
pub use todo::{NewTodo, Todo, TodoId, TodoPatch};
