//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory;
mod rest;


pub use traits::{Operation, TodoRepository};
pub use memory::InMemoryTodoRepository;
pub use rest::PostgrestRepository;
