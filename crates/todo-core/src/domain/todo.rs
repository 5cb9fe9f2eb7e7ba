//! Todo Entity
//!
//! One row of the remote `todos` table.

use serde::{Deserialize, Serialize};

/// Storage-assigned row identifier
pub type TodoId = i64;

/// A to-do row as stored remotely
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by storage on insert
    pub id: TodoId,
    /// Task text as the user typed it
    pub task: String,
    /// Completion status
    pub is_complete: bool,
}

impl Todo {
    pub fn new(id: TodoId, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            is_complete: false,
        }
    }

    /// Patch that flips this row's completion flag
    pub fn toggled(&self) -> TodoPatch {
        TodoPatch {
            is_complete: !self.is_complete,
        }
    }
}

/// Insert body: storage fills in `id` and `is_complete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub task: String,
}

impl NewTodo {
    /// Build an insert from raw input text.
    ///
    /// Returns `None` when the text is blank after trimming. The text itself
    /// is kept as typed.
    pub fn from_input(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            task: text.to_string(),
        })
    }
}

/// Update body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    pub is_complete: bool,
}
