//! Presentation
//!
//! Labels and styling decisions shared by the UI components.

use crate::domain::Todo;

pub const TITLE: &str = "My To-Dos 📋";
pub const INPUT_PLACEHOLDER: &str = "Add a new to-do...";
pub const ADD_BUTTON_LABEL: &str = "Add";
pub const DELETE_BUTTON_LABEL: &str = "❌";
pub const EMPTY_STATE_MESSAGE: &str = "Nothing to do yet, add one!";

/// CSS class for a row's task text; completed rows are struck through
pub fn task_class(todo: &Todo) -> &'static str {
    if todo.is_complete {
        "todo-text completed"
    } else {
        "todo-text"
    }
}

/// Keys in the text box that submit the new task
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}
