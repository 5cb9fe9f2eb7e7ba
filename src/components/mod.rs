//! UI Components
//!
//! Leptos components making up the to-do view.

mod todo_view;
mod new_task_form;
mod todo_row;
mod error_banner;

pub use todo_view::TodoView;
pub use new_task_form::NewTaskForm;
pub use todo_row::TodoRow;
pub use error_banner::ErrorBanner;
