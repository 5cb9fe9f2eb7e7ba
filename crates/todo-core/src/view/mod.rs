//! View Layer
//!
//! Everything the to-do view does, independent of the UI toolkit:
//! - state: the displayed list, the pending input and the changes applied to them
//! - service: the four user operations against the remote table
//! - presentation: labels and row styling

mod state;
mod service;
mod presentation;


pub use state::{TodoViewState, ViewChange, ViewSink};
pub use service::TodoService;
pub use presentation::{
    is_submit_key, task_class, ADD_BUTTON_LABEL, DELETE_BUTTON_LABEL, EMPTY_STATE_MESSAGE,
    INPUT_PLACEHOLDER, TITLE,
};
