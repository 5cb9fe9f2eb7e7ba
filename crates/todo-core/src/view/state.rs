//! View State
//!
//! Operations never touch state directly; they emit `ViewChange`s into a
//! `ViewSink`. The browser store and the plain `TodoViewState` below are both
//! sinks.

use std::collections::BTreeSet;

use crate::domain::{Todo, TodoId};

/// A single mutation of the displayed state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewChange {
    /// Replace the whole list with a fresh fetch
    ReplaceTodos(Vec<Todo>),
    /// Empty the text box after a successful insert
    ClearInput,
    ShowError(String),
    ClearError,
    /// Row has a request in flight (only under the row guard)
    RowBusy(TodoId),
    RowIdle(TodoId),
}

/// Receiver of view changes
pub trait ViewSink {
    fn apply(&mut self, change: ViewChange);

    /// Whether a request for this row is still in flight
    fn is_busy(&self, id: TodoId) -> bool;
}

/// Plain in-memory view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoViewState {
    /// Last successfully fetched list, ascending by id
    pub todos: Vec<Todo>,
    /// Text box contents
    pub pending_input: String,
    pub error: Option<String>,
    pub busy: BTreeSet<TodoId>,
}

impl TodoViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            pending_input: input.into(),
            ..Default::default()
        }
    }

    /// True when the empty-state message should be shown
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

impl ViewSink for TodoViewState {
    fn apply(&mut self, change: ViewChange) {
        match change {
            ViewChange::ReplaceTodos(todos) => self.todos = todos,
            ViewChange::ClearInput => self.pending_input.clear(),
            ViewChange::ShowError(msg) => self.error = Some(msg),
            ViewChange::ClearError => self.error = None,
            ViewChange::RowBusy(id) => {
                self.busy.insert(id);
            }
            ViewChange::RowIdle(id) => {
                self.busy.remove(&id);
            }
        }
    }

    fn is_busy(&self, id: TodoId) -> bool {
        self.busy.contains(&id)
    }
}
