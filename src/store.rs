//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{Todo, TodoId, ViewChange, ViewSink};

/// Displayed state of the to-do view with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Rows from the last successful fetch, ascending by id
    pub todos: Vec<Todo>,
    /// Text box contents
    pub pending_input: String,
    /// Shown only under the surface error policy
    pub error: Option<String>,
    /// Rows with a request in flight (row guard only)
    pub busy: BTreeSet<TodoId>,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Applies view changes to the store
#[derive(Clone, Copy)]
pub struct StoreSink(pub TodoStore);

impl ViewSink for StoreSink {
    fn apply(&mut self, change: ViewChange) {
        let store = self.0;
        match change {
            ViewChange::ReplaceTodos(todos) => store.todos().set(todos),
            ViewChange::ClearInput => store.pending_input().set(String::new()),
            ViewChange::ShowError(msg) => store.error().set(Some(msg)),
            ViewChange::ClearError => store.error().set(None),
            ViewChange::RowBusy(id) => {
                store.busy().write().insert(id);
            }
            ViewChange::RowIdle(id) => {
                store.busy().write().remove(&id);
            }
        }
    }

    fn is_busy(&self, id: TodoId) -> bool {
        self.0.busy().with_untracked(|busy| busy.contains(&id))
    }
}
