//! Todo Service
//!
//! The four user operations. Each mutation is followed by an unconditional
//! refetch of the whole table; the local list is never patched in place.
//! Failures are logged and swallowed, and only reach the view when the
//! error policy says so.

use std::sync::Arc;

use log::{debug, error, info};

use crate::config::{ConcurrencyPolicy, ErrorPolicy, ViewConfig};
use crate::domain::{DomainError, NewTodo, Todo, TodoId};
use crate::repository::{Operation, TodoRepository};
use super::state::{ViewChange, ViewSink};

pub struct TodoService<R> {
    repo: Arc<R>,
    config: ViewConfig,
}

impl<R> Clone for TodoService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: self.config,
        }
    }
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repo: R, config: ViewConfig) -> Self {
        Self::from_shared(Arc::new(repo), config)
    }

    pub fn from_shared(repo: Arc<R>, config: ViewConfig) -> Self {
        Self { repo, config }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn config(&self) -> ViewConfig {
        self.config
    }

    /// Re-read every row and replace the displayed list.
    ///
    /// On failure the previous list stays visible. Returns whether the list
    /// was replaced.
    pub async fn fetch_all<S: ViewSink>(&self, sink: &mut S) -> bool {
        match self.repo.list().await {
            Ok(todos) => {
                debug!("[VIEW] Loaded {} todos", todos.len());
                sink.apply(ViewChange::ReplaceTodos(todos));
                if self.config.error_policy == ErrorPolicy::Surface {
                    sink.apply(ViewChange::ClearError);
                }
                true
            }
            Err(err) => {
                self.report(Operation::List, &err, sink);
                false
            }
        }
    }

    /// Insert `text` as a new task, clear the input and refetch.
    ///
    /// Blank text (after trimming) is a no-op. Returns whether the insert
    /// succeeded.
    pub async fn add_task<S: ViewSink>(&self, text: &str, sink: &mut S) -> bool {
        let Some(new_todo) = NewTodo::from_input(text) else {
            debug!("[VIEW] Ignoring blank task");
            return false;
        };
        match self.repo.insert(&new_todo).await {
            Ok(created) => {
                info!("[VIEW] Added todo #{}", created.id);
                sink.apply(ViewChange::ClearInput);
                self.fetch_all(sink).await;
                true
            }
            Err(err) => {
                self.report(Operation::Insert, &err, sink);
                false
            }
        }
    }

    /// Delete the row with `id`, then refetch. Returns whether the delete succeeded.
    pub async fn delete_task<S: ViewSink>(&self, id: TodoId, sink: &mut S) -> bool {
        if !self.enter_row(id, sink) {
            return false;
        }
        let deleted = match self.repo.delete(id).await {
            Ok(()) => {
                info!("[VIEW] Deleted todo #{}", id);
                self.fetch_all(sink).await;
                true
            }
            Err(err) => {
                self.report(Operation::Delete, &err, sink);
                false
            }
        };
        self.leave_row(id, sink);
        deleted
    }

    /// Flip completion of `todo` as the caller saw it, then refetch.
    ///
    /// The new value is computed from the `todo` passed in, not from the
    /// current remote row. Returns whether the update succeeded.
    pub async fn toggle_complete<S: ViewSink>(&self, todo: &Todo, sink: &mut S) -> bool {
        if !self.enter_row(todo.id, sink) {
            return false;
        }
        let patch = todo.toggled();
        let updated = match self.repo.update(todo.id, &patch).await {
            Ok(_) => {
                info!("[VIEW] Todo #{} is_complete -> {}", todo.id, patch.is_complete);
                self.fetch_all(sink).await;
                true
            }
            Err(err) => {
                self.report(Operation::Update, &err, sink);
                false
            }
        };
        self.leave_row(todo.id, sink);
        updated
    }

    fn guarded(&self) -> bool {
        self.config.concurrency == ConcurrencyPolicy::GuardRows
    }

    /// Mark the row busy; false if the guard is on and it already is
    fn enter_row<S: ViewSink>(&self, id: TodoId, sink: &mut S) -> bool {
        if !self.guarded() {
            return true;
        }
        if sink.is_busy(id) {
            debug!("[VIEW] Todo #{} has a request in flight, skipping", id);
            return false;
        }
        sink.apply(ViewChange::RowBusy(id));
        true
    }

    fn leave_row<S: ViewSink>(&self, id: TodoId, sink: &mut S) {
        if self.guarded() {
            sink.apply(ViewChange::RowIdle(id));
        }
    }

    fn report<S: ViewSink>(&self, op: Operation, err: &DomainError, sink: &mut S) {
        error!("{}: {}", op.failure_message(), err);
        if self.config.error_policy == ErrorPolicy::Surface {
            sink.apply(ViewChange::ShowError(format!("{}: {}", op.failure_message(), err)));
        }
    }
}
