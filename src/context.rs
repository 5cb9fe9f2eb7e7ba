//! Application Context
//!
//! The service and store, provided via Leptos Context API. Every user action
//! runs as its own local task; nothing prevents two from overlapping.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::{PostgrestRepository, Todo, TodoId, TodoService};

use crate::store::{StoreSink, TodoStore};

type RemoteService = TodoService<PostgrestRepository>;

#[derive(Clone, Copy)]
pub struct TodoContext {
    service: StoredValue<RemoteService, LocalStorage>,
    pub store: TodoStore,
}

impl TodoContext {
    pub fn new(service: RemoteService, store: TodoStore) -> Self {
        Self {
            service: StoredValue::new_local(service),
            store,
        }
    }

    /// Re-read the whole table
    pub fn fetch_all(&self) {
        self.spawn(|service, mut sink| async move {
            service.fetch_all(&mut sink).await;
        });
    }

    pub fn add_task(&self, text: String) {
        self.spawn(move |service, mut sink| async move {
            service.add_task(&text, &mut sink).await;
        });
    }

    pub fn delete_task(&self, id: TodoId) {
        self.spawn(move |service, mut sink| async move {
            service.delete_task(id, &mut sink).await;
        });
    }

    /// Toggle using the row as currently rendered
    pub fn toggle_complete(&self, todo: Todo) {
        self.spawn(move |service, mut sink| async move {
            service.toggle_complete(&todo, &mut sink).await;
        });
    }

    fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(RemoteService, StoreSink) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let service = self.service.get_value();
        spawn_local(op(service, StoreSink(self.store)));
    }
}
