//! To-Do View Frontend App
//!
//! Reads the baked-in connection settings, wires the remote table into the
//! view and mounts it.

use leptos::prelude::*;
use log::{error, info};
use reactive_stores::Store;
use todo_core::{PostgrestRepository, RemoteConfig, TodoService, ViewConfig};

use crate::components::TodoView;
use crate::context::TodoContext;
use crate::store::TodoState;

#[component]
pub fn App() -> impl IntoView {
    let view_config = ViewConfig::from_build_env();

    match RemoteConfig::from_build_env() {
        Ok(remote) => {
            info!(
                "[APP] Table '{}' at {} (errors: {}, concurrency: {})",
                remote.table,
                remote.url,
                view_config.error_policy.as_str(),
                view_config.concurrency.as_str()
            );
            let service = TodoService::new(PostgrestRepository::new(remote), view_config);

            // View state lives with this component tree, nowhere else
            let store = Store::new(TodoState::default());
            provide_context(store);
            provide_context(TodoContext::new(service, store));

            view! { <TodoView /> }.into_any()
        }
        Err(err) => {
            error!("[APP] Remote table is not configured: {}", err);
            view! {
                <div class="todo-app">
                    <p class="config-error">{format!("Remote table is not configured: {}", err)}</p>
                </div>
            }
            .into_any()
        }
    }
}
