//! Todo View Component
//!
//! Title, input row and the list mirrored from the remote table.

use leptos::prelude::*;
use todo_core::view::{EMPTY_STATE_MESSAGE, TITLE};

use crate::components::{ErrorBanner, NewTaskForm, TodoRow};
use crate::context::TodoContext;
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoView() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");
    let store = ctx.store;

    // Load once on mount
    Effect::new(move |_| ctx.fetch_all());

    view! {
        <div class="todo-app">
            <h1 class="todo-title">{TITLE}</h1>

            <ErrorBanner />

            <NewTaskForm />

            <ul class="todo-list">
                <For
                    each=move || store.todos().get()
                    // every displayed field, so a refetch re-renders changed rows
                    key=|todo| (todo.id, todo.task.clone(), todo.is_complete)
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
                <Show when=move || store.todos().with(|todos| todos.is_empty())>
                    <li class="empty-state">{EMPTY_STATE_MESSAGE}</li>
                </Show>
            </ul>
        </div>
    }
}
