//! New Task Form Component
//!
//! Text box plus Add button; Enter submits too.

use leptos::prelude::*;
use todo_core::view::{is_submit_key, ADD_BUTTON_LABEL, INPUT_PLACEHOLDER};

use crate::context::TodoContext;
use crate::store::TodoStateStoreFields;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");
    let store = ctx.store;

    // Blank input is filtered out by the service
    let submit = move || ctx.add_task(store.pending_input().get_untracked());

    view! {
        <div class="new-task-row">
            <input
                type="text"
                class="new-task-input"
                placeholder=INPUT_PLACEHOLDER
                prop:value=move || store.pending_input().get()
                on:input=move |ev| store.pending_input().set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if is_submit_key(&ev.key()) {
                        submit();
                    }
                }
            />
            <button class="add-btn" on:click=move |_| submit()>
                {ADD_BUTTON_LABEL}
            </button>
        </div>
    }
}
