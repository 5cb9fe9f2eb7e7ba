//! Todo Row Component
//!
//! One task: click the text to toggle, ❌ to delete.

use leptos::prelude::*;
use todo_core::view::{task_class, DELETE_BUTTON_LABEL};
use todo_core::Todo;

use crate::context::TodoContext;
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<TodoContext>().expect("TodoContext should be provided");

    let id = todo.id;
    let text_class = task_class(&todo);
    let text = todo.task.clone();

    let row_class = move || {
        if ctx.store.busy().with(|busy| busy.contains(&id)) {
            "todo-row busy"
        } else {
            "todo-row"
        }
    };

    view! {
        <li class=row_class>
            <span class=text_class on:click=move |_| ctx.toggle_complete(todo.clone())>
                {text}
            </span>
            <button class="delete-btn" on:click=move |_| ctx.delete_task(id)>
                {DELETE_BUTTON_LABEL}
            </button>
        </li>
    }
}
