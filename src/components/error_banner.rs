//! Error Banner Component
//!
//! Visible only under the surface error policy. Dismissed by click or after
//! a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{use_todo_store, TodoStateStoreFields};

const AUTO_DISMISS_MS: u32 = 5_000;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_todo_store();

    Effect::new(move |_| {
        if let Some(shown) = store.error().get() {
            spawn_local(async move {
                TimeoutFuture::new(AUTO_DISMISS_MS).await;
                // a newer error gets its own timer
                if store.error().get_untracked().as_deref() == Some(shown.as_str()) {
                    store.error().set(None);
                }
            });
        }
    });

    move || {
        store.error().get().map(|msg| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-text">{msg}</span>
                    <button class="dismiss-btn" on:click=move |_| store.error().set(None)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
