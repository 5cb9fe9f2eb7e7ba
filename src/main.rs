//! To-Do View Frontend Entry Point

mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("TodoView", LevelFilter::Debug) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
