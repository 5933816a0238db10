//! Bulk Products Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod form;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::load_page_config();
    mount_to_body(move || view! { <App config=config /> });
}
