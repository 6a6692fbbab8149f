//! Pharmacy Comparison Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod table;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_document();
    mount_to_body(move || view! { <App config=config /> });
}
