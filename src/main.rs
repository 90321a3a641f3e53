#![allow(warnings)]
//! GravityDoc Frontend Entry Point

mod models;
mod config;
mod wizard;
mod tree;
mod artifacts;
mod markdown;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warning) = config::load();
    if let Err(err) = rolling_logger::init_logger("GravityDoc", config.log.capacity, config.log.level_filter()) {
        web_sys::console::error_1(&format!("[APP] logger init failed: {}", err).into());
    }
    if let Some(warning) = warning {
        if let Err(err) = rolling_logger::warn(&warning) {
            web_sys::console::warn_1(&format!("[APP] {} ({})", warning, err).into());
        }
    }
    log::info!("[APP] starting, max_files={}", config.upload.max_files);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
