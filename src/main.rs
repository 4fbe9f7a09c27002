//! QR Khata Frontend Entry Point

mod models;
mod error;
mod i18n;
mod navigation;
mod form;
mod preview;
mod config;
mod sample_data;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::{AppConfig, EMBEDDED_CONFIG};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_json(EMBEDDED_CONFIG);
    let level = config.as_ref().map(AppConfig::level_filter).unwrap_or(log::LevelFilter::Info);
    if let Err(err) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
    let config = config.unwrap_or_else(|err| {
        log::error!("[APP] {}; using defaults", err);
        AppConfig::default()
    });

    mount_to_body(move || view! { <App config=config.clone() /> });
}
