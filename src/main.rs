//! LIMS Frontend Entry Point

mod models;
mod config;
mod logging;
mod commands;
mod filters;
mod services;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::AppConfig::from_window();
    logging::init(config.level_filter());
    log::info!("LIMS UI starting, api base {}", config.api_base);
    config::init(config);

    mount_to_body(App);
}
