//! Ecoleta Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod geolocation;
mod leaflet;
mod models;
mod point_form;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Ecoleta frontend starting (api: {})", config::API_URL);
    mount_to_body(App);
}
