// src/main.rs: club activity signup board (Rust + Yew + WASM)

mod api;
mod app;
mod components;
mod config;
mod controller;
mod error;
mod logging;
mod model;
mod state;

use app::{App, AppProps};
use config::BoardConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::from_document();
    logging::init(&config.log_level);
    log::info!("Starting activity board (api base: {:?})", config.api_base);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
