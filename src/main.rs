//! Pro Todo Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod filter;
mod ids;
mod logging;
mod models;
mod render;
mod state;
mod storage;
mod store;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::LOG_LEVEL);
    log::info!("[APP] Mounting");
    mount_to_body(App);
}
