#![allow(warnings)]
//! My Bookmarks Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod dialog;
mod error;
mod models;
mod store;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::LOG_LEVEL));
    mount_to_body(App);
}
