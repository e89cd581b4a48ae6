//! # blueprint
//!
//! Leptos + WASM frontend for the layered block blueprint editor.
//!
//! This crate holds the page chrome (block palette, status toolbar, design
//! panel), the REST persistence client, and the `CanvasHost` bridge that feeds
//! DOM events into the `canvas` crate's engine. Browser bindings are behind the
//! `csr` feature; without it the state, persistence, and wire modules build and
//! test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod persistence;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    leptos::mount::mount_to_body(app::App);
}
