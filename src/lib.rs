//! # mindmate-client
//!
//! Leptos + WASM frontend for the MindMate mood/journal tracker. All
//! persistence, statistics, and achievement logic live in the backend REST
//! service; this crate renders screens, runs the session/authentication
//! state machine, and guards routes on the client.
//!
//! The crate builds natively with no features for unit tests; the `csr`
//! feature enables the browser build.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
