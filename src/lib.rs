//! # calc-form
//!
//! Leptos + WASM client for a remote two-operand calculator. The page
//! collects two numbers and an operator, POSTs them to `/calculate`, and
//! shows either the result or an error message with a short transition.
//!
//! Browser-only code sits behind the `csr` feature; the rest builds and
//! tests natively.

pub mod app;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::mount_to_body(app::App);
}
