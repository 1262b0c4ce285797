//! # insurance-client
//!
//! Leptos + WASM frontend for the insurance application portal.
//!
//! This crate holds the signed-in session (persisted to browser
//! `localStorage`), the schema of the four insurance application forms,
//! the auth REST client, and the pages that tie them together.

pub mod app;
pub mod applications;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
