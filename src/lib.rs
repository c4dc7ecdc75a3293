//! # courtside-owner
//!
//! Leptos + WASM frontend for the Courtside owner portal: account signup
//! with email-code verification, password login, persisted sessions, and a
//! role-gated owner dashboard.
//!
//! Browser-only behavior (HTTP, localStorage, redirects) lives behind the
//! `hydrate` feature with native stubs, so the session and auth logic
//! unit-tests without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and browser logger, then
/// hydrates the app into the document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
