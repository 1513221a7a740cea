//! # arcade
//!
//! Leptos + WASM client for a small game portal: a login/registration
//! landing page, a post-login hub, and four minigame views behind a static
//! route table. Authentication is a local-storage stub isolated behind the
//! [`auth::AuthProvider`] seam.

pub mod app;
pub mod auth;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
