//! # client
//!
//! Leptos + WASM frontend for the Lapak local-commerce marketplace.
//!
//! This crate contains pages, components, client-side state, the REST client
//! and the live order-notification client. Business rules that the UI applies
//! before talking to the backend (filters, sorts, form validation, action
//! visibility) live in `state` as plain functions so they test without a
//! browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
