//! # client
//!
//! Leptos frontend for the Cadence marketing site.
//!
//! This crate contains the page modules, the shared site chrome (navigation,
//! footer, chat widget), the in-memory content catalogues, and the small
//! state machines behind the theme, navigation overlays, chat and forms.
//! The `ssr` flavour is rendered by the server crate; the `hydrate` flavour
//! is compiled to WASM and takes over in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
