//! # client
//!
//! Leptos + WASM host for the design-system core: the preference and sidebar
//! providers, the sidebar component family, a chart color-token container,
//! and the catalog/dashboard pages that exercise them.
//!
//! Browser concerns (cookies, `matchMedia`, window listeners, root element
//! attributes) live in `util`; everything stateful is delegated to the
//! `design_system` crate and wrapped in signals under `state`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
