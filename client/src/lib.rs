//! # client
//!
//! Leptos + WASM frontend for the GG Accesorios storefront.
//!
//! This crate contains the page, its components, and the small controller
//! objects behind them: navigation toggle, hero carousel with autoplay, and the
//! contact form validator. Controllers are plain Rust and tested natively;
//! browser glue is compiled in only with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating storefront");
    leptos::mount::hydrate_body(app::App);
}
