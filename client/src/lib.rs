//! # client
//!
//! Leptos + WASM frontend for the URL shortener.
//!
//! This crate contains the home page (auth gate, login/register forms,
//! create-URL form, URL list), browser storage and clipboard glue, and the
//! `gloo-net` transport for the backend API. Session logic and wire types come
//! from the `shortener` crate; this crate only binds them to the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
