//! # client
//!
//! Leptos + WASM frontend for Contact Hub: a searchable, paginated contact
//! directory with a detail dialog, backed by one REST endpoint.
//!
//! Domain logic (records, queries, paging, debounce) lives in the `people`
//! crate; this crate holds pages, components, reactive state and the HTTP
//! call.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());
    log::info!("contact hub starting");
    leptos::mount::mount_to_body(app::App);
}
