//! # client
//!
//! Leptos + WASM frontend for the face-sketch composer.
//!
//! This crate contains the creation and recognition pages, their components,
//! application state, and the HTTP helpers that talk to the host server. The
//! editor state machine itself lives in the `canvas` crate; `SketchCanvas`
//! bridges DOM events into it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
