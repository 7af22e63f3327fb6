//! # xrai-client
//!
//! Leptos + WASM front-end for X-RAI: stage X-ray images, send them to the
//! classification service, show the predicted fracture class, and chat with
//! a radiology assistant.
//!
//! State transitions live in `state` as plain structs so they can be tested
//! natively. Everything that touches the DOM or the network is gated behind
//! the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(app::App);
}
