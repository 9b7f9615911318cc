//! HR Digital Agent landing page
//!
//! Marketing page with a lead-capture form, built with Leptos and
//! WebAssembly. The server build also exposes `POST /api/leads`, which
//! stores signups in the hosted HR users table.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
