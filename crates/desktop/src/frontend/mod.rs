//! Leptos frontend for the storefront listing page.

pub mod app;
pub mod components;

use wasm_bindgen::prelude::*;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    // Better panic messages in the browser console.
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}
