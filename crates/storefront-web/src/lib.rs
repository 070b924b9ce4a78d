//! storefront Web Frontend
//!
//! Leptos-based WASM landing page. Checkout is delegated to the relay
//! server, which returns the hosted checkout URL to redirect to.

mod api;
mod app;
mod components;
mod pages;
mod product;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
