//! Financial Literacy Dashboard
//!
//! Browser front-end built with Leptos (WASM). Every number, chart and
//! sentence comes from the `finlit` crate; this crate only draws it.
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly with
//! trunk. There is no backend: `finlit serve` only hands out the bundle.

use leptos::*;

mod app;
mod components;
mod sections;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
