//! Laugh Riot - marketing site for the Punchline comedy collective
//!
//! A Leptos application: server-rendered by the Axum binary and hydrated in
//! the browser from WebAssembly. Scroll, timing and effect math lives in
//! [`core`]; components and browser glue live in [`ui`].

#![recursion_limit = "4096"]

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
