#![recursion_limit = "512"]

pub mod actions;
pub mod app;
pub mod components;
pub mod identity;
pub mod navigation;
pub mod storage;
pub mod views;
pub mod visibility;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
