#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod catalog;
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod intro;
pub mod palette;
pub mod session;
pub mod theme;
pub mod theme_store;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    leptos::mount::hydrate_body(App);
}
