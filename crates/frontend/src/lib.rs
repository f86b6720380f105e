pub mod app;
pub mod pages;

use wasm_bindgen::prelude::wasm_bindgen;

/// Wasm entry point, invoked by trunk's loader on page load.
#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
