mod app;
mod calendar;
mod components;
mod config;
mod drag;
mod error;
mod format;
mod logging;
mod models;
mod pages;
mod query;
mod seed;
mod state;
mod store;
mod util;

use crate::app::App;
use crate::config::AppConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;


// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::new();
    if let Err(e) = logging::init_logging(config.log_level) {
        web_sys::console::warn_1(&e.into());
    }
    for issue in &config.issues {
        log::warn!("config: {issue}; using default");
    }

    mount_to_body(move || view! { <App config=config /> });
}
