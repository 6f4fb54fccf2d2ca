//! # Orrery - Interactive Solar System
//!
//! A 3D solar system viewer with guided camera navigation, built on the
//! `orrery-core` simulation.

pub mod app;
pub mod config;
pub mod picking;
pub mod render;
pub mod textures;
pub mod ui;

pub use app::App;
pub use config::OrreryConfig;

// WASM entry point
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    // Set up panic hook for better error messages in the browser console
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to initialize logger: {e}").into());
    }

    log::info!("Orrery WASM module initialized");
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn run() -> Result<(), JsValue> {
    log::info!("Starting Orrery (WASM)");

    let (app, event_loop) = App::new(OrreryConfig::default())
        .await
        .map_err(|e| JsValue::from_str(&format!("Failed to create app: {e:#}")))?;

    App::run(event_loop, app).map_err(|e| JsValue::from_str(&format!("Failed to run app: {e:#}")))
}
