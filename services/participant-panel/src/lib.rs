//! Participant Panel - Leptos frontend
//!
//! Mounts the attendee rows and the available-participant selector into an
//! event page served by streetcrm.

pub mod api;
pub mod app;
pub mod components;
pub mod dom;

/// Entry point called by the event page once the WASM module is loaded
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    if let Err(e) = app::mount_panel() {
        tracing::error!("Participant panel not mounted: {}", e);
    }
}
