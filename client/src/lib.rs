//! # floorplan-client
//!
//! Leptos + WASM front end for the office desk floorplan.
//!
//! This crate contains the page shell, the floorplan host component that
//! bridges DOM events to the imperative `floorplan::engine::Engine`, the
//! reservation popover, page configuration, and the shared UI state those
//! components read and write.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and logger, then mount [`app::App`].
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {e}").into());
    }
    log::info!("starting floorplan client");
    leptos::mount::mount_to_body(app::App);
}
