//! # client
//!
//! Leptos + WASM front end for the equipment-loan desk.
//!
//! This crate renders the loan form, the pending-loans table and the return
//! modal. All behaviour lives in the `desk` crate; components here translate
//! DOM events into `Desk` calls and render its state as text nodes only.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the desk into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
