//! # portfolio
//!
//! Leptos + WASM single-page portfolio. Pages and components render typed
//! content from [`content`]; page-level behavior (theme, scroll tracking,
//! active section, mobile menu, contact form) is decided by the `pagecore`
//! crate and applied to the DOM by the glue in [`util`].
//!
//! Browser-only code is behind the `csr` feature. Without it every DOM helper
//! is inert, so the crate's pure parts test on the host.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
