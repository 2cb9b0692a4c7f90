//! Browser helpers behind the page shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `window` or `document` lives here so components
//! and `pagecore` stay testable without a browser. Each helper compiles to a
//! no-op or a fixed fallback when the `csr` feature is off.

pub mod focus_dom;
#[cfg(feature = "csr")]
pub mod listener;
pub mod page_events;
pub mod scroll_dom;
pub mod site_config;
pub mod theme_dom;
