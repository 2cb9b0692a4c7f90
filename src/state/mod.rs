//! Reactive application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one concern. The app root wraps each in an `RwSignal`
//! and provides it; components read with `expect_context`.

pub mod shell;
pub mod theme;
pub mod ui;
