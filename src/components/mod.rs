//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and the home-page sections. They read
//! shared state from the context providers set up in `app` and never touch
//! `window` directly; browser work goes through `crate::util`.

pub mod back_to_top;
pub mod contact_form;
pub mod crash_screen;
pub mod navbar;
pub mod offline_indicator;
pub mod project_modal;
pub mod projects;
pub mod scroll_progress;
pub mod sections;
pub mod theme_toggle;
