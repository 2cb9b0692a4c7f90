//! Page-shell logic for the portfolio client.
//!
//! This crate holds everything the portfolio needs that does not touch the
//! DOM directly: easing curves, scroll sampling and frame coalescing, theme
//! resolution, form validation, the contact-form flow, and the page-level
//! coordinator that ties them together. The `portfolio` crate owns the
//! browser glue and feeds raw events in; this crate decides what they mean.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`easing`] | Easing curves and the [`easing::Tween`] helper |
//! | [`scroll`] | Scroll sampling, direction, frame coalescing |
//! | [`theme`] | Light/dark/auto preference resolution and application |
//! | [`form`] | Declarative field rules and the form state machine |
//! | [`contact`] | The four-field contact form and its submit contract |
//! | [`shell`] | Page coordinator: active section, menu, online/visibility |
//! | [`scroll_lock`] | Holder-counted body scroll lock |
//! | [`events`] | Single-threaded event bus with drop-to-unsubscribe |
//! | [`focus`] | Modal keyboard focus trapping |
//! | [`route`] | Client-side route table |
//! | [`config`] | Tunable shell settings |
//! | [`consts`] | Shared numeric and string constants |
//! | [`error`] | Error types |

pub mod config;
pub mod consts;
pub mod contact;
pub mod easing;
pub mod error;
pub mod events;
pub mod focus;
pub mod form;
pub mod route;
pub mod scroll;
pub mod scroll_lock;
pub mod shell;
pub mod theme;
