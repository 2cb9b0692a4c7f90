//! Theme state shared through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The resolver is created once at the app root, before the first render, so
//! the initial paint already carries the right class. OS scheme changes reach
//! it through the page event bus.

use pagecore::config::ShellConfig;
use pagecore::theme::ThemeResolver;

use crate::util::theme_dom::{BrowserStore, DocumentSurface, system_prefers_dark};

pub type ThemeState = ThemeResolver<BrowserStore, DocumentSurface>;

/// Read the stored preference and paint the document.
pub fn init_theme(config: &ShellConfig) -> ThemeState {
    ThemeResolver::init_with_key(BrowserStore, DocumentSurface, system_prefers_dark(), &config.storage_key)
}
