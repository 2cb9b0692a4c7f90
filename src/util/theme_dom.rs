//! Browser implementations of the theme seams.
//!
//! [`BrowserStore`] reads and writes `localStorage`; [`DocumentSurface`]
//! paints the resolved theme onto `<html>` (class + `data-theme`) and the
//! `theme-color` meta tag. Both re-resolve the window on every call, so they
//! carry no JS handles and can live inside a reactive signal.
//!
//! TRADE-OFFS
//! ==========
//! Without the `csr` feature the store reports storage as unavailable and the
//! surface does nothing; the resolver then runs purely in memory.

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

use pagecore::error::StorageError;
use pagecore::theme::{PreferenceStore, ResolvedTheme, ThemeSurface};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Read(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| StorageError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    fn apply(&mut self, theme: ResolvedTheme) {
        #[cfg(feature = "csr")]
        {
            let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(root) = doc.document_element() {
                let classes = root.class_list();
                let _ = classes.remove_2(ResolvedTheme::Light.as_str(), ResolvedTheme::Dark.as_str());
                let _ = classes.add_1(theme.as_str());
                let _ = root.set_attribute("data-theme", theme.as_str());
            }
            if let Ok(Some(meta)) = doc.query_selector("meta[name=\"theme-color\"]") {
                let _ = meta.set_attribute("content", theme.meta_color());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}

/// Current `prefers-color-scheme: dark` match. `false` outside a browser.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
