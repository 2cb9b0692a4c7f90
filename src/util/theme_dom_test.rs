#![cfg(not(feature = "csr"))]

use super::*;

use pagecore::theme::{ThemePreference, ThemeResolver};

#[test]
fn store_is_unavailable_outside_browser() {
    let mut store = BrowserStore;
    assert_eq!(store.load("portfolio-theme"), Err(StorageError::Unavailable));
    assert_eq!(store.save("portfolio-theme", "dark"), Err(StorageError::Unavailable));
}

#[test]
fn system_preference_is_light_outside_browser() {
    assert!(!system_prefers_dark());
}

#[test]
fn resolver_still_works_in_memory() {
    let mut theme = ThemeResolver::init(BrowserStore, DocumentSurface, false);
    assert_eq!(theme.preference(), ThemePreference::Auto);
    theme.toggle();
    assert!(theme.is_dark());
}
