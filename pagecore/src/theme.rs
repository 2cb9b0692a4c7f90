//! Light/dark/auto theme resolution.
//!
//! The stored preference may be `auto`; the applied theme never is. `auto`
//! follows the OS `prefers-color-scheme` signal, which the host forwards via
//! [`ThemeResolver::on_system_change`].
//!
//! ERROR HANDLING
//! ==============
//! Storage is best-effort. Read failures fall back to `auto`, write failures
//! keep the new preference in memory only. Both are logged at warn and never
//! surface to the caller.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::consts::{DARK_META_COLOR, LIGHT_META_COLOR, THEME_STORAGE_KEY};
use crate::error::{StorageError, ThemeError};

/// User-selected theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemePreference {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Resolve against the OS signal.
    #[must_use]
    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::Auto if system_prefers_dark => ResolvedTheme::Dark,
            Self::Auto => ResolvedTheme::Light,
        }
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            other => Err(ThemeError::InvalidPreference(other.to_owned())),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The concrete theme applied to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn meta_color(self) -> &'static str {
        match self {
            Self::Light => LIGHT_META_COLOR,
            Self::Dark => DARK_META_COLOR,
        }
    }

    #[must_use]
    pub fn as_preference(self) -> ThemePreference {
        match self {
            Self::Light => ThemePreference::Light,
            Self::Dark => ThemePreference::Dark,
        }
    }
}

// =============================================================================
// SEAMS
// =============================================================================

/// Key/value persistence for the preference.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when storage cannot be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Where the resolved theme lands (root classes, `data-theme`, meta color).
///
/// Implementations must be idempotent.
pub trait ThemeSurface {
    fn apply(&mut self, theme: ResolvedTheme);
}

/// In-memory store. Also the fallback when browser storage is missing.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every access fails, as in a locked-down browser.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: HashMap::new(), unavailable: true }
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries, unavailable: false }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Recorded document state, mirroring what the browser surface touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub root_classes: Vec<String>,
    pub data_theme: Option<String>,
    pub meta_color: Option<String>,
    pub applied_count: usize,
}

impl ThemeSurface for MemorySurface {
    fn apply(&mut self, theme: ResolvedTheme) {
        self.root_classes.retain(|c| c != "light" && c != "dark");
        self.root_classes.push(theme.as_str().to_owned());
        self.data_theme = Some(theme.as_str().to_owned());
        self.meta_color = Some(theme.meta_color().to_owned());
        self.applied_count += 1;
    }
}

// =============================================================================
// RESOLVER
// =============================================================================

/// Owns the preference, the OS signal, and the surface it paints.
#[derive(Debug)]
pub struct ThemeResolver<S, D> {
    store: S,
    surface: D,
    key: String,
    preference: ThemePreference,
    system_prefers_dark: bool,
    resolved: ResolvedTheme,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeResolver<S, D> {
    /// Read the stored preference, resolve it, and apply it.
    pub fn init(store: S, surface: D, system_prefers_dark: bool) -> Self {
        Self::init_with_key(store, surface, system_prefers_dark, THEME_STORAGE_KEY)
    }

    pub fn init_with_key(store: S, surface: D, system_prefers_dark: bool, key: &str) -> Self {
        let preference = read_preference(&store, key);
        let mut resolver = Self {
            store,
            surface,
            key: key.to_owned(),
            preference,
            system_prefers_dark,
            resolved: preference.resolve(system_prefers_dark),
        };
        resolver.apply();
        resolver
    }

    /// Persist and apply a new preference.
    pub fn set_theme(&mut self, preference: ThemePreference) {
        self.preference = preference;
        self.resolved = preference.resolve(self.system_prefers_dark);
        self.apply();
        if let Err(e) = self.store.save(&self.key, preference.as_str()) {
            log::warn!("failed to save theme preference: {e}");
        }
    }

    /// String entry point for untyped callers. Invalid names are logged and
    /// ignored; returns whether the preference changed hands.
    pub fn set_theme_named(&mut self, name: &str) -> bool {
        match name.parse::<ThemePreference>() {
            Ok(preference) => {
                self.set_theme(preference);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Flip between light and dark based on what is currently shown.
    pub fn toggle(&mut self) {
        self.set_theme(self.resolved.toggled().as_preference());
    }

    /// OS color scheme changed. Only matters while the preference is `auto`.
    pub fn on_system_change(&mut self, prefers_dark: bool) {
        self.system_prefers_dark = prefers_dark;
        if self.preference != ThemePreference::Auto {
            return;
        }
        self.resolved = ThemePreference::Auto.resolve(prefers_dark);
        self.apply();
    }

    /// Re-apply the current resolved theme.
    pub fn apply(&mut self) {
        self.surface.apply(self.resolved);
    }

    // --- Queries ---

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    #[must_use]
    pub fn resolved(&self) -> ResolvedTheme {
        self.resolved
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.resolved == ResolvedTheme::Dark
    }

    #[must_use]
    pub fn is_light(&self) -> bool {
        self.resolved == ResolvedTheme::Light
    }

    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.preference == ThemePreference::Auto
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }
}

fn read_preference<S: PreferenceStore>(store: &S, key: &str) -> ThemePreference {
    match store.load(key) {
        Ok(Some(raw)) => raw.parse().unwrap_or_default(),
        Ok(None) => ThemePreference::Auto,
        Err(e) => {
            log::warn!("failed to read theme preference: {e}");
            ThemePreference::Auto
        }
    }
}
