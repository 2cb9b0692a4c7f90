use super::*;

fn resolver(store: MemoryStore, system_dark: bool) -> ThemeResolver<MemoryStore, MemorySurface> {
    ThemeResolver::init(store, MemorySurface::default(), system_dark)
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn preference_parses_the_three_names() {
    assert_eq!("light".parse::<ThemePreference>(), Ok(ThemePreference::Light));
    assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
    assert_eq!("auto".parse::<ThemePreference>(), Ok(ThemePreference::Auto));
}

#[test]
fn preference_rejects_other_names() {
    assert_eq!(
        "neon".parse::<ThemePreference>(),
        Err(ThemeError::InvalidPreference("neon".to_owned()))
    );
    assert!("Dark".parse::<ThemePreference>().is_err());
}

#[test]
fn auto_resolves_from_system_signal() {
    assert_eq!(ThemePreference::Auto.resolve(true), ResolvedTheme::Dark);
    assert_eq!(ThemePreference::Auto.resolve(false), ResolvedTheme::Light);
    assert_eq!(ThemePreference::Light.resolve(true), ResolvedTheme::Light);
}

#[test]
fn meta_colors_per_theme() {
    assert_eq!(ResolvedTheme::Dark.meta_color(), "#111827");
    assert_eq!(ResolvedTheme::Light.meta_color(), "#ffffff");
}

// =============================================================
// init
// =============================================================

#[test]
fn no_stored_value_and_dark_os_resolves_dark_auto() {
    let theme = resolver(MemoryStore::new(), true);
    assert_eq!(theme.resolved(), ResolvedTheme::Dark);
    assert_eq!(theme.preference(), ThemePreference::Auto);
    assert!(theme.is_auto());
}

#[test]
fn stored_light_wins_over_dark_os() {
    let theme = resolver(MemoryStore::with_entry("portfolio-theme", "light"), true);
    assert_eq!(theme.resolved(), ResolvedTheme::Light);
    assert_eq!(theme.preference(), ThemePreference::Light);
}

#[test]
fn invalid_stored_value_falls_back_to_auto() {
    let theme = resolver(MemoryStore::with_entry("portfolio-theme", "sepia"), false);
    assert_eq!(theme.preference(), ThemePreference::Auto);
    assert_eq!(theme.resolved(), ResolvedTheme::Light);
}

#[test]
fn unavailable_storage_falls_back_to_auto() {
    let theme = resolver(MemoryStore::unavailable(), true);
    assert_eq!(theme.preference(), ThemePreference::Auto);
    assert!(theme.is_dark());
}

#[test]
fn init_applies_to_surface() {
    let theme = resolver(MemoryStore::new(), true);
    assert_eq!(theme.surface().data_theme.as_deref(), Some("dark"));
    assert_eq!(theme.surface().meta_color.as_deref(), Some("#111827"));
    assert_eq!(theme.surface().applied_count, 1);
}

#[test]
fn custom_key_is_honored() {
    let theme = ThemeResolver::init_with_key(
        MemoryStore::with_entry("site-theme", "dark"),
        MemorySurface::default(),
        false,
        "site-theme",
    );
    assert!(theme.is_dark());
}

// =============================================================
// set_theme
// =============================================================

#[test]
fn set_theme_persists_preference() {
    let mut theme = resolver(MemoryStore::new(), false);
    theme.set_theme(ThemePreference::Dark);
    assert_eq!(theme.store().get("portfolio-theme"), Some("dark"));
    assert!(theme.is_dark());
}

#[test]
fn set_theme_named_rejects_invalid_without_change() {
    let mut theme = resolver(MemoryStore::with_entry("portfolio-theme", "light"), false);
    let before = theme.surface().clone();

    assert!(!theme.set_theme_named("neon"));
    assert_eq!(theme.preference(), ThemePreference::Light);
    assert_eq!(theme.resolved(), ResolvedTheme::Light);
    assert_eq!(theme.store().get("portfolio-theme"), Some("light"));
    assert_eq!(theme.surface(), &before);
}

#[test]
fn set_theme_named_accepts_valid_name() {
    let mut theme = resolver(MemoryStore::new(), false);
    assert!(theme.set_theme_named("dark"));
    assert_eq!(theme.store().get("portfolio-theme"), Some("dark"));
}

#[test]
fn set_theme_with_unavailable_storage_still_applies() {
    let mut theme = resolver(MemoryStore::unavailable(), false);
    theme.set_theme(ThemePreference::Dark);
    assert!(theme.is_dark());
    assert_eq!(theme.preference(), ThemePreference::Dark);
}

#[test]
fn set_theme_auto_tracks_system() {
    let mut theme = resolver(MemoryStore::with_entry("portfolio-theme", "light"), true);
    theme.set_theme(ThemePreference::Auto);
    assert!(theme.is_dark());
    assert_eq!(theme.store().get("portfolio-theme"), Some("auto"));
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_from_auto_lands_on_explicit_opposite() {
    let mut theme = resolver(MemoryStore::new(), true);
    theme.toggle();
    assert_eq!(theme.preference(), ThemePreference::Light);
    assert!(theme.is_light());
    theme.toggle();
    assert_eq!(theme.preference(), ThemePreference::Dark);
}

// =============================================================
// System changes
// =============================================================

#[test]
fn system_change_while_auto_reapplies_without_storing() {
    let mut theme = resolver(MemoryStore::new(), false);
    theme.on_system_change(true);
    assert!(theme.is_dark());
    assert_eq!(theme.preference(), ThemePreference::Auto);
    assert_eq!(theme.store().get("portfolio-theme"), None);
}

#[test]
fn system_change_ignored_for_explicit_preference() {
    let mut theme = resolver(MemoryStore::with_entry("portfolio-theme", "light"), false);
    let applied = theme.surface().applied_count;
    theme.on_system_change(true);
    assert!(theme.is_light());
    assert_eq!(theme.surface().applied_count, applied);
}

#[test]
fn system_signal_remembered_for_later_auto() {
    let mut theme = resolver(MemoryStore::with_entry("portfolio-theme", "light"), false);
    theme.on_system_change(true);
    theme.set_theme(ThemePreference::Auto);
    assert!(theme.is_dark());
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn applying_same_theme_twice_yields_same_document_state() {
    let mut surface = MemorySurface::default();
    surface.apply(ResolvedTheme::Dark);
    let first = (surface.root_classes.clone(), surface.data_theme.clone(), surface.meta_color.clone());
    surface.apply(ResolvedTheme::Dark);
    let second = (surface.root_classes.clone(), surface.data_theme.clone(), surface.meta_color.clone());
    assert_eq!(first, second);
    assert_eq!(surface.root_classes, vec!["dark".to_owned()]);
}

#[test]
fn switching_theme_replaces_class() {
    let mut surface = MemorySurface { root_classes: vec!["preload".to_owned()], ..Default::default() };
    surface.apply(ResolvedTheme::Light);
    surface.apply(ResolvedTheme::Dark);
    assert_eq!(surface.root_classes, vec!["preload".to_owned(), "dark".to_owned()]);
}
