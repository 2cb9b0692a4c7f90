use super::*;

#[test]
fn default_uses_shared_constants() {
    let config = ShellConfig::default();
    assert_eq!(config.storage_key, "portfolio-theme");
    assert_eq!(config.scroll_threshold_px, 100.0);
    assert_eq!(config.header_offset_px, 80.0);
    assert_eq!(config.back_to_top_px, 500.0);
    assert_eq!(config.success_banner_ms, 5_000);
}

#[test]
fn from_json_overrides_only_given_keys() {
    let config = ShellConfig::from_json(r#"{ "site_owner": "Sam", "back_to_top_px": 300 }"#).expect("parse");
    assert_eq!(config.site_owner, "Sam");
    assert_eq!(config.back_to_top_px, 300.0);
    assert_eq!(config.header_offset_px, 80.0);
}

#[test]
fn from_json_empty_object_is_default() {
    let config = ShellConfig::from_json("{}").expect("parse");
    assert_eq!(config, ShellConfig::default());
}

#[test]
fn from_json_rejects_unknown_keys() {
    let err = ShellConfig::from_json(r#"{ "colour": "red" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(ShellConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_negative_distance() {
    let err = ShellConfig::from_json(r#"{ "header_offset_px": -1 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "header_offset_px" }));
}

#[test]
fn from_json_rejects_blank_storage_key() {
    let err = ShellConfig::from_json(r#"{ "storage_key": "  " }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "storage_key" }));
}

#[test]
fn scroll_easing_resolves_by_name() {
    assert_eq!(ShellConfig::default().easing(), Easing::EaseInOutCubic);
    let config = ShellConfig::from_json(r#"{ "scroll_easing": "easeOutQuart" }"#).expect("parse");
    assert_eq!(config.easing(), Easing::EaseOutQuart);
    let config = ShellConfig::from_json(r#"{ "scroll_easing": "wobble" }"#).expect("parse");
    assert_eq!(config.easing(), Easing::Linear);
}

#[test]
fn from_json_rejects_overshooting_scroll_easing() {
    let err = ShellConfig::from_json(r#"{ "scroll_easing": "easeOutElastic" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "scroll_easing" }));
}
