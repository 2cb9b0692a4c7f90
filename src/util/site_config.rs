//! Page-provided configuration overrides.
//!
//! The host page may embed
//! `<script id="site-config" type="application/json">{...}</script>` with any
//! subset of [`ShellConfig`] keys. A missing element means defaults; a bad
//! document is logged and also means defaults.

#[cfg(test)]
#[path = "site_config_test.rs"]
mod site_config_test;

use pagecore::config::ShellConfig;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn load() -> ShellConfig {
    from_raw(read_raw().as_deref())
}

/// Resolve an optional override document into a config.
pub fn from_raw(raw: Option<&str>) -> ShellConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return ShellConfig::default();
    };
    match ShellConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            ShellConfig::default()
        }
    }
}

fn read_raw() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.document()?.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
