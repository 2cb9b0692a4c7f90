//! Shell configuration with defaults and JSON overrides.
//!
//! Every field has a default from [`crate::consts`], so an override document
//! only needs the keys it changes. Unknown keys are rejected.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::easing::Easing;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Name shown in titles and the footer.
    pub site_owner: String,
    /// Title used for the home route.
    pub site_title: String,
    pub storage_key: String,
    pub scroll_threshold_px: f64,
    pub header_offset_px: f64,
    pub active_section_offset_px: f64,
    pub navbar_scrolled_px: f64,
    pub back_to_top_px: f64,
    pub smooth_scroll_ms: f64,
    /// Curve for animated scrolling, by name. Unknown names mean linear.
    pub scroll_easing: String,
    pub mobile_breakpoint_px: f64,
    pub success_banner_ms: u32,
    pub simulated_submit_delay_ms: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            site_owner: "Jordan Avery".to_owned(),
            site_title: "Jordan Avery - Full-Stack Developer Portfolio".to_owned(),
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            scroll_threshold_px: consts::SCROLL_THRESHOLD_PX,
            header_offset_px: consts::HEADER_OFFSET_PX,
            active_section_offset_px: consts::ACTIVE_SECTION_OFFSET_PX,
            navbar_scrolled_px: consts::NAVBAR_SCROLLED_PX,
            back_to_top_px: consts::BACK_TO_TOP_PX,
            smooth_scroll_ms: consts::SMOOTH_SCROLL_MS,
            scroll_easing: consts::SCROLL_EASING.to_owned(),
            mobile_breakpoint_px: consts::MOBILE_BREAKPOINT_PX,
            success_banner_ms: consts::SUCCESS_BANNER_MS,
            simulated_submit_delay_ms: consts::SIMULATED_SUBMIT_DELAY_MS,
        }
    }
}

impl ShellConfig {
    /// Parse a JSON override document on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys, and
    /// [`ConfigError::OutOfRange`] for negative distances and for a scroll
    /// curve that overshoots its target.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The resolved scroll curve.
    #[must_use]
    pub fn easing(&self) -> Easing {
        Easing::from_name(&self.scroll_easing)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let distances = [
            ("scroll_threshold_px", self.scroll_threshold_px),
            ("header_offset_px", self.header_offset_px),
            ("active_section_offset_px", self.active_section_offset_px),
            ("navbar_scrolled_px", self.navbar_scrolled_px),
            ("back_to_top_px", self.back_to_top_px),
            ("smooth_scroll_ms", self.smooth_scroll_ms),
            ("mobile_breakpoint_px", self.mobile_breakpoint_px),
        ];
        for (field, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field });
            }
        }
        if self.easing().overshoots() {
            return Err(ConfigError::OutOfRange { field: "scroll_easing" });
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::OutOfRange { field: "storage_key" });
        }
        Ok(())
    }
}
