//! Shared numeric and string constants for the page shell.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

// ── Scroll ──────────────────────────────────────────────────────

/// Offset past which the page counts as "scrolled" for top/bottom flags.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Fixed navbar height subtracted when jumping to an anchor.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Compensation added to the scroll position when picking the active section.
pub const ACTIVE_SECTION_OFFSET_PX: f64 = 100.0;

/// Offset past which the navbar switches to its solid style.
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;

/// Offset past which the back-to-top button is shown.
pub const BACK_TO_TOP_PX: f64 = 500.0;

/// Duration of an animated anchor scroll.
pub const SMOOTH_SCROLL_MS: f64 = 800.0;

/// Curve name used for animated scrolling.
pub const SCROLL_EASING: &str = "easeInOutCubic";

// ── Layout ──────────────────────────────────────────────────────

/// Viewport widths at or below this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ── Contact form ────────────────────────────────────────────────

/// How long the success banner stays up after a send.
pub const SUCCESS_BANNER_MS: u32 = 5_000;

/// Latency of the placeholder contact submission.
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2_000;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 50;
pub const MIN_SUBJECT_LENGTH: usize = 5;
pub const MAX_SUBJECT_LENGTH: usize = 100;
pub const MIN_MESSAGE_LENGTH: usize = 10;
pub const MAX_MESSAGE_LENGTH: usize = 500;

/// Email shape check used by the `email` rule.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

// ── Theme colors ────────────────────────────────────────────────

/// `<meta name="theme-color">` value for the dark theme.
pub const DARK_META_COLOR: &str = "#111827";

/// `<meta name="theme-color">` value for the light theme.
pub const LIGHT_META_COLOR: &str = "#ffffff";

// ── Sections ────────────────────────────────────────────────────

/// Home-page section anchors in document order.
pub const SECTION_IDS: [&str; 6] = ["home", "about", "skills", "projects", "experience", "contact"];
