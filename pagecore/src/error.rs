//! Error types for the page shell.
//!
//! None of these reach the user directly. Storage failures are downgraded to
//! warnings, submit failures become a banner, and theme errors are logged and
//! dropped.

/// Failures touching browser storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or absent in this browsing context.
    #[error("storage unavailable")]
    Unavailable,

    /// Reading a key failed.
    #[error("storage read failed: {0}")]
    Read(String),

    /// Writing a key failed (quota, private mode, ...).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Errors produced by theme parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The value is not one of `light`, `dark`, `auto`.
    #[error("invalid theme: {0}")]
    InvalidPreference(String),
}

/// Failures from the contact submission contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The receiving side refused the message. Callers need no further detail.
    #[error("submission rejected")]
    Rejected,

    /// The transport failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),
}

/// Failures loading [`crate::config::ShellConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override document was not valid JSON for the config shape.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed but is out of range.
    #[error("config value out of range: {field}")]
    OutOfRange { field: &'static str },
}
