//! Top-level route pages.

pub mod home;
pub mod not_found;
pub mod project_details;
