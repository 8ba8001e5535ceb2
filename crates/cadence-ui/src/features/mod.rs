//! Feature slices.
pub mod settings;
