//! Settings feature wiring: activity types and time slots.
//!
//! # Design
//! - Keep reference-data management contained in a single feature slice.
//! - Restrict API calls to this feature layer to honor UI boundaries.
//! - Everything except the view compiles natively for tests.

pub mod actions;
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
