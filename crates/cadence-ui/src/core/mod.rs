//! Core, DOM-free primitives and helpers for the Web UI.
pub mod clock;
pub mod config;
pub mod error;
pub mod logic;
pub mod notifications;
pub mod query;
pub mod store;
pub mod transport;
