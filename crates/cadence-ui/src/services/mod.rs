//! Browser-only service adapters.
pub(crate) mod http;
