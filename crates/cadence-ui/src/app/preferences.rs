//! Persistence and environment helpers for the app shell.

use crate::core::config::{DEFAULT_API_BASE_URL, UiConfig};
use gloo::console;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) const API_BASE_URL_KEY: &str = "cadence.api_base_url";

/// Boot configuration for the current page.
pub(crate) fn load_config() -> UiConfig {
    UiConfig::new(api_base_url())
}

/// API origin: a stored override, else the page origin.
pub(crate) fn api_base_url() -> String {
    if let Some(value) = load_string(API_BASE_URL_KEY) {
        if !value.trim().is_empty() {
            return value;
        }
    }
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

fn load_string(key: &'static str) -> Option<String> {
    match LocalStorage::get::<String>(key) {
        Ok(value) => Some(value),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            log_storage_error("get", key, &err.to_string());
            None
        }
    }
}

fn log_storage_error(operation: &str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
