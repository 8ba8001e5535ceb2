//! Runtime configuration for the settings console.
//!
//! # Design
//! - Defaults reproduce the shipped behaviour; the browser shell only overrides the base URL.
//! - Keep values plain so the DOM-free core can be configured from tests.

/// Maximum number of notifications shown at once.
pub const DEFAULT_NOTIFICATION_LIMIT: usize = 1;
/// Delay before a notification is removed automatically.
pub const DEFAULT_NOTIFICATION_REMOVE_DELAY_MS: u64 = 1_000_000;
/// Window during which a cached list is served without refetching.
pub const DEFAULT_LIST_STALE_MS: u64 = 30_000;
/// Base URL used when nothing better is known.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Limits applied by the notification queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationConfig {
    /// Maximum visible notifications; values below 1 are treated as 1.
    pub limit: usize,
    /// Milliseconds before an entry is removed automatically.
    pub remove_delay_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_NOTIFICATION_LIMIT,
            remove_delay_ms: DEFAULT_NOTIFICATION_REMOVE_DELAY_MS,
        }
    }
}

/// Top-level UI configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    api_base_url: String,
    /// Freshness window for cached list queries.
    pub list_stale_ms: u64,
    /// Notification queue limits.
    pub notifications: NotificationConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl UiConfig {
    /// Configuration pointing at `api_base_url` with default limits.
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
            list_stale_ms: DEFAULT_LIST_STALE_MS,
            notifications: NotificationConfig::default(),
        }
    }

    /// Override the list freshness window.
    #[must_use]
    pub const fn with_list_stale_ms(mut self, list_stale_ms: u64) -> Self {
        self.list_stale_ms = list_stale_ms;
        self
    }

    /// API origin without a trailing slash.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let config = UiConfig::new(" https://plan.example.org/// ");
        assert_eq!(config.api_base_url(), "https://plan.example.org");
        assert_eq!(
            config.url_for("/api/time-slots"),
            "https://plan.example.org/api/time-slots"
        );
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        assert_eq!(UiConfig::new("  ").api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn defaults_match_notification_policy() {
        let config = UiConfig::default().with_list_stale_ms(0);
        assert_eq!(config.list_stale_ms, 0);
        assert_eq!(config.notifications.limit, 1);
        assert_eq!(config.notifications.remove_delay_ms, 1_000_000);
    }
}
