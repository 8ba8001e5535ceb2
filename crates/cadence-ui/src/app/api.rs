//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one settings client per app boot so every panel shares the query cache.

use crate::core::config::UiConfig;
use crate::features::settings::api::SettingsApi;
use crate::services::http::GlooTransport;
use std::rc::Rc;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton settings client.
    pub api: Rc<SettingsApi<GlooTransport>>,
}

impl ApiCtx {
    /// Create a new context from the boot configuration.
    pub(crate) fn new(config: &UiConfig) -> Self {
        let transport = GlooTransport::new(config.clone());
        Self {
            api: Rc::new(SettingsApi::new(transport, config)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.api, &other.api)
    }
}
