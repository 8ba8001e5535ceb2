//! Browser HTTP transport (REST over `fetch`).

use crate::core::config::UiConfig;
use crate::core::error::ApiError;
use crate::core::transport::{ApiRequest, ApiResponse, Method, Transport};
use async_trait::async_trait;
use gloo_net::http::Request;

/// `fetch`-backed transport rooted at the API origin.
#[derive(Clone, Debug)]
pub(crate) struct GlooTransport {
    config: UiConfig,
}

impl GlooTransport {
    pub(crate) const fn new(config: UiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.config.url_for(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("accept", "application/json");

        let sent = match &request.body {
            Some(body) => builder.json(body).map_err(network)?.send().await,
            None => builder.send().await,
        };
        let response = sent.map_err(network)?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(ApiResponse { status, body })
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}
