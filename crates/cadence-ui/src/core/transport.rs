//! Transport seam between the data access layer and the network.
//!
//! # Design
//! - Requests carry API paths only; the transport owns the base URL.
//! - Any HTTP response (including non-2xx) is returned as `Ok`; classification happens upstream.
//! - Futures are `?Send` because the browser runtime is single-threaded.

use crate::core::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP verbs used by the settings resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Read a collection.
    Get,
    /// Create a record.
    Post,
    /// Replace a record.
    Put,
    /// Delete a record.
    Delete,
}

impl Method {
    /// Upper-case verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Outbound API request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: Method,
    /// Path relative to the API origin, starting with `/`.
    pub path: String,
    /// Optional JSON body.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Request without a body.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Request carrying a serialized JSON body.
    ///
    /// # Errors
    /// Returns [`ApiError::Encode`] when the payload cannot be serialized.
    pub fn with_json<T: serde::Serialize>(
        method: Method,
        path: impl Into<String>,
        payload: &T,
    ) -> Result<Self, ApiError> {
        let body =
            serde_json::to_value(payload).map_err(|err| ApiError::Encode(err.to_string()))?;
        Ok(Self {
            method,
            path: path.into(),
            body: Some(body),
        })
    }
}

/// Raw HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text (may be empty).
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Performs HTTP exchanges against the API.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return whatever response the server produced.
    ///
    /// # Errors
    /// Returns [`ApiError::Network`] when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}
