//! Error types for API access.

use cadence_api_models::ProblemDetails;
use thiserror::Error;

/// Failure surfaced by the data access layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response.
        message: String,
    },
    /// The response body did not match the expected shape.
    #[error("unexpected response from server: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Classify a non-success response body into a status error.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ProblemDetails>(body).map_or_else(
            |_| {
                let text = body.trim();
                if text.is_empty() {
                    format!("request failed with status {status}")
                } else {
                    text.to_string()
                }
            },
            |problem| problem.message().to_string(),
        );
        Self::Status { status, message }
    }

    /// HTTP status when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn problem_documents_supply_the_message() {
        let err = ApiError::from_response(
            409,
            r#"{"type":"about:blank","title":"Conflict","status":409,"detail":"code LEC already exists"}"#,
        );
        assert_eq!(err.to_string(), "code LEC already exists");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn plain_bodies_and_empty_bodies_are_classified() {
        assert_eq!(
            ApiError::from_response(500, " boom \n").to_string(),
            "boom"
        );
        assert_eq!(
            ApiError::from_response(502, "").to_string(),
            "request failed with status 502"
        );
    }

    #[test]
    fn transport_failures_have_no_status() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "network request failed: connection refused");
    }
}
