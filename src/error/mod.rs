//! Error types for the explanation pipeline

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for explanation pipeline operations
pub type Result<T> = std::result::Result<T, ExplainError>;

/// Outward message when the provider gives no usable error message
pub const PROVIDER_FALLBACK_MESSAGE: &str = "Failed to get explanation from OpenRouter";

/// Main error type for the explanation pipeline
#[derive(Error, Debug)]
pub enum ExplainError {
    #[error("{0}")]
    MissingInput(String),

    #[error("OpenRouter API key is required. Please provide one or configure it on the server.")]
    MissingCredential,

    #[error("Provider error {status:?}: {message}")]
    Provider {
        /// HTTP status reported by the provider, `None` for transport failures
        status: Option<u16>,
        message: String,
        /// Raw provider error body, kept for diagnostics
        data: Option<serde_json::Value>,
    },

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Malformed provider response: {0}")]
    MalformedProviderResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// The only value surfaced to the caller on failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorReport {
    pub status_code: u16,
    pub status_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ExplainError {
    /// HTTP status this error is surfaced with
    pub fn status_code(&self) -> StatusCode {
        match self {
            ExplainError::MissingInput(_) => StatusCode::BAD_REQUEST,
            ExplainError::MissingCredential => StatusCode::UNAUTHORIZED,
            ExplainError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ExplainError::Provider { status, .. } => status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ExplainError::MalformedProviderResponse(_)
            | ExplainError::Config(_)
            | ExplainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the outward error report.
    ///
    /// Internal details (parse errors, config problems) stay in the logs; the
    /// report only carries messages meant for the end user.
    pub fn report(&self) -> ApiErrorReport {
        let (status_message, data) = match self {
            ExplainError::MissingInput(message) => (message.clone(), None),
            ExplainError::MissingCredential | ExplainError::PayloadTooLarge => {
                (self.to_string(), None)
            }
            ExplainError::Provider { message, data, .. } => (message.clone(), data.clone()),
            ExplainError::MalformedProviderResponse(_) => {
                (PROVIDER_FALLBACK_MESSAGE.to_string(), None)
            }
            ExplainError::Config(_) | ExplainError::Internal(_) => {
                ("Internal server error".to_string(), None)
            }
        };

        ApiErrorReport {
            status_code: self.status_code().as_u16(),
            status_message,
            data,
        }
    }
}

impl IntoResponse for ExplainError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.report())).into_response()
    }
}

impl From<config::ConfigError> for ExplainError {
    fn from(err: config::ConfigError) -> Self {
        ExplainError::Config(err.to_string())
    }
}
