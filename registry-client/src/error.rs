//! Client error types

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use shared::error::ApiResponse;

/// A non-success HTTP response, decoded from the server's error envelope
///
/// When the body is not a valid envelope (proxy errors, plain-text bodies)
/// the raw text becomes the message and no details are carried.
#[derive(Debug, Clone, Error)]
#[error("{status} {status_text}: {message}")]
pub struct HttpError {
    /// HTTP status code
    pub status: u16,
    /// Canonical status text ("Bad Request", "Not Found", ...)
    pub status_text: String,
    /// Server-provided message
    pub message: String,
    /// Field-level error details, when the server sent any
    pub details: Option<HashMap<String, Value>>,
}

impl HttpError {
    /// Build from a response status and raw body text
    pub fn from_parts(status: http::StatusCode, body: &str) -> Self {
        let (message, details) = match serde_json::from_str::<ApiResponse<()>>(body) {
            Ok(envelope) => (envelope.message, envelope.details),
            Err(_) => (body.to_string(), None),
        };

        Self {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            message,
            details,
        }
    }

    /// Message for one failed field, if the server reported it
    pub fn field_message(&self, field: &str) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|d| d.get(field))
            .and_then(Value::as_str)
    }
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error(transparent)]
    Api(#[from] HttpError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
