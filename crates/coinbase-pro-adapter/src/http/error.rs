/*
[INPUT]:  Error sources (validation, transport, API status, JSON, secret decoding)
[OUTPUT]: Structured error types with kind classification and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ApiErrorBody;

/// Main error type for the Coinbase Pro adapter
#[derive(Error, Debug)]
pub enum CoinbaseError {
    /// A caller-supplied parameter was rejected before any network call
    #[error("Validation failed: {0}")]
    Validation(String),

    /// HTTP request failed (connection refused, timeout, DNS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failed without an underlying reqwest error
    #[error("Transport failed: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Response body was not valid JSON or did not match the expected shape
    #[error("Decoding error: {0}")]
    Decoding(#[from] serde_json::Error),

    /// API secret is not valid base64
    #[error("Invalid base64 API secret: {0}")]
    InvalidSecret(#[from] base64::DecodeError),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse error taxonomy exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Never left the client: bad parameter or configuration
    Validation,
    /// Could not reach the server
    Network,
    /// Server rejected the request
    Api,
    /// Secret or response body could not be decoded
    Decoding,
}

impl CoinbaseError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoinbaseError::Validation(_) | CoinbaseError::UrlParse(_) | CoinbaseError::Config(_) => {
                ErrorKind::Validation
            }
            CoinbaseError::Http(_) | CoinbaseError::Transport(_) => ErrorKind::Network,
            CoinbaseError::Api { .. } => ErrorKind::Api,
            CoinbaseError::Decoding(_) | CoinbaseError::InvalidSecret(_) => ErrorKind::Decoding,
        }
    }

    /// Check if the error is worth retrying by the caller
    pub fn is_retryable(&self) -> bool {
        match self {
            CoinbaseError::Http(_) | CoinbaseError::Transport(_) => true,
            CoinbaseError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CoinbaseError::Api { status, .. } => StatusCode::from_u16(*status).ok(),
            _ => None,
        }
    }

    /// The `message` field of the exchange's JSON error body, if any
    pub fn api_message(&self) -> Option<String> {
        match self {
            CoinbaseError::Api { body, .. } => serde_json::from_str::<ApiErrorBody>(body)
                .ok()
                .map(|envelope| envelope.message)
                .filter(|message| !message.is_empty()),
            _ => None,
        }
    }

    /// Create an API error from status code and raw body
    pub fn api_error(status: StatusCode, body: impl Into<String>) -> Self {
        CoinbaseError::Api {
            status: status.as_u16(),
            body: body.into(),
        }
    }
}

/// Result type alias for Coinbase Pro operations
pub type Result<T> = std::result::Result<T, CoinbaseError>;
