/*
[INPUT]:  Error sources (local validation, API envelope, HTTP, serialization)
[OUTPUT]: Structured error types that separate local and remote failures
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Input checks performed before any request leaves the process
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("apiKey is required.")]
    MissingApiKey,

    #[error("At least depositCoin or destinationCoin is needed")]
    MissingPairCoin,

    #[error("depositCoin and destinationCoin cannot be the same")]
    SameCoin,

    #[error("You can specify EITHER depositCoinAmount OR destinationCoinAmount")]
    AmbiguousAmount,
}

/// Main error type for the CoinSwitch adapter
#[derive(Error, Debug)]
pub enum CoinswitchError {
    /// Rejected locally, no request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// API answered with `success: false`
    #[error("{message}")]
    Api { code: String, message: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response without a decodable envelope
    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoinswitchError {
    /// Check if the error was raised before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, CoinswitchError::Validation(_))
    }

    /// Check if the error came from an API envelope
    pub fn is_api(&self) -> bool {
        matches!(self, CoinswitchError::Api { .. })
    }

    /// Machine-readable API code, only present on envelope failures
    pub fn code(&self) -> Option<&str> {
        match self {
            CoinswitchError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Create an error for a non-2xx response whose body was not an envelope
    pub fn status_error(status: StatusCode, body: impl Into<String>) -> Self {
        CoinswitchError::Status {
            status: status.as_u16(),
            body: body.into(),
        }
    }
}

/// Result type alias for CoinSwitch operations
pub type Result<T> = std::result::Result<T, CoinswitchError>;
