//! Error handling

use thiserror::Error;

/// Error
#[derive(Error, Debug)]
pub enum SDKError {
    /// Required argument missing or empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token acquisition failed
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Connectivity failure or timeout
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the API, body preserved verbatim
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// SDK result type
pub type Result<T> = std::result::Result<T, SDKError>;

impl SDKError {
    /// Whether a caller-side retry could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            SDKError::Network(_) => true,
            SDKError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SDKError::InvalidArgument(_))
    }

    /// Error
    pub fn is_auth_error(&self) -> bool {
        matches!(self, SDKError::Auth(_))
    }
}
