//! Error handling for the TubeMusic client

use thiserror::Error;

/// Result type alias for navitube operations
pub type Result<T> = std::result::Result<T, TubeError>;

/// Errors that can occur when talking to the TubeMusic API
#[derive(Error, Debug)]
pub enum TubeError {
    /// Authentication failed (missing or expired account cookie)
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Resource not found (album, playlist, browse id, etc.)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration error (anyhow)
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    /// Error reported by the TubeMusic API
    #[error("TubeMusic API error (code {code}): {message}")]
    ApiError { code: u16, message: String },

    /// Quota exceeded (rate limiting)
    #[error("Rate limit exceeded, please try again later")]
    RateLimitExceeded,

    /// Well-formed response that does not carry the expected payload
    #[error("Malformed response: {0}")]
    Parse(String),

    /// Generic error
    #[error("TubeMusic error: {0}")]
    Other(String),
}

impl TubeError {
    /// Creates an API error from an HTTP status code and a message
    pub fn from_status_code(code: u16, message: impl Into<String>) -> Self {
        match code {
            401 | 403 => Self::Unauthorized(message.into()),
            404 => Self::NotFound(message.into()),
            429 => Self::RateLimitExceeded,
            _ => Self::ApiError {
                code,
                message: message.into(),
            },
        }
    }

    /// Checks whether the error is a credentials error (401/403)
    pub fn is_auth_error(&self) -> bool {
        matches!(self, TubeError::Unauthorized(_))
    }

    /// Checks whether the error is a rate-limiting error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, TubeError::RateLimitExceeded)
    }
}
