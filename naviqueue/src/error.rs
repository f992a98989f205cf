//! Error types for queue and paging operations

/// Result type alias for naviqueue operations
pub type Result<T> = std::result::Result<T, QueueError>;

/// Errors that can occur while paging a queue or a listing
///
/// Paging code never retries or swallows failures itself: errors are
/// propagated upward with the paging state untouched, so repeating the
/// failed call is safe.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// The remote paging source failed (network, deserialization, API error)
    #[error("Remote source error: {0}")]
    Source(#[from] navitube::TubeError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl QueueError {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
