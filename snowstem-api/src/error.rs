//! API error types

use thiserror::Error;

/// API-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Unknown stemming algorithm requested at construction time
    #[error("stemming algorithm '{code}' not found")]
    UnknownAlgorithm {
        /// The algorithm identifier that was not recognized
        code: String,
    },

    /// Cache-size hint outside the accepted range
    #[error("cache size must be positive, got {size}")]
    InvalidCacheSize {
        /// The rejected cache size
        size: usize,
    },

    /// The legacy free-function entry point, removed in 1.0.0
    #[error("stem() was removed in 1.0.0; construct a Stemmer and call stem_word()")]
    RemovedApi,
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
