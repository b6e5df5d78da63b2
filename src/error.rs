//! Error types for the LRU cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == LRU Error Enum ==
/// Unified error type for the cache and the replay harness.
#[derive(Error, Debug)]
pub enum LruError {
    /// Capacity below 1 was requested at construction
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(i64),

    /// Scripted capacity exceeds the configured maximum
    #[error("Capacity {requested} exceeds configured maximum of {max}")]
    CapacityTooLarge { requested: i64, max: usize },

    /// Malformed replay script
    #[error("Invalid script: {0}")]
    InvalidScript(String),

    /// Script could not be parsed or the report could not be written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Script could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, LruError>;
