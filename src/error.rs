//! Error definitions for the logging facade.

use thiserror::Error;

/// Errors that can occur while producing a log record.
///
/// Both variants propagate to the caller of the logging operation; the
/// facade never substitutes placeholder attribution or falls back to a
/// different output shape, since either would corrupt downstream log
/// consumers.
#[derive(Debug, Error)]
pub enum LogError {
    /// The requested caller frame does not exist in the captured chain.
    #[error("caller frame {requested} not available ({available} frame(s) captured)")]
    FrameResolution { requested: usize, available: usize },

    /// JSON encoding of the record failed.
    #[error("failed to serialize log record: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for logging operations.
pub type LogResult<T> = Result<T, LogError>;
