//! Error types for the queue model.

use thiserror::Error;

/// Result type alias for queue model operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// Errors that can occur while capturing queue state or querying assignments.
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("node {0} cannot report executor state")]
    NodeUnavailable(String),

    #[error("no assignment recorded for queue item {0}")]
    UnknownId(u64),
}
