//! Error Types

use thiserror::Error;

/// Errors from parsing UI-supplied values into model types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    #[error("Unknown priority: {0}")]
    UnknownPriority(String),

    #[error("Invalid task id: {0}")]
    InvalidTaskId(String),
}
