//! Business-rule error types.
//!
//! Persistence failures are defined in `tally-store`; the service layer
//! converges both families into one enum for callers.

use thiserror::Error;

/// A business-rule violation. Always user-correctable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// The description was empty (or whitespace-only) after trimming.
    #[error("task description cannot be empty")]
    EmptyDescription,

    /// The id is not a positive integer.
    #[error("invalid task id: {id}")]
    InvalidId { id: i64 },

    /// No task with this id exists (never created, or already deleted).
    #[error("task not found: {id}")]
    NotFound { id: i64 },
}
