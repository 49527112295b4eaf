//! Persistence error types.

use std::path::PathBuf;

use thiserror::Error;

/// A persistence-layer failure. May indicate an environment problem such as
/// permissions or disk space; never retried internally.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    #[error("failed to read task file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization or either step of the atomic write failed.
    #[error("failed to write task file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not parse as a task list.
    #[error("invalid task file format in {}: {source}", path.display())]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
