//! Error convergence for service callers.

use tally_core::TaskError;
use tally_store::StoreError;
use thiserror::Error;

/// Everything a service operation can fail with: a business-rule violation
/// or a persistence failure that was rolled back in memory.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Task(#[from] TaskError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}
