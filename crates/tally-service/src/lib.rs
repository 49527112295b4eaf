//! # tally-service
//!
//! The task service: owns the live `TaskList`, enforces validation and id
//! invariants, and persists after every mutation with rollback on failure.

pub mod error;
pub mod service;

pub use error::ServiceError;
pub use service::TaskService;
