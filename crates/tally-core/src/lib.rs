//! # tally-core
//!
//! Data model and business-rule error types for tally.
//!
//! This crate provides the types shared across the tally workspace:
//! - `Task` and `TaskList` entity structs (the persisted wire shape)
//! - `TaskError` for business-rule violations

pub mod errors;
pub mod task;

pub use errors::TaskError;
pub use task::{Task, TaskList};
