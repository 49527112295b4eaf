//! # tally-store
//!
//! Durable load/save of the task list.
//!
//! `FileStore` keeps the whole `TaskList` in one JSON file and saves with a
//! write-temp-then-rename promote, so the file on disk is always either the
//! previous complete content or the new complete content. The `Store` trait
//! is the seam the service layer is generic over.

pub mod error;
pub mod file_store;

pub use error::StoreError;
pub use file_store::{FileStore, Store};
