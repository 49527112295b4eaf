//! The task service.
//!
//! Every mutation follows the same protocol:
//! 1. Validate the business rule
//! 2. Apply the change in memory, keeping the minimal delta needed to undo it
//! 3. Save the whole list through the store
//! 4. On save failure, apply the inverse delta and surface the storage error
//!
//! Step 4 keeps memory and disk in lockstep: a failed save leaves the
//! caller's view exactly as if the call never happened.

use chrono::Utc;
use tally_core::{Task, TaskError, TaskList};
use tally_store::Store;

use crate::error::ServiceError;

/// Holds the live `TaskList` and the store it persists through.
///
/// The list is loaded once at construction and owned exclusively for the
/// process lifetime; durability lives in the store, not in memory.
pub struct TaskService<S: Store> {
    list: TaskList,
    store: S,
}

impl<S: Store> TaskService<S> {
    /// Load the task list through the store.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if the underlying load fails. A
    /// missing backing file is not a failure (it loads as the empty list).
    pub fn new(store: S) -> Result<Self, ServiceError> {
        let list = store.load()?;
        Ok(Self { list, store })
    }

    /// Add a task with the next id. The blank check runs on trimmed content,
    /// but the stored description is the original untrimmed text.
    ///
    /// # Errors
    ///
    /// `TaskError::EmptyDescription` if the trimmed text is empty;
    /// `ServiceError::Storage` if the save fails (the add is rolled back and
    /// the same id will be assigned on the next attempt).
    pub fn add_task(&mut self, description: &str) -> Result<Task, ServiceError> {
        if description.trim().is_empty() {
            return Err(TaskError::EmptyDescription.into());
        }

        let task = Task {
            id: self.list.next_id,
            description: description.to_owned(),
            completed: false,
            created_at: Utc::now(),
        };

        self.list.tasks.push(task.clone());
        self.list.next_id += 1;

        if let Err(error) = self.store.save(&self.list) {
            self.list.tasks.pop();
            self.list.next_id -= 1;
            tracing::warn!(%error, id = task.id, "save failed; add rolled back");
            return Err(error.into());
        }

        tracing::debug!(id = task.id, "task added");
        Ok(task)
    }

    /// Snapshot of all tasks in creation order. Never fails; an empty list
    /// yields an empty vec.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.list.tasks.clone()
    }

    /// Mark a task completed. Idempotent: completing an already-completed
    /// task succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// `TaskError::InvalidId` if `id <= 0`, `TaskError::NotFound` if no such
    /// task exists, `ServiceError::Storage` if the save fails (the flag is
    /// reverted to its prior value).
    pub fn complete_task(&mut self, id: i64) -> Result<Task, ServiceError> {
        let index = self.position(id)?;
        let was_completed = self.list.tasks[index].completed;
        self.list.tasks[index].completed = true;

        if let Err(error) = self.store.save(&self.list) {
            self.list.tasks[index].completed = was_completed;
            tracing::warn!(%error, id, "save failed; completion rolled back");
            return Err(error.into());
        }

        tracing::debug!(id, "task completed");
        Ok(self.list.tasks[index].clone())
    }

    /// Remove a task. `next_id` is untouched, so a deleted id is never
    /// assigned again.
    ///
    /// # Errors
    ///
    /// Same id validation as [`Self::complete_task`]; `ServiceError::Storage`
    /// if the save fails (the task is reinserted at its original position).
    pub fn delete_task(&mut self, id: i64) -> Result<Task, ServiceError> {
        let index = self.position(id)?;
        let removed = self.list.tasks.remove(index);

        if let Err(error) = self.store.save(&self.list) {
            self.list.tasks.insert(index, removed);
            tracing::warn!(%error, id, "save failed; deletion rolled back");
            return Err(error.into());
        }

        tracing::debug!(id, "task deleted");
        Ok(removed)
    }

    /// Index of the task with `id`. The `id <= 0` check is a business rule,
    /// re-validated here even though the CLI parses ids before calling in.
    fn position(&self, id: i64) -> Result<usize, TaskError> {
        if id <= 0 {
            return Err(TaskError::InvalidId { id });
        }
        self.list
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskError::NotFound { id })
    }
}
