//! File-backed implementation of the persistence store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tally_core::TaskList;

use crate::error::StoreError;

/// Durable load/save of a `TaskList`. The seam the service is generic over.
pub trait Store {
    /// Read the backing location. A missing file is not a failure: it loads
    /// as the empty list with `next_id = 1`.
    fn load(&self) -> Result<TaskList, StoreError>;

    /// Serialize the full list and write it crash-safely: after `save`
    /// returns (or fails), the backing file holds either the old complete
    /// content or the new complete content, never a mix.
    fn save(&self, list: &TaskList) -> Result<(), StoreError>;
}

/// `Store` bound to a single JSON file path. Stateless between calls.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling temp path the atomic save writes to before the rename.
    fn temp_path(&self) -> PathBuf {
        let mut raw = self.path.as_os_str().to_os_string();
        raw.push(".tmp");
        PathBuf::from(raw)
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<TaskList, StoreError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no task file; starting empty");
                return Ok(TaskList::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let list: TaskList =
            serde_json::from_slice(&data).map_err(|source| StoreError::InvalidFormat {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), tasks = list.tasks.len(), "loaded task file");
        Ok(list)
    }

    fn save(&self, list: &TaskList) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(list)
            .map_err(|error| self.write_error(io::Error::other(error)))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
        }

        let temp = self.temp_path();
        if let Err(source) = fs::write(&temp, &data) {
            // A partial temp file may exist (e.g. disk full mid-write).
            let _ = fs::remove_file(&temp);
            return Err(self.write_error(source));
        }

        if let Err(source) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(self.write_error(source));
        }

        tracing::debug!(path = %self.path.display(), tasks = list.tasks.len(), "saved task file");
        Ok(())
    }
}
