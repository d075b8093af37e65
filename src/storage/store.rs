//! JSON task file persistence.
//!
//! The task list is stored as a pretty-printed JSON array of
//! `{title, due, priority, status}` objects, in collection order.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::TodoError;
use crate::tasks::{Task, TaskList};

/// Reads and writes the task list at a fixed path.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the task list.
    ///
    /// A missing file is an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Storage` if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<TaskList, TodoError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no task file yet, starting empty");
                return Ok(TaskList::new());
            },
            Err(e) => {
                return Err(TodoError::Storage(format!(
                    "Failed to read tasks file {}: {e}",
                    self.path.display()
                )))
            },
        };

        let tasks: Vec<Task> = serde_json::from_str(&contents).map_err(|e| {
            TodoError::Storage(format!(
                "Failed to parse tasks file {}: {e}",
                self.path.display()
            ))
        })?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(TaskList::from_tasks(tasks))
    }

    /// Save the task list, replacing the file's previous contents.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Storage` if the file or its directory cannot be written.
    pub fn save(&self, tasks: &TaskList) -> Result<(), TodoError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    TodoError::Storage(format!(
                        "Failed to create directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let contents = serde_json::to_string_pretty(tasks.as_slice())?;

        std::fs::write(&self.path, contents).map_err(|e| {
            TodoError::Storage(format!(
                "Failed to write tasks file {}: {e}",
                self.path.display()
            ))
        })?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}
