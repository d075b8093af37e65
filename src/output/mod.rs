//! Output formatting for smartdo.
//!
//! Tasks are shown with their 1-based position so the position can be passed
//! straight back to `edit`, `done` or `delete`.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::TodoError;
use crate::tasks::Task;

pub use json::*;
pub use pretty::*;

/// A task paired with its 0-based position in the collection.
pub type Entry<'a> = (usize, &'a Task);

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_tasks(
    entries: &[Entry<'_>],
    title: &str,
    format: OutputFormat,
) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(entries, title)),
        OutputFormat::Json => format_tasks_json(entries, title),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_task(index: usize, task: &Task, format: OutputFormat) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(index, task)),
        OutputFormat::Json => format_task_json(index, task),
    }
}
