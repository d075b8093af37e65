//! Command implementations for smartdo.
//!
//! This module contains the implementation of all CLI commands. Each command
//! returns the text to print on stdout.

mod add;
mod completions;
mod edit;
mod quote;

pub use add::add;
pub use completions::completions;
pub use edit::edit;
pub use quote::quote;

use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::TodoError;
use crate::output::{format_task, format_tasks, to_json};
use crate::storage::TaskStore;

/// Convert a 1-based position from the command line to a collection index.
///
/// # Errors
///
/// Returns `TodoError::NotFound` for position 0.
pub fn index_from_position(position: usize) -> Result<usize, TodoError> {
    position
        .checked_sub(1)
        .ok_or_else(|| TodoError::NotFound("no task at position 0; positions start at 1".to_string()))
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if the task file cannot be read or output formatting fails.
pub fn list(store: &TaskStore, format: OutputFormat) -> Result<String, TodoError> {
    let tasks = store.load()?;
    let entries: Vec<_> = tasks.iter().enumerate().collect();
    format_tasks(&entries, "Tasks", format)
}

/// Execute filter command
///
/// # Errors
///
/// Returns an error if the task file cannot be read or output formatting fails.
pub fn filter(store: &TaskStore, term: &str, format: OutputFormat) -> Result<String, TodoError> {
    let tasks = store.load()?;
    let entries: Vec<_> = tasks
        .filter(term)
        .into_iter()
        .filter_map(|index| tasks.get(index).map(|task| (index, task)))
        .collect();
    format_tasks(&entries, &format!("Matching \"{term}\""), format)
}

/// Execute done command
///
/// # Errors
///
/// Returns an error if there is no task at `position` or the task file
/// cannot be read or written.
pub fn done(store: &TaskStore, position: usize, format: OutputFormat) -> Result<String, TodoError> {
    let index = index_from_position(position)?;
    let mut tasks = store.load()?;
    tasks.mark_done(index)?;
    store.save(&tasks)?;

    let task = tasks
        .get(index)
        .ok_or_else(|| TodoError::NotFound(format!("no task at position {position}")))?;
    tracing::info!(position, title = task.title(), "marked done");

    match format {
        OutputFormat::Json => format_task(index, task, format),
        OutputFormat::Pretty => Ok(format!("{} {}", "Completed:".green().bold(), task.title())),
    }
}

/// Execute delete command
///
/// # Errors
///
/// Returns an error if there is no task at `position` or the task file
/// cannot be read or written.
pub fn delete(store: &TaskStore, position: usize, format: OutputFormat) -> Result<String, TodoError> {
    let index = index_from_position(position)?;
    let mut tasks = store.load()?;
    let removed = tasks.delete(index)?;
    store.save(&tasks)?;
    tracing::info!(position, title = removed.title(), "deleted");

    match format {
        OutputFormat::Json => to_json(&json!({
            "deleted": true,
            "task": removed,
            "remaining": tasks.len(),
        })),
        OutputFormat::Pretty => Ok(format!("{} {}", "Deleted:".red().bold(), removed.title())),
    }
}
