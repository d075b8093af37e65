//! Edit command implementation.

use colored::Colorize;
use serde_json::json;

use super::index_from_position;
use crate::cli::args::{EditArgs, OutputFormat};
use crate::error::TodoError;
use crate::output::{format_task_pretty, to_json};
use crate::storage::TaskStore;
use crate::tasks::TaskEdit;

/// Execute the edit command.
///
/// Rejected fields are reported on stderr as warnings and do not fail the
/// command.
///
/// # Errors
///
/// Returns an error if no field was given, there is no task at the
/// position, or the task file cannot be read or written.
pub fn edit(store: &TaskStore, args: EditArgs, format: OutputFormat) -> Result<String, TodoError> {
    let index = index_from_position(args.position)?;
    let changes = TaskEdit {
        title: args.title,
        due: args.due,
        priority: args.priority,
        status: args.status,
    };

    if changes.is_empty() {
        return Err(TodoError::InvalidInput(
            "nothing to edit; pass --title, --due, --priority or --status".to_string(),
        ));
    }

    let mut tasks = store.load()?;
    let outcome = tasks.edit(index, &changes)?;
    store.save(&tasks)?;

    for field in &outcome.rejected {
        eprintln!(
            "{}: invalid {field}, kept the previous value",
            "warning".yellow().bold()
        );
    }

    match format {
        OutputFormat::Json => to_json(&json!({
            "position": args.position,
            "task": outcome.task,
            "rejected": outcome.rejected.iter().map(ToString::to_string).collect::<Vec<_>>(),
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Updated:".green().bold(),
            format_task_pretty(index, &outcome.task)
        )),
    }
}
