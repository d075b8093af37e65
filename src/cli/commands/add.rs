//! Add command implementation.
//!
//! This module implements the `smartdo add` command for natural language task entry.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{AddArgs, OutputFormat};
use crate::error::TodoError;
use crate::features::nlp::interpret;
use crate::output::{format_task_pretty, to_json};
use crate::storage::TaskStore;
use crate::tasks::Task;

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the task file cannot be read or written.
pub fn add(store: &TaskStore, args: &AddArgs, format: OutputFormat) -> Result<String, TodoError> {
    let task = interpret(&args.joined_text());

    if args.parse_only {
        return format_parsed_task(&task, format);
    }

    let mut tasks = store.load()?;
    let index = tasks.add(task.clone());
    store.save(&tasks)?;
    tracing::info!(position = index + 1, title = task.title(), "added task");

    match format {
        OutputFormat::Json => to_json(&json!({
            "created": true,
            "position": index + 1,
            "task": task,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Added:".green().bold(),
            format_task_pretty(index, &task)
        )),
    }
}

fn format_parsed_task(task: &Task, format: OutputFormat) -> Result<String, TodoError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "created": false,
            "task": task,
        })),
        OutputFormat::Pretty => {
            let mut output = format!("{}\n", "Parsed (not saved):".yellow().bold());
            output.push_str(&format!("  {}: {}\n", "Title".dimmed(), task.title()));
            output.push_str(&format!(
                "  {}: {}\n",
                "Due".dimmed(),
                task.due_string().unwrap_or_else(|| "-".to_string())
            ));
            output.push_str(&format!("  {}: {}\n", "Priority".dimmed(), task.priority()));
            output.push_str(&format!("  {}: {}", "Status".dimmed(), task.status()));
            Ok(output)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(text: &str, parse_only: bool) -> AddArgs {
        AddArgs {
            text: text.split_whitespace().map(str::to_string).collect(),
            parse_only,
        }
    }

    #[test]
    fn test_add_saves_task() {
        let temp_dir = TempDir::new().unwrap();
        let store = TaskStore::new(temp_dir.path().join("tasks.json"));

        let output = add(
            &store,
            &args("Submit report by 15/03/2025 5pm high priority", false),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["created"], true);
        assert_eq!(value["position"], 1);
        assert_eq!(value["task"]["title"], "Submit report");
        assert_eq!(value["task"]["due"], "2025-03-15 17:00");
        assert_eq!(value["task"]["priority"], "high");
        assert_eq!(value["task"]["status"], "pending");

        let tasks = store.load().unwrap();
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_add_appends() {
        let temp_dir = TempDir::new().unwrap();
        let store = TaskStore::new(temp_dir.path().join("tasks.json"));

        add(&store, &args("first", false), OutputFormat::Pretty).unwrap();
        let output = add(&store, &args("second low priority", false), OutputFormat::Pretty).unwrap();

        assert!(output.contains("Added:"));
        assert!(output.contains("second"));
        let tasks = store.load().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.get(1).unwrap().title(), "second");
    }

    #[test]
    fn test_parse_only_does_not_save() {
        let temp_dir = TempDir::new().unwrap();
        let store = TaskStore::new(temp_dir.path().join("tasks.json"));

        let output = add(&store, &args("pay rent on 2025-04-01 priority: low", true), OutputFormat::Pretty)
            .unwrap();

        assert!(output.contains("Parsed (not saved)"));
        assert!(output.contains("pay rent"));
        assert!(output.contains("2025-04-01 00:00"));
        assert!(output.contains("low"));
        assert!(!store.path().exists());
    }
}
