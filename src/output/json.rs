//! JSON output formatting for smartdo.

use serde::Serialize;
use serde_json::{json, Value};

use super::Entry;
use crate::error::TodoError;
use crate::tasks::Task;

fn task_value(index: usize, task: &Task) -> Value {
    json!({
        "position": index + 1,
        "title": task.title(),
        "due": task.due_string(),
        "priority": task.priority(),
        "status": task.status(),
    })
}

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_tasks_json(entries: &[Entry<'_>], list_name: &str) -> Result<String, TodoError> {
    let items: Vec<Value> = entries
        .iter()
        .map(|&(index, task)| task_value(index, task))
        .collect();
    let output = json!({
        "list": list_name,
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn format_task_json(index: usize, task: &Task) -> Result<String, TodoError> {
    Ok(serde_json::to_string_pretty(&task_value(index, task))?)
}

/// Serialize any value to pretty JSON.
///
/// # Errors
///
/// Returns `TodoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TodoError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{Priority, Status};
    use chrono::NaiveDate;

    fn sample() -> Task {
        let due = NaiveDate::from_ymd_opt(2025, 3, 15)
            .unwrap()
            .and_hms_opt(17, 0, 0)
            .unwrap();
        Task::new("Submit report", Some(due), Priority::High, Status::Pending)
    }

    #[test]
    fn test_format_tasks_json() {
        let task = sample();
        let output = format_tasks_json(&[(1, &task)], "Tasks").unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["list"], "Tasks");
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["position"], 2);
        assert_eq!(value["items"][0]["title"], "Submit report");
        assert_eq!(value["items"][0]["due"], "2025-03-15 17:00");
        assert_eq!(value["items"][0]["priority"], "high");
        assert_eq!(value["items"][0]["status"], "pending");
    }

    #[test]
    fn test_format_tasks_json_empty() {
        let output = format_tasks_json(&[], "Tasks").unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["count"], 0);
        assert_eq!(value["items"], json!([]));
    }

    #[test]
    fn test_format_task_json_without_due() {
        let task = Task::new("buy milk", None, Priority::Medium, Status::Done);
        let output = format_task_json(0, &task).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["position"], 1);
        assert_eq!(value["due"], Value::Null);
        assert_eq!(value["status"], "done");
    }

    #[test]
    fn test_to_json() {
        let output = to_json(&json!({"quote": "Keep going."})).unwrap();
        assert!(output.contains("\"quote\": \"Keep going.\""));
    }
}
