use colored::{ColoredString, Colorize};

use super::Entry;
use crate::tasks::{Priority, Status, Task};

fn status_icon(status: Status) -> ColoredString {
    match status {
        Status::Pending => "[ ]".white(),
        Status::Done => "[x]".green(),
    }
}

fn priority_label(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => priority.as_str().red(),
        Priority::Medium => priority.as_str().yellow(),
        Priority::Low => priority.as_str().dimmed(),
    }
}

/// Format a list of tasks as a pretty table
#[must_use]
pub fn format_tasks_pretty(entries: &[Entry<'_>], title: &str) -> String {
    if entries.is_empty() {
        return format!("{title} (0 items)\n  No items");
    }

    let mut output = format!("{title} ({} items)\n", entries.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for &(index, task) in entries {
        let name = match task.status() {
            Status::Done => task.title().dimmed(),
            Status::Pending => task.title().bold(),
        };

        let mut line = format!(
            "{:>3}. {} {}  {}",
            index + 1,
            status_icon(task.status()),
            name,
            priority_label(task.priority())
        );

        if let Some(due) = task.due_string() {
            line.push_str(&format!("  {}", due.cyan()));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a single task as pretty output
#[must_use]
pub fn format_task_pretty(index: usize, task: &Task) -> String {
    let mut output = format!("{} {}\n", status_icon(task.status()), task.title().bold());
    output.push_str(&format!("  {}: {}\n", "Position".dimmed(), index + 1));
    output.push_str(&format!("  {}: {}\n", "Status".dimmed(), task.status()));
    output.push_str(&format!(
        "  {}: {}\n",
        "Priority".dimmed(),
        priority_label(task.priority())
    ));

    match task.due_string() {
        Some(due) => output.push_str(&format!("  {}: {}\n", "Due".dimmed(), due.cyan())),
        None => output.push_str(&format!("  {}: {}\n", "Due".dimmed(), "-".dimmed())),
    }

    output
}
