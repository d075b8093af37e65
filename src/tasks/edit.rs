//! Field-by-field editing of a task.
//!
//! Each replacement value is validated on its own. A rejected value leaves that
//! field as it was while the remaining valid values still apply.

use crate::core::parse_due;

use super::{Priority, Status, Task};

/// Replacement values for a task. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    /// New title; must not be blank.
    pub title: Option<String>,
    /// New due time as `YYYY-MM-DD HH:MM`, or blank to clear it.
    pub due: Option<String>,
    /// New priority (`high`, `medium`, `low`).
    pub priority: Option<String>,
    /// New status (`pending`, `done`).
    pub status: Option<String>,
}

/// A field of a task that an edit can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Due,
    Priority,
    Status,
}

impl std::fmt::Display for EditField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Title => "title",
            Self::Due => "due",
            Self::Priority => "priority",
            Self::Status => "status",
        })
    }
}

/// Result of applying a [`TaskEdit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// The replacement record.
    pub task: Task,
    /// Fields whose new value was rejected and kept their previous value.
    pub rejected: Vec<EditField>,
}

impl TaskEdit {
    /// Check if this edit changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.due.is_none() && self.priority.is_none() && self.status.is_none()
    }

    /// Apply this edit to `task`, producing a new record.
    #[must_use]
    pub fn apply(&self, task: &Task) -> EditOutcome {
        let mut rejected = Vec::new();

        let title = match &self.title {
            Some(t) if !t.trim().is_empty() => t.clone(),
            Some(_) => {
                rejected.push(EditField::Title);
                task.title().to_string()
            },
            None => task.title().to_string(),
        };

        let due = match &self.due {
            Some(d) if d.trim().is_empty() => None,
            Some(d) => parse_due(d).or_else(|| {
                rejected.push(EditField::Due);
                task.due()
            }),
            None => task.due(),
        };

        let priority = match &self.priority {
            Some(p) => p.parse::<Priority>().unwrap_or_else(|_| {
                rejected.push(EditField::Priority);
                task.priority()
            }),
            None => task.priority(),
        };

        let status = match &self.status {
            Some(s) => s.parse::<Status>().unwrap_or_else(|_| {
                rejected.push(EditField::Status);
                task.status()
            }),
            None => task.status(),
        };

        for field in &rejected {
            tracing::debug!(%field, "edit value rejected, keeping previous value");
        }

        EditOutcome {
            task: Task::new(&title, due, priority, status),
            rejected,
        }
    }
}
