//! Task record types.

use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{format_due, parse_due, truncate_to_minute};
use crate::error::TodoError;

/// Title used when nothing else is available.
pub const UNTITLED: &str = "Untitled task";

/// Priority levels for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(TodoError::InvalidInput(format!(
                "unknown priority '{other}' (expected high, medium or low)"
            ))),
        }
    }
}

/// Completion status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Done,
}

impl Status {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            other => Err(TodoError::InvalidInput(format!(
                "unknown status '{other}' (expected pending or done)"
            ))),
        }
    }
}

/// A single to-do item.
///
/// Records are never mutated in place: marking done or editing builds a new
/// record that replaces the old one in the [`TaskList`](super::TaskList).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default = "untitled", deserialize_with = "deserialize_title")]
    title: String,
    #[serde(default, with = "due_format")]
    due: Option<NaiveDateTime>,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    status: Status,
}

impl Task {
    /// Build a task, trimming the title and truncating the due time to minutes.
    ///
    /// An empty title becomes [`UNTITLED`].
    #[must_use]
    pub fn new(
        title: &str,
        due: Option<NaiveDateTime>,
        priority: Priority,
        status: Status,
    ) -> Self {
        Self {
            title: normalize_title(title),
            due: due.map(truncate_to_minute),
            priority,
            status,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn due(&self) -> Option<NaiveDateTime> {
        self.due
    }

    /// Due time as `YYYY-MM-DD HH:MM`, if set.
    #[must_use]
    pub fn due_string(&self) -> Option<String> {
        self.due.as_ref().map(format_due)
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }

    /// A copy of this task with status `done`.
    #[must_use]
    pub fn completed(&self) -> Self {
        Self {
            status: Status::Done,
            ..self.clone()
        }
    }

    /// Case-insensitive substring match against title, due, priority and status.
    #[must_use]
    pub fn matches_term(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&needle)
            || self.due_string().is_some_and(|d| d.contains(&needle))
            || self.priority.as_str().contains(&needle)
            || self.status.as_str().contains(&needle)
    }
}

fn normalize_title(title: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

fn untitled() -> String {
    UNTITLED.to_string()
}

fn deserialize_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(normalize_title(raw.as_deref().unwrap_or_default()))
}

/// Serde adapter storing due times as `"YYYY-MM-DD HH:MM"` or `null`.
mod due_format {
    use super::{format_due, parse_due, Deserialize, Deserializer, NaiveDateTime, Serializer};

    pub fn serialize<S>(due: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match due {
            Some(dt) => serializer.serialize_str(&format_due(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_due(&s).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid due '{s}', expected YYYY-MM-DD HH:MM"))
            }),
        }
    }
}
