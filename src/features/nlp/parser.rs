//! Natural language task interpreter.
//!
//! Turns strings like "Submit report by 15/03/2025 5pm high priority" into a
//! [`Task`] by running a fixed sequence of extractors over a working title:
//!
//! 1. priority marker
//! 2. absolute date
//! 3. relative date (only when no absolute date was found)
//! 4. clock time (always)
//! 5. title cleanup
//!
//! Each extractor sees what the earlier ones left behind, so a date that has
//! already been removed can no longer be mistaken for a clock time.

use chrono::{Local, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{extract_absolute_date, extract_clock_time, extract_relative_date};
use crate::tasks::{Priority, Status, Task, UNTITLED};

use super::extract_priority;

static CONNECTOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "by", "on", "at" anywhere as whole words
    Regex::new(r"(?i)\bby\b|\bon\b|\bat\b")
        .unwrap_or_else(|e| panic!("Invalid connector regex: {e}"))
});

/// Characters stripped from both ends of the title.
const TITLE_EDGE_CHARS: &[char] = &[' ', ',', '.', '-', ';', ':'];

/// Interpret a natural language task description relative to the local clock.
#[must_use]
pub fn interpret(input: &str) -> Task {
    interpret_at(input, Local::now().naive_local())
}

/// Interpret a natural language task description relative to `now`.
///
/// `now` anchors `today`, `tomorrow`, and clock times given without a date.
/// Extraction failures are never errors: the affected field keeps its
/// default and the text stays in the title.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use smartdo::features::nlp::interpret_at;
/// use smartdo::tasks::{Priority, Status};
///
/// let now = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
///
/// let task = interpret_at("Submit report by 15/03/2025 5pm high priority", now);
/// assert_eq!(task.title(), "Submit report");
/// assert_eq!(task.due_string().as_deref(), Some("2025-03-15 17:00"));
/// assert_eq!(task.priority(), Priority::High);
/// assert_eq!(task.status(), Status::Pending);
///
/// let task = interpret_at("buy milk", now);
/// assert_eq!(task.title(), "buy milk");
/// assert!(task.due().is_none());
/// assert_eq!(task.priority(), Priority::Medium);
/// ```
#[must_use]
pub fn interpret_at(input: &str, now: NaiveDateTime) -> Task {
    let original = input.trim();
    let mut working = original.to_string();
    let mut priority = Priority::default();
    let mut due: Option<NaiveDateTime> = None;

    if let Some(found) = extract_priority(&working) {
        tracing::trace!(matched = %found.matched, level = %found.value, "priority");
        priority = found.value;
        working = found.remainder;
    }

    if let Some(found) = extract_absolute_date(&working) {
        tracing::trace!(matched = %found.matched, date = %found.value, "absolute date");
        due = found.value.and_hms_opt(0, 0, 0);
        working = found.remainder;
    }

    if due.is_none() {
        if let Some(found) = extract_relative_date(&working, now) {
            tracing::trace!(matched = %found.matched, date = %found.value, "relative date");
            due = Some(found.value);
            working = found.remainder;
        }
    }

    if let Some(found) = extract_clock_time(&working) {
        tracing::trace!(matched = %found.matched, time = %found.value, "clock time");
        let date = due.map_or_else(|| now.date(), |d| d.date());
        due = Some(date.and_time(found.value));
        working = found.remainder;
    }

    let title = normalize_title(&working, original);

    Task::new(&title, due, priority, Status::Pending)
}

/// Turn the working title left by the extractors into the final title.
///
/// Strips the connector words `by`, `on` and `at` wherever they stand as whole
/// words, then trims whitespace and `,.-;:` from both ends. An empty result
/// falls back to the lowercased original input, then to "Untitled task".
#[must_use]
pub fn normalize_title(working: &str, original: &str) -> String {
    let without_connectors = CONNECTOR_PATTERN.replace_all(working, "");
    let title = without_connectors.trim().trim_matches(TITLE_EDGE_CHARS);

    if !title.is_empty() {
        return title.to_string();
    }

    let lowered = original.trim().to_lowercase();
    if lowered.is_empty() {
        UNTITLED.to_string()
    } else {
        lowered
    }
}
