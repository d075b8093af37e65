//! Date and time extraction for natural language task input.
//!
//! Three extractors live here, each matching against the lowercased working
//! title and returning an [`Extraction`] on success:
//! - absolute dates: `15/03/2025`, `5/3/2025`, `2025-03-15`, `2025-3-5`
//! - relative dates: `today`, `tomorrow`
//! - clock times: `5pm`, `5 pm`, `5:30pm`, `17:30`, `17`
//!
//! A pattern that matches but does not describe a real date or time yields
//! `None`, exactly like a pattern that does not match at all.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use super::Extraction;

/// Format used for due timestamps everywhere outside the interpreter.
pub const DUE_FORMAT: &str = "%Y-%m-%d %H:%M";

// Compiled regex patterns
static DAY_MONTH_YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b")
        .unwrap_or_else(|e| panic!("Invalid day/month/year regex: {e}"))
});

static YEAR_MONTH_DAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b")
        .unwrap_or_else(|e| panic!("Invalid year-month-day regex: {e}"))
});

static TODAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btoday\b").unwrap_or_else(|e| panic!("Invalid today regex: {e}"))
});

static TOMORROW_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\btomorrow\b").unwrap_or_else(|e| panic!("Invalid tomorrow regex: {e}"))
});

static CLOCK_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // hour, optional :minutes, optional am/pm possibly separated by whitespace
    Regex::new(r"\b(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\b")
        .unwrap_or_else(|e| panic!("Invalid clock time regex: {e}"))
});

/// Extract an absolute date from the working title.
///
/// `D/M/YYYY` is tried first; `YYYY-M-D` only when the first format yields
/// nothing (no match, or a match that is not a real calendar date). Only the
/// first occurrence of each format is considered.
#[must_use]
pub fn extract_absolute_date(text: &str) -> Option<Extraction<NaiveDate>> {
    let lowered = text.to_lowercase();

    let day_first = DAY_MONTH_YEAR_PATTERN.captures(&lowered).and_then(|caps| {
        let date = calendar_date(&caps[3], &caps[2], &caps[1])?;
        Some(Extraction::cut(text, &caps[0], date))
    });
    if day_first.is_some() {
        return day_first;
    }

    YEAR_MONTH_DAY_PATTERN.captures(&lowered).and_then(|caps| {
        let date = calendar_date(&caps[1], &caps[2], &caps[3])?;
        Some(Extraction::cut(text, &caps[0], date))
    })
}

/// Build a date from digit strings, rejecting impossible dates and years before 1.
fn calendar_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;

    if year < 1 {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Extract `today` or `tomorrow` from the working title.
///
/// `today` is checked first. The result keeps the clock of `now`; a later
/// clock time overrides hour and minute. Only the whole word is removed, so
/// "todays" or "tomorrows" elsewhere in the title stay intact.
#[must_use]
pub fn extract_relative_date(text: &str, now: NaiveDateTime) -> Option<Extraction<NaiveDateTime>> {
    if let Some(found) = cut_word(&TODAY_PATTERN, text, now) {
        return Some(found);
    }

    cut_word(&TOMORROW_PATTERN, text, now + Duration::days(1))
}

fn cut_word(pattern: &Regex, text: &str, value: NaiveDateTime) -> Option<Extraction<NaiveDateTime>> {
    let matched = pattern.find(text)?.as_str().to_lowercase();

    Some(Extraction {
        value,
        matched,
        remainder: pattern.replace_all(text, "").trim().to_string(),
    })
}

/// Extract a clock time from the working title.
///
/// Only the first numeric token is examined. With an `am`/`pm` suffix it is
/// read as 12-hour time (hour 1-12), otherwise as 24-hour time (hour 0-23).
/// A token that is invalid under its reading is ignored, with no retry under
/// the other reading and no search for a later token.
///
/// Any bare one or two digit number qualifies, so a stray number such as
/// "call 3 people" is read as 03:00.
#[must_use]
pub fn extract_clock_time(text: &str) -> Option<Extraction<NaiveTime>> {
    let lowered = text.to_lowercase();
    let caps = CLOCK_TIME_PATTERN.captures(&lowered)?;

    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    let time = match caps.get(3).map(|m| m.as_str()) {
        Some(suffix) => twelve_hour_time(hour, minute, suffix == "pm")?,
        None => NaiveTime::from_hms_opt(hour, minute, 0)?,
    };

    Some(Extraction::cut(text, &caps[0], time))
}

fn twelve_hour_time(hour: u32, minute: u32, is_pm: bool) -> Option<NaiveTime> {
    if !(1..=12).contains(&hour) {
        return None;
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Drop seconds and sub-second precision.
#[must_use]
pub fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(dt)
}

/// Format a due timestamp as `YYYY-MM-DD HH:MM`.
#[must_use]
pub fn format_due(due: &NaiveDateTime) -> String {
    due.format(DUE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD HH:MM` due string.
///
/// Returns `None` if the input is not in that form.
#[must_use]
pub fn parse_due(input: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), DUE_FORMAT).ok()
}
