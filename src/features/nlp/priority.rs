//! Priority marker extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::Extraction;
use crate::tasks::Priority;

static PRIORITY_PHRASE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "high priority", "low priority"
    Regex::new(r"\b(high|medium|low)\s*priority\b")
        .unwrap_or_else(|e| panic!("Invalid priority phrase regex: {e}"))
});

static PRIORITY_LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "priority high", "priority: low", "priority-medium"
    Regex::new(r"\bpriority\s*[:\-]?\s*(high|medium|low)\b")
        .unwrap_or_else(|e| panic!("Invalid priority label regex: {e}"))
});

/// Extract a priority marker from the working title.
///
/// The `<level> priority` phrase is searched first. The `priority[:|-] <level>`
/// label is only searched when no phrase exists anywhere in the text.
#[must_use]
pub fn extract_priority(text: &str) -> Option<Extraction<Priority>> {
    let lowered = text.to_lowercase();

    let caps = PRIORITY_PHRASE_PATTERN
        .captures(&lowered)
        .or_else(|| PRIORITY_LABEL_PATTERN.captures(&lowered))?;
    let level = caps[1].parse::<Priority>().ok()?;

    Some(Extraction::cut(text, &caps[0], level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_form() {
        let e = extract_priority("Fix login bug High Priority").unwrap();
        assert_eq!(e.value, Priority::High);
        assert_eq!(e.matched, "high priority");
        assert_eq!(e.remainder, "Fix login bug");
    }

    #[test]
    fn test_label_forms() {
        assert_eq!(extract_priority("tidy desk priority low").unwrap().value, Priority::Low);
        assert_eq!(extract_priority("tidy desk priority: low").unwrap().value, Priority::Low);
        assert_eq!(extract_priority("tidy desk priority-medium").unwrap().value, Priority::Medium);
        assert_eq!(extract_priority("tidy desk priority - high").unwrap().value, Priority::High);
    }

    #[test]
    fn test_label_removal() {
        let e = extract_priority("email boss Priority: HIGH").unwrap();
        assert_eq!(e.remainder, "email boss");
    }

    #[test]
    fn test_phrase_beats_label() {
        let e = extract_priority("plan trip priority: low, high priority").unwrap();
        assert_eq!(e.value, Priority::High);
        assert_eq!(e.remainder, "plan trip priority: low,");
    }

    #[test]
    fn test_requires_whole_words() {
        assert!(extract_priority("highpriorityish").is_none());
        // separators between the label and the level are optional
        assert_eq!(extract_priority("priorityhigh").unwrap().value, Priority::High);
        assert!(extract_priority("lowly priority").is_none());
    }

    #[test]
    fn test_no_marker() {
        assert!(extract_priority("buy milk").is_none());
        assert!(extract_priority("top priority").is_none());
        assert!(extract_priority("priority urgent").is_none());
    }
}
