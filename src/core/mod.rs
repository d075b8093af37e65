//! Core building blocks for the natural language interpreter.
//!
//! This module provides the extractor plumbing and the date/time extractors
//! shared by the parser and the edit surface.

mod datetime;
mod extraction;

pub use datetime::{
    extract_absolute_date, extract_clock_time, extract_relative_date, format_due, parse_due,
    truncate_to_minute, DUE_FORMAT,
};
pub use extraction::{remove_fragment, Extraction};
