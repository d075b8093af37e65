//! Natural language parsing for task entry.
//!
//! This module provides parsing for natural language task input like:
//! - "buy milk tomorrow 5pm"
//! - "Submit report by 15/03/2025 5pm high priority"
//! - "pay rent on 2025-04-01 priority: low"

mod parser;
mod priority;

pub use parser::{interpret, interpret_at, normalize_title};
pub use priority::extract_priority;
