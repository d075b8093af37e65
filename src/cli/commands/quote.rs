//! Quote command implementation.

use serde_json::json;

use crate::cli::args::{OutputFormat, QuoteArgs};
use crate::config::QuoteConfig;
use crate::error::TodoError;
use crate::features::quote::{quote_or_fallback, HttpQuoteSource};
use crate::output::to_json;

/// Execute the quote command.
///
/// # Errors
///
/// Returns an error only if JSON output formatting fails.
pub fn quote(config: QuoteConfig, args: QuoteArgs, format: OutputFormat) -> Result<String, TodoError> {
    let source = HttpQuoteSource::new(config.with_key_override(args.api_key));
    let text = quote_or_fallback(&source);

    match format {
        OutputFormat::Json => to_json(&json!({ "quote": text })),
        OutputFormat::Pretty => Ok(text),
    }
}
