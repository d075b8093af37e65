//! Motivational quotes.
//!
//! Quotes come from a remote service when one is reachable and configured,
//! and from a small built-in list otherwise. Asking for a quote never fails.

mod http;

pub use http::{format_quote_response, HttpQuoteSource};

use rand::seq::SliceRandom;

/// Quotes used when the remote service cannot supply one.
pub const LOCAL_FALLBACK_QUOTES: [&str; 4] = [
    "Start where you are. Use what you have. Do what you can. — Arthur Ashe",
    "The secret of getting ahead is getting started. — Mark Twain",
    "Don't watch the clock; do what it does. Keep going. — Sam Levenson",
    "Success usually comes to those who are too busy to be looking for it. — Henry David Thoreau",
];

/// Something that can produce a quote, or nothing.
#[cfg_attr(test, mockall::automock)]
pub trait QuoteSource {
    /// Fetch a formatted quote. Every failure is `None`.
    fn fetch(&self) -> Option<String>;
}

/// Pick one of the built-in quotes at random.
#[must_use]
pub fn local_quote() -> &'static str {
    LOCAL_FALLBACK_QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(LOCAL_FALLBACK_QUOTES[0])
}

/// Fetch a quote from `source`, falling back to a built-in one.
#[must_use]
pub fn quote_or_fallback(source: &dyn QuoteSource) -> String {
    source.fetch().unwrap_or_else(|| {
        tracing::debug!("quote source returned nothing, using a local quote");
        local_quote().to_string()
    })
}
