//! Shared plumbing for token extractors.
//!
//! Every extractor is a pure function from the working title to an optional
//! [`Extraction`]: the recognized value, the literal text it matched, and the
//! working title with that text cut out.

use regex::RegexBuilder;

/// Outcome of a successful extractor run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<T> {
    /// The recognized value.
    pub value: T,
    /// The matched text, as found in the lowercased working title.
    pub matched: String,
    /// The working title after removing the matched text.
    pub remainder: String,
}

impl<T> Extraction<T> {
    /// Build an extraction by cutting `matched` out of `text`.
    pub fn cut(text: &str, matched: &str, value: T) -> Self {
        Self {
            value,
            matched: matched.to_string(),
            remainder: remove_fragment(text, matched),
        }
    }
}

/// Remove every case-insensitive occurrence of `fragment` from `text`, then trim.
///
/// Casing of the surrounding text is preserved. Runs of inner whitespace left
/// behind by the removal are kept as-is.
#[must_use]
pub fn remove_fragment(text: &str, fragment: &str) -> String {
    if fragment.is_empty() {
        return text.trim().to_string();
    }

    match RegexBuilder::new(&regex::escape(fragment))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.replace_all(text, "").trim().to_string(),
        Err(e) => {
            tracing::warn!(fragment, error = %e, "could not build removal pattern");
            text.trim().to_string()
        },
    }
}
