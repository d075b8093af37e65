//! HTTP-backed quote source and response formatting.

use std::time::Duration;

use serde_json::Value;

use super::QuoteSource;
use crate::config::QuoteConfig;

const AUTHOR_SEPARATOR: &str = "—";

/// Quote source backed by an HTTP endpoint in the API-Ninjas format.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    config: QuoteConfig,
    /// `None` when the client could not be built; every fetch then falls back.
    client: Option<reqwest::blocking::Client>,
}

impl HttpQuoteSource {
    #[must_use]
    pub fn new(config: QuoteConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| tracing::warn!(error = %e, "could not build quote HTTP client"))
            .ok();

        Self { config, client }
    }

    fn request(
        &self,
        client: &reqwest::blocking::Client,
        api_key: &str,
    ) -> Result<Value, reqwest::Error> {
        client
            .get(&self.config.api_url)
            .header("X-Api-Key", api_key)
            .send()?
            .error_for_status()?
            .json()
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> Option<String> {
        let Some(api_key) = self.config.api_key() else {
            tracing::debug!("no quote API key configured");
            return None;
        };

        let client = self.client.as_ref()?;

        match self.request(client, api_key) {
            Ok(body) => {
                let quote = format_quote_response(&body);
                if quote.is_none() {
                    tracing::debug!("quote response had an unexpected shape");
                }
                quote
            },
            Err(e) => {
                tracing::debug!(error = %e, url = %self.config.api_url, "quote request failed");
                None
            },
        }
    }
}

/// Turn a quote service response body into display text.
///
/// Accepts either an array whose first element is a quote object, or a single
/// quote object. Returns `None` for anything else.
#[must_use]
pub fn format_quote_response(body: &Value) -> Option<String> {
    match body {
        Value::Array(items) => {
            let first = items.first()?;
            let author = string_field(first, "author");
            let quote = match string_field(first, "quote") {
                "" => format!("{} {author}", string_field(first, "title")),
                quote => quote.to_string(),
            };
            Some(with_author(quote, author))
        },
        Value::Object(map) if map.contains_key("quote") => Some(with_author(
            string_field(body, "quote").to_string(),
            string_field(body, "author"),
        )),
        _ => None,
    }
}

fn string_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn with_author(quote: String, author: &str) -> String {
    if author.is_empty() || quote.contains(AUTHOR_SEPARATOR) {
        quote
    } else {
        format!("{quote} {AUTHOR_SEPARATOR} {author}")
    }
}
