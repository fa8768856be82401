//! JSON output formatting
//!
//! Listings are wrapped in a `{ data, meta }` envelope so scripts can tell
//! an empty result from a truncated one by the record count.

use chrono::Utc;
use serde::Serialize;

/// Envelope around a JSON listing
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T> {
    /// Listed records, in listing order
    pub data: &'a [T],

    /// Metadata about the listing
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Number of records in `data`
    pub count: usize,

    /// When the listing was produced (RFC 3339)
    pub timestamp: String,

    /// CLI version
    pub version: &'static str,
}

impl<'a, T> JsonOutput<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            meta: Metadata {
                count: data.len(),
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Format records as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize>(data: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
