//! Tolerant JSON extraction from model output.
//!
//! The model reply is untrusted text: prose, markdown fences, or commentary
//! may surround the JSON object the prompt asked for. Extraction cascades
//! through a greedy brace-delimited span, then the whole text, and finally
//! gives up without erroring so the caller can build a degraded result.

use serde_json::Value;

/// Outcome of attempting to pull JSON out of free text.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// Parsed from the first-`{`-to-last-`}` span.
    BraceSpan(Value),
    /// The entire reply was valid JSON.
    WholeText(Value),
    /// No valid JSON anywhere; carries the original text untouched.
    Unparsable(String),
}

/// Extracts a JSON value from `text`.
///
/// The whole-text attempt runs only when no brace span exists at all: once a
/// span is found, its parse result is final. The span is greedy, so multiple
/// independent JSON fragments, or stray braces around a valid object, widen
/// it and defeat extraction. Known limitation, kept to match the deployed
/// behavior.
pub fn extract_json(text: &str) -> Extraction {
    match brace_span(text) {
        Some(span) => match serde_json::from_str::<Value>(span) {
            Ok(value) => Extraction::BraceSpan(value),
            Err(_) => Extraction::Unparsable(text.to_string()),
        },
        None => match serde_json::from_str::<Value>(text) {
            Ok(value) => Extraction::WholeText(value),
            Err(_) => Extraction::Unparsable(text.to_string()),
        },
    }
}

/// Substring from the first `{` to the last `}`, when both exist in order.
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start <= end).then(|| &text[start..=end])
}
