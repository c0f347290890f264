//! Response sanitizer and recovery for model replies.
//!
//! The prompt pins raw JSON output, but replies still arrive wrapped in
//! markdown fences or framed by conversational prose. Recovery is layered:
//! trim, strip fences, try a direct parse, then salvage the outermost
//! `{...}` span before giving up with a diagnostic excerpt.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Upper bound on the characters of model output carried in a failure.
const EXCERPT_MAX_CHARS: usize = 240;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecoveryFailure {
    #[error("model reply contains no parseable JSON object; reply starts with: {excerpt:?}")]
    NoJsonObject { excerpt: String },

    #[error("model reply is JSON but not a valid report ({reason}); reply starts with: {excerpt:?}")]
    ShapeMismatch { reason: String, excerpt: String },
}

/// Recovers a JSON value from a raw model reply.
pub fn recover_json(raw: &str) -> Result<Value, RecoveryFailure> {
    let cleaned = strip_code_fences(raw.trim());

    match serde_json::from_str(cleaned) {
        Ok(value) => Ok(value),
        Err(err) => {
            debug!("direct JSON parse failed ({err}); attempting brace-span salvage");
            salvage_braced_span(cleaned).ok_or_else(|| RecoveryFailure::NoJsonObject {
                excerpt: excerpt_of(raw),
            })
        }
    }
}

/// Recovers a typed report from a raw model reply.
/// A reply that parses as JSON but does not match `T` is a distinct failure
/// carrying the deserializer's reason.
pub fn recover_report<T: DeserializeOwned>(raw: &str) -> Result<T, RecoveryFailure> {
    let value = recover_json(raw)?;
    serde_json::from_value(value).map_err(|err| RecoveryFailure::ShapeMismatch {
        reason: err.to_string(),
        excerpt: excerpt_of(raw),
    })
}

/// Strips a leading ``` fence (with an optional `json` tag, matched
/// case-insensitively) and a trailing ``` fence. Text without a leading
/// fence passes through untouched.
fn strip_code_fences(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };

    let rest = rest.trim_start();
    match rest.strip_suffix("```") {
        Some(inner) => inner.trim_end(),
        None => rest,
    }
}

/// Single salvage attempt on the first-`{`-to-last-`}` span, inclusive.
/// No bracket matching or repair beyond that one parse.
fn salvage_braced_span(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

fn excerpt_of(raw: &str) -> String {
    raw.trim().chars().take(EXCERPT_MAX_CHARS).collect()
}
