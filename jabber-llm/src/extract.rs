//! Permissive JSON extraction from free-text model output.
//!
//! The contract between the model and the pipeline is a single JSON object
//! embedded somewhere in the reply. The extraction is deliberately the greedy
//! first-`{`-to-last-`}` span: replies that wrap the object in prose parse
//! fine, while replies containing several objects or stray braces make the
//! span invalid JSON and extraction fails. Known weak point; it lives behind
//! this one function so a stricter parser can be swapped in without touching
//! callers.

use serde_json::{Map, Value};

/// Extract the first greedy `{...}` span of `text` as a JSON object.
///
/// Returns `None` when there is no brace-delimited span or the span does not
/// parse as a JSON object. Never panics.
pub fn extract_json(text: &str) -> Option<Map<String, Value>> {
  let start = text.find('{')?;
  let end = text.rfind('}')?;
  if end < start {
    return None;
  }

  match serde_json::from_str::<Value>(&text[start..=end]) {
    Ok(Value::Object(map)) => Some(map),
    Ok(_) | Err(_) => None,
  }
}
