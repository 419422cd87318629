//! # Utterance Text Heuristics
//!
//! Lightweight lexical extraction from raw user text. These helpers run
//! before any LLM call: the issue key, inline comment text, project name, and
//! sprint state are all cheap to pull out of the utterance directly.

use std::sync::LazyLock;

use regex::Regex;

// An issue key is LETTERS-DIGITS, e.g. PROJ-123. The project code must be at
// least two characters to avoid matching shorthand like "A-1".
static ISSUE_KEY_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[A-Z]{2,}-\d+").expect("Failed to compile issue key regex"));

static COMMENT_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r":\s*(.+)").expect("Failed to compile comment regex"));

/// Extract the first issue key (e.g. `PROJ-123`) from the input, if any.
pub fn extract_issue_key(input: &str) -> Option<String> {
  ISSUE_KEY_PATTERN.find(input).map(|m| m.as_str().to_string())
}

/// Extract the comment text from the input.
///
/// Takes everything after the first colon; falls back to the whole input when
/// no colon is present.
pub fn extract_comment(input: &str) -> String {
  match COMMENT_PATTERN.captures(input) {
    Some(caps) => caps[1].trim().to_string(),
    None => input.trim().to_string(),
  }
}

/// Extract a project name or ID from the input.
///
/// Heuristic: the token immediately following the literal word "project" or
/// "id", with surrounding quote and punctuation characters trimmed. Handles
/// inputs like "show sprints for project Alpha" or "tasks for project ID
/// PROJ001" (where "ID" itself precedes the value).
pub fn extract_project_name(input: &str) -> Option<String> {
  let words: Vec<&str> = input.split_whitespace().collect();
  for (i, word) in words.iter().enumerate() {
    let keyword = word.to_lowercase();
    if keyword == "project" || keyword == "id" {
      if let Some(next) = words.get(i + 1) {
        let name = next.trim_matches(|c: char| matches!(c, '"' | '\'' | ',' | '.' | '?' | '!'));
        // "project id PROJ001": skip the connective and keep scanning
        if name.eq_ignore_ascii_case("id") {
          continue;
        }
        if !name.is_empty() {
          return Some(name.to_string());
        }
      }
    }
  }
  None
}

/// Extract a sprint state word ("current", "future", or "past") from the
/// input by case-insensitive substring scan. Returns the first state
/// mentioned.
pub fn extract_sprint_state(input: &str) -> Option<String> {
  let lowered = input.to_lowercase();
  for state in ["current", "future", "past"] {
    if lowered.contains(state) {
      return Some(state.to_string());
    }
  }
  None
}
