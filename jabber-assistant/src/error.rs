//! The assistant's failure taxonomy.
//!
//! Every pipeline step fails into exactly one of these kinds, and every kind
//! renders to the plain-text sentence the user sees. Callers branch on the
//! variant; the chat surfaces only ever call `to_string()`.

use thiserror::Error;

/// A terminal failure while handling one utterance.
///
/// No kind is retried; the message is the complete user-facing response for
/// the current utterance.
#[derive(Debug, Error)]
pub enum AssistantError {
  /// The LLM transport or API failed; carries the marker-prefixed reply
  /// verbatim.
  #[error("{0}")]
  Completion(String),

  /// The model reply contained no parseable JSON object; embeds the raw
  /// reply for diagnosis.
  #[error("{0}")]
  Extraction(String),

  /// A required slot was missing or blank after trimming.
  #[error("{0}")]
  Validation(String),

  /// Jira reported a failure (non-2xx); embeds status and body.
  #[error("{0}")]
  Rest(String),

  /// A best-effort resolution step (issue, user, board, sprint) found no
  /// match.
  #[error("{0}")]
  Resolution(String),
}

impl AssistantError {
  /// Extraction failure embedding the raw model reply.
  pub fn extraction(raw: &str) -> Self {
    Self::Extraction(format!(
      "Error: Failed to extract valid JSON from LLM response. Response: {raw}"
    ))
  }
}
