//! Chat-completion client for an OpenAI-compatible endpoint.
//!
//! One prompt in, one trimmed reply out. There is intentionally no retry, no
//! streaming, and no conversation memory: every pipeline step sends a fully
//! self-contained prompt.

use anyhow::{Context, Result};
use jabber_core::config::LlmConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Prefix marking a failed completion.
///
/// `complete` never returns an `Err`; transport and API failures come back as
/// a reply carrying this marker. Callers must treat a marker-prefixed reply
/// as terminal and must not parse it as model output.
pub const API_ERROR_MARKER: &str = "API Error: ";

/// Returns true if a reply is the error marker rather than model output.
pub fn is_error_reply(reply: &str) -> bool {
  reply.starts_with(API_ERROR_MARKER)
}

/// Client for a fixed remote LLM model
pub struct CompletionClient {
  client: Client,
  api_url: String,
  model: String,
  api_key: String,
}

impl CompletionClient {
  /// Create a new completion client
  pub fn new(api_url: &str, model: &str, api_key: &str) -> Self {
    Self {
      client: Client::new(),
      api_url: api_url.to_string(),
      model: model.to_string(),
      api_key: api_key.to_string(),
    }
  }

  /// Create a completion client from configuration
  pub fn from_config(config: &LlmConfig) -> Self {
    Self::new(&config.api_url, &config.model, &config.api_key)
  }

  /// Send a single prompt and return the trimmed text of the first choice.
  ///
  /// On any failure the reply is `API Error: <cause>` instead of an `Err`.
  pub async fn complete(&self, prompt: &str) -> String {
    match self.try_complete(prompt).await {
      Ok(text) => text,
      Err(e) => {
        warn!("LLM completion failed: {e:#}");
        format!("{API_ERROR_MARKER}{e:#}")
      }
    }
  }

  async fn try_complete(&self, prompt: &str) -> Result<String> {
    let request = ChatRequest {
      model: self.model.clone(),
      max_tokens: 1024,
      messages: vec![ChatMessage {
        role: "user".to_string(),
        content: prompt.to_string(),
      }],
    };

    debug!(model = %self.model, "Sending completion request");

    let response = self
      .client
      .post(&self.api_url)
      .bearer_auth(&self.api_key)
      .json(&request)
      .send()
      .await
      .context("Failed to reach LLM endpoint")?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(anyhow::anyhow!("HTTP {status} - {body}"));
    }

    let completion: ChatResponse = response.json().await.context("Failed to parse LLM response")?;

    completion
      .choices
      .first()
      .map(|choice| choice.message.content.trim().to_string())
      .ok_or_else(|| anyhow::anyhow!("Empty response from LLM"))
  }
}

/// Chat-completions request payload (OpenAI wire format)
#[derive(Serialize)]
struct ChatRequest {
  model: String,
  max_tokens: u32,
  messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
  role: String,
  content: String,
}

/// Chat-completions response payload
#[derive(Deserialize)]
struct ChatResponse {
  choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
  message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
  content: String,
}
