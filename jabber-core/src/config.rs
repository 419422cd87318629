//! # Assistant Configuration
//!
//! Explicit configuration objects for the two external boundaries the
//! assistant talks to: the Jira REST API and the LLM completion endpoint.
//! Values are read from the environment once at startup and handed to
//! components at construction; nothing reaches into ambient state afterwards.

use anyhow::{Context, Result};
use url::Url;

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Environment variable storing the Jira account email.
pub const ENV_JIRA_EMAIL: &str = "JIRA_EMAIL";

/// Environment variable storing the Jira API token.
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";

/// Environment variable storing the LLM API key.
pub const ENV_LLM_API_KEY: &str = "LLM_API_KEY";

/// Environment variable storing the LLM chat-completions endpoint URL.
pub const ENV_LLM_API_URL: &str = "LLM_API_URL";

/// Environment variable storing the LLM model identifier.
pub const ENV_LLM_MODEL: &str = "LLM_MODEL";

/// Default chat-completions endpoint (OpenAI-compatible).
pub const DEFAULT_LLM_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";

/// Connection settings for the Jira REST API.
#[derive(Debug, Clone)]
pub struct JiraConfig {
  /// Base URL of the Jira site (e.g. `https://company.atlassian.net`).
  pub base_url: String,
  /// Account email used for basic auth.
  pub email: String,
  /// API token paired with the email.
  pub api_token: String,
}

/// Connection settings for the LLM completion endpoint.
#[derive(Debug, Clone)]
pub struct LlmConfig {
  /// Full URL of the chat-completions endpoint.
  pub api_url: String,
  /// Model identifier sent with every request.
  pub model: String,
  /// Bearer credential for the endpoint.
  pub api_key: String,
}

/// Everything the assistant needs to operate.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
  pub jira: JiraConfig,
  pub llm: LlmConfig,
}

impl AssistantConfig {
  /// Build the configuration from environment variables.
  ///
  /// Required: `JIRA_HOST`, `JIRA_EMAIL`, `JIRA_API_TOKEN`, `LLM_API_KEY`.
  /// Optional: `LLM_API_URL`, `LLM_MODEL`.
  pub fn from_env() -> Result<Self> {
    let base_url = std::env::var(ENV_JIRA_HOST)
      .with_context(|| format!("Jira host environment variable '{ENV_JIRA_HOST}' not set"))?;
    let email = std::env::var(ENV_JIRA_EMAIL)
      .with_context(|| format!("Jira email environment variable '{ENV_JIRA_EMAIL}' not set"))?;
    let api_token = std::env::var(ENV_JIRA_API_TOKEN)
      .with_context(|| format!("Jira API token environment variable '{ENV_JIRA_API_TOKEN}' not set"))?;
    let llm_api_key = std::env::var(ENV_LLM_API_KEY)
      .with_context(|| format!("LLM API key environment variable '{ENV_LLM_API_KEY}' not set"))?;
    let llm_api_url = std::env::var(ENV_LLM_API_URL).unwrap_or_else(|_| DEFAULT_LLM_API_URL.to_string());
    let llm_model = std::env::var(ENV_LLM_MODEL).unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string());

    Ok(Self {
      jira: JiraConfig {
        base_url: ensure_url_scheme(&base_url)?,
        email,
        api_token,
      },
      llm: LlmConfig {
        api_url: llm_api_url,
        model: llm_model,
        api_key: llm_api_key,
      },
    })
  }
}

/// Ensure a host string carries an `http://` or `https://` scheme.
///
/// A bare host such as `company.atlassian.net` is assumed to be `https://`.
/// Trailing slashes are stripped so endpoint paths can be appended directly.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).with_context(|| format!("Invalid host '{trimmed}'"))?;
  Ok(url.as_str().trim_end_matches('/').to_string())
}
