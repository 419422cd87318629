use anyhow::{Context, Result};
use jabber_core::config::JiraConfig;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::consts::USER_AGENT;
use crate::models::{JiraAuth, JiraUser};

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: JiraAuth) -> Self {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .unwrap_or_else(|_| Client::new());
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  /// Create a Jira client from configuration
  pub fn from_config(config: &JiraConfig) -> Self {
    create_jira_client(&config.base_url, &config.email, &config.api_token)
  }

  /// Fetch the authenticated user.
  ///
  /// Doubles as the connection check: a `200` here means the base URL and
  /// credentials are valid.
  pub async fn current_user(&self) -> Result<JiraUser> {
    let url = format!("{}/rest/api/3/myself", self.base_url);

    debug!("Fetching current Jira user");

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .send()
      .await
      .context("Failed to connect to Jira")?;

    match response.status() {
      StatusCode::OK => {
        let user = response.json::<JiraUser>().await.context("Failed to parse Jira user")?;
        Ok(user)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, email: &str, api_token: &str) -> JiraClient {
  let auth = JiraAuth {
    email: email.to_string(),
    api_token: api_token.to_string(),
  };

  JiraClient::new(base_url, auth)
}
