//! # Jira User Endpoints
//!
//! User search and issue assignment.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::debug;

use crate::client::JiraClient;
use crate::models::{AssignRequest, JiraUser};

impl JiraClient {
  /// Search users by display name or email fragment
  pub async fn search_users(&self, query: &str) -> Result<Vec<JiraUser>> {
    let url = format!("{}/rest/api/3/user/search", self.base_url);

    debug!(query, "Searching Jira users");

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .query(&[("query", query)])
      .send()
      .await
      .context("Failed to search Jira users")?;

    match response.status() {
      StatusCode::OK => {
        let users = response
          .json::<Vec<JiraUser>>()
          .await
          .context("Failed to parse user search results")?;
        Ok(users)
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

  /// Assign an issue to a user by account id
  pub async fn assign_issue(&self, issue_key: &str, account_id: &str) -> Result<()> {
    let url = format!("{}/rest/api/3/issue/{}/assignee", self.base_url, issue_key);

    let payload = AssignRequest {
      account_id: account_id.to_string(),
    };

    debug!(issue_key, account_id, "Assigning Jira issue");

    let response = self
      .client
      .put(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .json(&payload)
      .send()
      .await
      .context("Failed to assign Jira issue")?;

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_key)),
      StatusCode::BAD_REQUEST => Err(anyhow::anyhow!(
        "Invalid assignee: {}",
        response.text().await.unwrap_or_default()
      )),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
