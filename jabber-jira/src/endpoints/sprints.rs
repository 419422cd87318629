//! # Jira Sprint Endpoints
//!
//! Sprint listing for a board (optionally filtered by Jira state) and the
//! issue list of a single sprint.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::debug;

use crate::client::JiraClient;
use crate::models::{Issue, SearchResults, Sprint, SprintList};

impl JiraClient {
  /// List sprints for a board, optionally filtered by Jira sprint state
  /// ("active", "future", or "closed")
  pub async fn get_sprints(&self, board_id: u64, state: Option<&str>) -> Result<Vec<Sprint>> {
    let url = format!("{}/rest/agile/1.0/board/{}/sprint", self.base_url, board_id);

    debug!(board_id, state, "Fetching Jira sprints");

    let mut request = self
      .client
      .get(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token));
    if let Some(state) = state {
      request = request.query(&[("state", state)]);
    }

    let response = request.send().await.context("Failed to fetch Jira sprints")?;

    match response.status() {
      StatusCode::OK => {
        let sprints = response
          .json::<SprintList>()
          .await
          .context("Failed to parse sprint list")?;
        Ok(sprints.values)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Board {} not found", board_id)),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// List the issues in a sprint
  pub async fn get_sprint_issues(&self, sprint_id: u64) -> Result<Vec<Issue>> {
    let url = format!("{}/rest/agile/1.0/sprint/{}/issue", self.base_url, sprint_id);

    debug!(sprint_id, "Fetching sprint issues");

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .send()
      .await
      .context("Failed to fetch sprint issues")?;

    match response.status() {
      StatusCode::OK => {
        let results = response
          .json::<SearchResults>()
          .await
          .context("Failed to parse sprint issues")?;
        Ok(results.issues)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Sprint {} not found", sprint_id)),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
