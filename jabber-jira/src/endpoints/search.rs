//! # Jira Search Endpoint
//!
//! JQL search with the narrow field set the assistant renders.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::debug;

use crate::client::JiraClient;
use crate::models::{Issue, SearchResults};

/// Fields requested for every search, matching what the reports render.
const SEARCH_FIELDS: &str = "summary,assignee,priority,status,project";

impl JiraClient {
  /// Search for issues with a JQL query, returning at most `max_results`
  pub async fn search_issues(&self, jql: &str, max_results: u32) -> Result<Vec<Issue>> {
    let url = format!("{}/rest/api/3/search", self.base_url);

    debug!(jql, "Searching Jira issues");

    let max_results_value = max_results.to_string();
    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .query(&[
        ("jql", jql),
        ("maxResults", max_results_value.as_str()),
        ("fields", SEARCH_FIELDS),
      ])
      .send()
      .await
      .context("Failed to search Jira issues")?;

    match response.status() {
      StatusCode::OK => {
        let results = response
          .json::<SearchResults>()
          .await
          .context("Failed to parse search results")?;
        Ok(results.issues)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::BAD_REQUEST => Err(anyhow::anyhow!(
        "Invalid JQL query: {}",
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
