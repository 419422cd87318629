//! # Jira Board Endpoints
//!
//! Agile board lookup. Board-by-name resolution is best-effort, first match
//! only; callers must not assume the name is unique.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::debug;

use crate::client::JiraClient;
use crate::models::{Board, BoardList};

impl JiraClient {
  /// Find a board by exact name filter, returning the first match or `None`
  pub async fn find_board(&self, name: &str) -> Result<Option<Board>> {
    let url = format!("{}/rest/agile/1.0/board", self.base_url);

    debug!(name, "Looking up Jira board");

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .query(&[("name", name)])
      .send()
      .await
      .context("Failed to look up Jira board")?;

    match response.status() {
      StatusCode::OK => {
        let boards = response
          .json::<BoardList>()
          .await
          .context("Failed to parse board list")?;
        Ok(boards.values.into_iter().next())
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

#[cfg(test)]
mod tests {
  use wiremock::matchers::{basic_auth, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;

  #[tokio::test]
  async fn test_find_board_first_match() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test@example.com", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/agile/1.0/board"))
      .and(basic_auth("test@example.com", "test_token"))
      .and(query_param("name", "Alpha"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "values": [
              { "id": 7, "name": "Alpha board", "type": "scrum" },
              { "id": 8, "name": "Alpha board (old)", "type": "scrum" }
          ]
      })))
      .mount(&mock_server)
      .await;

    let board = client.find_board("Alpha").await?;
    let board = board.expect("board should be found");
    assert_eq!(board.id, 7);
    assert_eq!(board.name, "Alpha board");

    Ok(())
  }

  #[tokio::test]
  async fn test_find_board_none() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test@example.com", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/agile/1.0/board"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "values": [] })))
      .mount(&mock_server)
      .await;

    let board = client.find_board("Nonexistent").await?;
    assert!(board.is_none());

    Ok(())
  }
}
