//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations: creating,
//! fetching, updating, commenting, and attaching files.

use std::path::Path;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::multipart;
use tracing::debug;

use crate::client::JiraClient;
use crate::models::{
  AdfDocument, Attachment, Comment, CommentRequest, CreateIssueFields, CreateIssueRequest, CreatedIssue, Issue,
  IssueTypeName, ProjectKey, UpdateFields, UpdateIssueRequest,
};

impl JiraClient {
  /// Create a Task-type issue in the given project
  pub async fn create_issue(&self, project_key: &str, summary: &str, description: AdfDocument) -> Result<CreatedIssue> {
    let url = format!("{}/rest/api/3/issue", self.base_url);

    let payload = CreateIssueRequest {
      fields: CreateIssueFields {
        project: ProjectKey {
          key: project_key.to_string(),
        },
        summary: summary.to_string(),
        description,
        issuetype: IssueTypeName {
          name: "Task".to_string(),
        },
      },
    };

    debug!(project_key, summary, "Creating Jira issue");

    let response = self
      .client
      .post(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .json(&payload)
      .send()
      .await
      .context("Failed to create Jira issue")?;

    match response.status() {
      StatusCode::CREATED => {
        let created = response
          .json::<CreatedIssue>()
          .await
          .context("Failed to parse created issue")?;
        Ok(created)
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

  /// Get a Jira issue by key
  pub async fn get_issue(&self, issue_key: &str) -> Result<Issue> {
    let url = format!("{}/rest/api/3/issue/{}", self.base_url, issue_key);

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .send()
      .await
      .context("Failed to fetch Jira issue")?;

    match response.status() {
      StatusCode::OK => {
        let issue = response.json::<Issue>().await.context("Failed to parse Jira issue")?;
        Ok(issue)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_key)),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Update fields on an existing issue
  pub async fn update_issue(&self, issue_key: &str, fields: UpdateFields) -> Result<()> {
    let url = format!("{}/rest/api/3/issue/{}", self.base_url, issue_key);

    debug!(issue_key, "Updating Jira issue");

    let response = self
      .client
      .put(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .json(&UpdateIssueRequest { fields })
      .send()
      .await
      .context("Failed to update Jira issue")?;

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_key)),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Add a comment to an issue
  pub async fn add_comment(&self, issue_key: &str, body: AdfDocument) -> Result<Comment> {
    let url = format!("{}/rest/api/3/issue/{}/comment", self.base_url, issue_key);

    let response = self
      .client
      .post(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .json(&CommentRequest { body })
      .send()
      .await
      .context("Failed to add Jira comment")?;

    match response.status() {
      StatusCode::CREATED => {
        let comment = response.json::<Comment>().await.context("Failed to parse comment")?;
        Ok(comment)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_key)),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        response.status(),
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Attach a local file to an issue
  pub async fn add_attachment(&self, issue_key: &str, file_path: &Path) -> Result<Vec<Attachment>> {
    let url = format!("{}/rest/api/3/issue/{}/attachments", self.base_url, issue_key);

    let file_name = file_path
      .file_name()
      .and_then(|name| name.to_str())
      .map(|name| name.to_string())
      .ok_or_else(|| anyhow::anyhow!("Invalid attachment path: {}", file_path.display()))?;

    let bytes = tokio::fs::read(file_path)
      .await
      .with_context(|| format!("Failed to read attachment file {}", file_path.display()))?;

    let form = multipart::Form::new().part("file", multipart::Part::bytes(bytes).file_name(file_name));

    let response = self
      .client
      .post(&url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      // Required by Jira to bypass XSRF protection on uploads
      .header("X-Atlassian-Token", "no-check")
      .multipart(form)
      .send()
      .await
      .context("Failed to upload Jira attachment")?;

    match response.status() {
      StatusCode::OK => {
        let attachments = response
          .json::<Vec<Attachment>>()
          .await
          .context("Failed to parse attachment response")?;
        Ok(attachments)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_key)),
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
  use std::io::Write;

  use wiremock::matchers::{basic_auth, body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;
  use crate::models::{AdfDocument, UpdateFields};

  #[tokio::test]
  async fn test_create_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test@example.com", "test_token");

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue"))
      .and(basic_auth("test@example.com", "test_token"))
      .and(body_json(serde_json::json!({
          "fields": {
              "project": { "key": "PROJ" },
              "summary": "Implement search functionality",
              "description": {
                  "version": 1,
                  "type": "doc",
                  "content": [
                      {
                          "type": "paragraph",
                          "content": [
                              { "type": "text", "text": "Develop a search feature." }
                          ]
                      }
                  ]
              },
              "issuetype": { "name": "Task" }
          }
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
          "id": "10000",
          "key": "PROJ-42",
          "self": "https://test.atlassian.net/rest/api/3/issue/10000"
      })))
      .mount(&mock_server)
      .await;

    let created = client
      .create_issue(
        "PROJ",
        "Implement search functionality",
        AdfDocument::from_text("Develop a search feature."),
      )
      .await?;

    assert_eq!(created.key, "PROJ-42");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_bad_request_surfaces_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test@example.com", "test_token");

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue"))
      .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"errors":{"project":"project is required"}}"#))
      .mount(&mock_server)
      .await;

    let result = client
      .create_issue("", "summary", AdfDocument::from_text("description"))
      .await;

    let message = result.unwrap_err().to_string();
    assert!(message.contains("400"));
    assert!(message.contains("project is required"));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test@example.com", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/TEST-123"))
      .and(basic_auth("test@example.com", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": "10000",
          "key": "TEST-123",
          "fields": {
              "summary": "Test issue",
              "status": { "id": "10001", "name": "In Progress" }
          }
      })))
      .mount(&mock_server)
      .await;

    let issue = client.get_issue("TEST-123").await?;
    assert_eq!(issue.key, "TEST-123");
    assert_eq!(issue.fields.summary, "Test issue");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test@example.com", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/NONEXISTENT-123"))
      .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
          "errorMessages": ["Issue does not exist or you do not have permission to see it."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.get_issue("NONEXISTENT-123").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));

    Ok(())
  }

  #[tokio::test]
  async fn test_update_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test@example.com", "test_token");

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/issue/TEST-123"))
      .and(basic_auth("test@example.com", "test_token"))
      .and(body_json(serde_json::json!({
          "fields": { "summary": "Updated summary" }
      })))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let fields = UpdateFields {
      summary: Some("Updated summary".to_string()),
      description: None,
    };
    client.update_issue("TEST-123", fields).await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_add_comment() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test@example.com", "test_token");

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/TEST-123/comment"))
      .and(basic_auth("test@example.com", "test_token"))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": "20001" })))
      .mount(&mock_server)
      .await;

    let comment = client
      .add_comment("TEST-123", AdfDocument::from_text("looks good to me"))
      .await?;
    assert_eq!(comment.id, "20001");

    Ok(())
  }

  #[tokio::test]
  async fn test_add_attachment() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test@example.com", "test_token");

    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "attachment body")?;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/TEST-123/attachments"))
      .and(basic_auth("test@example.com", "test_token"))
      .and(wiremock::matchers::header("X-Atlassian-Token", "no-check"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
          { "id": "30001", "filename": "notes.txt" }
      ])))
      .mount(&mock_server)
      .await;

    let attachments = client.add_attachment("TEST-123", file.path()).await?;
    assert_eq!(attachments.len(), 1);
    assert_eq!(attachments[0].id, "30001");

    Ok(())
  }

  #[tokio::test]
  async fn test_add_attachment_missing_file() {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test@example.com", "test_token");

    let result = client
      .add_attachment("TEST-123", std::path::Path::new("/no/such/file.txt"))
      .await;
    assert!(result.is_err());
  }
}
