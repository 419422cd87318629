use serde::{Deserialize, Serialize};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub email: String,
  pub api_token: String,
}

/// Represents a Jira user
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  pub account_id: String,
  pub display_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email_address: Option<String>,
}

/// Represents a Jira issue
#[derive(Debug, Deserialize)]
pub struct Issue {
  pub id: String,
  pub key: String,
  pub fields: IssueFields,
}

/// Represents Jira issue fields
///
/// All fields except the summary are optional: search responses are filtered
/// to a narrow field set and boards may hide priority entirely.
#[derive(Debug, Deserialize)]
pub struct IssueFields {
  pub summary: String,
  #[serde(default)]
  pub description: Option<serde_json::Value>,
  #[serde(default)]
  pub status: Option<IssueStatus>,
  #[serde(default)]
  pub assignee: Option<JiraUser>,
  #[serde(default)]
  pub priority: Option<Priority>,
}

/// Represents a Jira issue status
#[derive(Debug, Deserialize)]
pub struct IssueStatus {
  #[serde(default)]
  pub id: Option<String>,
  pub name: String,
}

/// Represents an issue priority
#[derive(Debug, Deserialize)]
pub struct Priority {
  pub name: String,
}

/// Search response wrapper for `/rest/api/3/search` and sprint issue lists
#[derive(Debug, Deserialize)]
pub struct SearchResults {
  pub issues: Vec<Issue>,
}

/// Represents a Jira transition
#[derive(Debug, Deserialize)]
pub struct Transition {
  pub id: String,
  pub name: String,
}

/// Represents a list of Jira transitions
#[derive(Debug, Deserialize)]
pub struct TransitionList {
  pub transitions: Vec<Transition>,
}

/// Represents a transition request payload
#[derive(Debug, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionId,
}

/// Represents a transition ID for the request
#[derive(Debug, Serialize)]
pub struct TransitionId {
  pub id: String,
}

/// Assignment request payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
  pub account_id: String,
}

/// Represents an agile board
#[derive(Debug, Deserialize)]
pub struct Board {
  pub id: u64,
  pub name: String,
}

/// Board lookup response wrapper
#[derive(Debug, Deserialize)]
pub struct BoardList {
  pub values: Vec<Board>,
}

/// Represents a sprint on a board
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
  pub id: u64,
  pub name: String,
  pub state: String,
  #[serde(default)]
  pub start_date: Option<String>,
  #[serde(default)]
  pub end_date: Option<String>,
}

/// Sprint list response wrapper
#[derive(Debug, Deserialize)]
pub struct SprintList {
  pub values: Vec<Sprint>,
}

/// An Atlassian Document Format document.
///
/// Jira Cloud requires descriptions and comment bodies in ADF. The assistant
/// only ever produces the minimal shape: one paragraph holding one text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdfDocument {
  pub version: u32,
  #[serde(rename = "type")]
  pub doc_type: String,
  pub content: Vec<AdfNode>,
}

/// A node inside an ADF document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdfNode {
  #[serde(rename = "type")]
  pub node_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content: Option<Vec<AdfNode>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
}

impl AdfDocument {
  /// Wrap plain text in the fixed single-paragraph document shape
  pub fn from_text(text: &str) -> Self {
    Self {
      version: 1,
      doc_type: "doc".to_string(),
      content: vec![AdfNode {
        node_type: "paragraph".to_string(),
        content: Some(vec![AdfNode {
          node_type: "text".to_string(),
          content: None,
          text: Some(text.to_string()),
        }]),
        text: None,
      }],
    }
  }
}

/// Issue creation request payload
#[derive(Debug, Serialize)]
pub struct CreateIssueRequest {
  pub fields: CreateIssueFields,
}

/// Fields for issue creation
#[derive(Debug, Serialize)]
pub struct CreateIssueFields {
  pub project: ProjectKey,
  pub summary: String,
  pub description: AdfDocument,
  pub issuetype: IssueTypeName,
}

/// Project reference by key
#[derive(Debug, Serialize)]
pub struct ProjectKey {
  pub key: String,
}

/// Issue type reference by name
#[derive(Debug, Serialize)]
pub struct IssueTypeName {
  pub name: String,
}

/// A freshly created issue
#[derive(Debug, Deserialize)]
pub struct CreatedIssue {
  pub id: String,
  pub key: String,
}

/// Issue update request payload
#[derive(Debug, Serialize)]
pub struct UpdateIssueRequest {
  pub fields: UpdateFields,
}

/// Updatable issue fields; absent fields are left untouched
#[derive(Debug, Default, Serialize)]
pub struct UpdateFields {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<AdfDocument>,
}

/// Comment creation request payload
#[derive(Debug, Serialize)]
pub struct CommentRequest {
  pub body: AdfDocument,
}

/// A created comment
#[derive(Debug, Deserialize)]
pub struct Comment {
  pub id: String,
}

/// An uploaded attachment
#[derive(Debug, Deserialize)]
pub struct Attachment {
  pub id: String,
  pub filename: String,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_issue_deserialization() {
    let json = json!({
        "id": "10000",
        "key": "PROJ-123",
        "fields": {
            "summary": "Fix login bug",
            "status": { "name": "In Progress" },
            "assignee": {
                "accountId": "abc123",
                "displayName": "John Doe"
            },
            "priority": { "name": "High" }
        }
    });

    let issue: Issue = serde_json::from_value(json).unwrap();

    assert_eq!(issue.key, "PROJ-123");
    assert_eq!(issue.fields.summary, "Fix login bug");
    assert_eq!(issue.fields.status.unwrap().name, "In Progress");
    assert_eq!(issue.fields.assignee.unwrap().display_name, "John Doe");
    assert_eq!(issue.fields.priority.unwrap().name, "High");
  }

  #[test]
  fn test_issue_deserialization_with_sparse_fields() {
    let json = json!({
        "id": "10001",
        "key": "PROJ-124",
        "fields": { "summary": "Bare minimum" }
    });

    let issue: Issue = serde_json::from_value(json).unwrap();

    assert_eq!(issue.fields.summary, "Bare minimum");
    assert!(issue.fields.status.is_none());
    assert!(issue.fields.assignee.is_none());
  }

  #[test]
  fn test_adf_from_text_serialization() {
    let doc = AdfDocument::from_text("Develop a search feature.");

    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(
      json,
      json!({
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
      })
    );
  }

  #[test]
  fn test_create_issue_request_serialization() {
    let request = CreateIssueRequest {
      fields: CreateIssueFields {
        project: ProjectKey {
          key: "PROJ".to_string(),
        },
        summary: "Implement search".to_string(),
        description: AdfDocument::from_text("Details"),
        issuetype: IssueTypeName {
          name: "Task".to_string(),
        },
      },
    };

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["fields"]["project"]["key"], "PROJ");
    assert_eq!(json["fields"]["issuetype"]["name"], "Task");
    assert_eq!(json["fields"]["description"]["version"], 1);
  }

  #[test]
  fn test_update_fields_skips_absent_values() {
    let fields = UpdateFields {
      summary: Some("New summary".to_string()),
      description: None,
    };

    let json = serde_json::to_value(UpdateIssueRequest { fields }).unwrap();

    assert_eq!(json["fields"]["summary"], "New summary");
    assert!(json["fields"].get("description").is_none());
  }

  #[test]
  fn test_assign_request_serialization() {
    let request = AssignRequest {
      account_id: "5f9b5b5b5b5b5b5b5b5b5b5b".to_string(),
    };

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json, json!({ "accountId": "5f9b5b5b5b5b5b5b5b5b5b5b" }));
  }

  #[test]
  fn test_sprint_deserialization() {
    let json = json!({
        "id": 42,
        "name": "Sprint 7",
        "state": "active",
        "startDate": "2025-01-06T09:00:00.000Z",
        "endDate": "2025-01-20T17:00:00.000Z"
    });

    let sprint: Sprint = serde_json::from_value(json).unwrap();

    assert_eq!(sprint.id, 42);
    assert_eq!(sprint.name, "Sprint 7");
    assert_eq!(sprint.state, "active");
    assert!(sprint.start_date.is_some());
  }
}
