//! # Response Rendering
//!
//! Deterministic prose rendering of Jira results. The layout mirrors the
//! conversational report style the assistant promises in its prompts:
//! numbered issue lines with assignee, status, and priority.

use jabber_jira::{Issue, Sprint};
use serde_json::Value;

/// Render a list of issues as a numbered conversational report
pub fn render_issue_report(issues: &[Issue]) -> String {
  let mut out = String::from("Here are the issues:");
  for (index, issue) in issues.iter().enumerate() {
    out.push_str(&format!("\n{}. {}", index + 1, issue_line(issue)));
  }
  out
}

/// Render one issue's details
pub fn render_issue_details(issue: &Issue) -> String {
  let mut out = format!("Issue {}: {}", issue.key, issue.fields.summary);
  out.push_str(&format!("\nStatus: {}", status_name(issue)));
  out.push_str(&format!("\nAssignee: {}", assignee_name(issue)));
  if let Some(priority) = &issue.fields.priority {
    out.push_str(&format!("\nPriority: {}", priority.name));
  }
  if let Some(description) = &issue.fields.description {
    let text = adf_text(description);
    if !text.is_empty() {
      out.push_str(&format!("\nDescription: {text}"));
    }
  }
  out
}

/// Render the sprints of a board as an overview
pub fn render_sprint_overview(project_name: &str, sprints: &[Sprint]) -> String {
  let mut out = format!("Sprints for project '{project_name}':");
  for sprint in sprints {
    out.push_str(&format!("\n- {} ({})", sprint.name, sprint.state));
    if let (Some(start), Some(end)) = (&sprint.start_date, &sprint.end_date) {
      out.push_str(&format!(", {start} to {end}"));
    }
  }
  out
}

/// Render the issues of one sprint as the fixed bullet report
pub fn render_sprint_issues(sprint_name: &str, state_word: &str, issues: &[Issue]) -> String {
  let mut out = format!("Issues in sprint '{sprint_name}' ({state_word}):");
  for issue in issues {
    out.push_str(&format!("\n- {}", issue_line(issue)));
  }
  out
}

fn issue_line(issue: &Issue) -> String {
  let mut line = format!("{}: {} (Assignee: {}, Status: {}", issue.key, issue.fields.summary, assignee_name(issue), status_name(issue));
  if let Some(priority) = &issue.fields.priority {
    line.push_str(&format!(", Priority: {}", priority.name));
  }
  line.push(')');
  line
}

fn assignee_name(issue: &Issue) -> String {
  issue
    .fields
    .assignee
    .as_ref()
    .map(|user| user.display_name.clone())
    .unwrap_or_else(|| "Unassigned".to_string())
}

fn status_name(issue: &Issue) -> String {
  issue
    .fields
    .status
    .as_ref()
    .map(|status| status.name.clone())
    .unwrap_or_else(|| "Unknown".to_string())
}

/// Collect the text nodes of an ADF value into one string.
///
/// Descriptions come back from Jira Cloud as ADF documents; older servers
/// may still return a plain string.
pub fn adf_text(value: &Value) -> String {
  match value {
    Value::String(text) => text.clone(),
    Value::Object(_) => {
      let mut parts: Vec<String> = Vec::new();
      collect_text(value, &mut parts);
      parts.join(" ")
    }
    _ => String::new(),
  }
}

fn collect_text(value: &Value, parts: &mut Vec<String>) {
  if let Some(text) = value.get("text").and_then(Value::as_str) {
    parts.push(text.to_string());
  }
  if let Some(children) = value.get("content").and_then(Value::as_array) {
    for child in children {
      collect_text(child, parts);
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn issue(key: &str, summary: &str, assignee: Option<&str>, status: &str, priority: Option<&str>) -> Issue {
    let mut fields = json!({ "summary": summary, "status": { "name": status } });
    if let Some(name) = assignee {
      fields["assignee"] = json!({ "accountId": "abc", "displayName": name });
    }
    if let Some(name) = priority {
      fields["priority"] = json!({ "name": name });
    }
    serde_json::from_value(json!({ "id": "1", "key": key, "fields": fields })).unwrap()
  }

  #[test]
  fn test_render_issue_report() {
    let issues = vec![
      issue("RA-123", "Fix login bug", Some("John Doe"), "Open", Some("High")),
      issue("RA-456", "Update documentation", None, "In Progress", None),
    ];

    let report = render_issue_report(&issues);

    assert_eq!(
      report,
      "Here are the issues:\n\
       1. RA-123: Fix login bug (Assignee: John Doe, Status: Open, Priority: High)\n\
       2. RA-456: Update documentation (Assignee: Unassigned, Status: In Progress)"
    );
  }

  #[test]
  fn test_render_sprint_issues() {
    let issues = vec![issue("RA-1", "Ship it", Some("Jane Smith"), "Done", None)];

    let report = render_sprint_issues("Sprint 6", "past", &issues);

    assert_eq!(
      report,
      "Issues in sprint 'Sprint 6' (past):\n\
       - RA-1: Ship it (Assignee: Jane Smith, Status: Done)"
    );
  }

  #[test]
  fn test_render_issue_details_with_adf_description() {
    let issue: Issue = serde_json::from_value(json!({
        "id": "1",
        "key": "RA-9",
        "fields": {
            "summary": "Crash on save",
            "status": { "name": "Open" },
            "description": {
                "version": 1,
                "type": "doc",
                "content": [
                    {
                        "type": "paragraph",
                        "content": [ { "type": "text", "text": "Saving a draft crashes." } ]
                    }
                ]
            }
        }
    }))
    .unwrap();

    let details = render_issue_details(&issue);

    assert!(details.starts_with("Issue RA-9: Crash on save"));
    assert!(details.contains("Description: Saving a draft crashes."));
  }

  #[test]
  fn test_adf_text_plain_string_passthrough() {
    assert_eq!(adf_text(&json!("plain description")), "plain description");
  }

  #[test]
  fn test_render_sprint_overview_with_dates() {
    let sprints: Vec<Sprint> = serde_json::from_value(json!([
        {
            "id": 41,
            "name": "Sprint 6",
            "state": "closed",
            "startDate": "2024-12-01",
            "endDate": "2024-12-15"
        },
        { "id": 42, "name": "Sprint 7", "state": "active" }
    ]))
    .unwrap();

    let overview = render_sprint_overview("Alpha", &sprints);

    assert_eq!(
      overview,
      "Sprints for project 'Alpha':\n\
       - Sprint 6 (closed), 2024-12-01 to 2024-12-15\n\
       - Sprint 7 (active)"
    );
  }
}
