//! # Slot Fillers
//!
//! One handler per intent. Parameterized handlers follow the same pipeline:
//! build the intent-specific prompt, complete, extract JSON, validate the
//! required slots, then perform exactly one Jira operation and summarize the
//! result. Validation fails closed: a missing or blank slot stops the
//! pipeline before any network call to Jira.

use std::path::Path;

use jabber_jira::models::UpdateFields;
use jabber_jira::{AdfDocument, Board, Issue, JiraUser, Sprint};
use jabber_llm::{extract_json, is_error_reply};
use serde_json::{Map, Value};
use tracing::debug;

use crate::dispatch::Assistant;
use crate::error::AssistantError;
use crate::{prompts, report};

/// JQL behind `tasks_assigned_to_me`
const MY_TASKS_JQL: &str = "assignee = currentUser() AND resolution = Unresolved ORDER BY updated DESC";

/// Maximum issues fetched for search-style requests
const MAX_SEARCH_RESULTS: u32 = 50;

/// Map a user-facing sprint state word to Jira's sprint state
pub(crate) fn map_sprint_state(state: &str) -> Option<&'static str> {
  match state {
    "current" => Some("active"),
    "future" => Some("future"),
    "past" => Some("closed"),
    _ => None,
  }
}

/// Fetch a trimmed, non-empty string slot
fn slot(slots: &Map<String, Value>, key: &str) -> Option<String> {
  let value = slots.get(key)?.as_str()?.trim();
  if value.is_empty() { None } else { Some(value.to_string()) }
}

/// Escape a free-text fragment for embedding in a quoted JQL string
fn escape_jql(text: &str) -> String {
  text.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Assistant {
  /// Complete an extraction prompt and parse the embedded JSON object.
  async fn extract_slots(&self, prompt: &str) -> Result<Map<String, Value>, AssistantError> {
    let reply = self.llm.complete(prompt).await;
    if is_error_reply(&reply) {
      return Err(AssistantError::Completion(reply));
    }

    debug!(reply = %reply, "Extracting slots from model reply");

    extract_json(&reply).ok_or_else(|| AssistantError::extraction(&reply))
  }

  /// create_task: extract {project_key, summary, description}, create a Task
  pub async fn create_task(&self, utterance: &str) -> Result<String, AssistantError> {
    let slots = self.extract_slots(&prompts::create_task(utterance)).await?;

    let (Some(project_key), Some(summary), Some(description)) = (
      slot(&slots, "project_key"),
      slot(&slots, "summary"),
      slot(&slots, "description"),
    ) else {
      return Err(AssistantError::Validation(
        "Error: Insufficient or invalid task details in LLM response.".to_string(),
      ));
    };

    let created = self
      .jira
      .create_issue(&project_key, &summary, AdfDocument::from_text(&description))
      .await
      .map_err(|e| AssistantError::Rest(format!("Error creating Jira issue: {e:#}")))?;

    Ok(format!("Jira issue created successfully: {} - {}", created.key, summary))
  }

  /// get_issue_details: read one issue and render its details
  pub async fn get_issue_details(&self, issue_key: &str) -> Result<String, AssistantError> {
    let issue = self
      .jira
      .get_issue(issue_key)
      .await
      .map_err(|e| AssistantError::Rest(format!("Error retrieving issue details: {e:#}")))?;

    Ok(report::render_issue_details(&issue))
  }

  /// update_issue: extract {summary, description}, update the given issue
  pub async fn update_issue(&self, issue_key: &str, utterance: &str) -> Result<String, AssistantError> {
    let slots = self.extract_slots(&prompts::update_issue(utterance)).await?;

    let summary = slot(&slots, "summary");
    let description = slot(&slots, "description");

    if summary.is_none() && description.is_none() {
      return Err(AssistantError::Validation(
        "Error: No valid fields to update in LLM response.".to_string(),
      ));
    }

    let fields = UpdateFields {
      summary,
      description: description.as_deref().map(AdfDocument::from_text),
    };

    self
      .jira
      .update_issue(issue_key, fields)
      .await
      .map_err(|e| AssistantError::Rest(format!("Error updating Jira issue: {e:#}")))?;

    Ok(format!("Issue '{issue_key}' updated successfully."))
  }

  /// add_comment: the comment text comes straight from the utterance
  pub async fn add_comment(&self, issue_key: &str, utterance: &str) -> Result<String, AssistantError> {
    let comment = jabber_core::text::extract_comment(utterance);

    self
      .jira
      .add_comment(issue_key, AdfDocument::from_text(&comment))
      .await
      .map_err(|e| AssistantError::Rest(format!("Error adding comment to Jira issue: {e:#}")))?;

    Ok(format!("Comment added to issue '{issue_key}' successfully."))
  }

  /// search_issues: extract {jql_query} and render the matches
  pub async fn search_issues(&self, utterance: &str) -> Result<String, AssistantError> {
    let slots = self.extract_slots(&prompts::search_issues(utterance)).await?;

    let Some(jql_query) = slot(&slots, "jql_query") else {
      return Err(AssistantError::Validation(
        "Error: No valid JQL query found in LLM response.".to_string(),
      ));
    };

    let issues = self
      .jira
      .search_issues(&jql_query, MAX_SEARCH_RESULTS)
      .await
      .map_err(|e| AssistantError::Rest(format!("Error searching for issues: {e:#}")))?;

    if issues.is_empty() {
      return Ok("No issues found matching the query.".to_string());
    }

    Ok(report::render_issue_report(&issues))
  }

  /// assign_issue: two-step resolution, then assignment.
  ///
  /// The issue is described in free text and resolved by full-text search
  /// (first match only); the assignee display name is resolved via user
  /// search with an exact case-insensitive match (first match only).
  pub async fn assign_issue(&self, utterance: &str) -> Result<String, AssistantError> {
    let slots = self.extract_slots(&prompts::assign_issue(utterance)).await?;

    let (Some(issue_description), Some(assignee_name)) =
      (slot(&slots, "issue_description"), slot(&slots, "assignee_name"))
    else {
      return Err(AssistantError::Validation(
        "Error: Insufficient details in LLM response.".to_string(),
      ));
    };

    let issue_key = self.resolve_issue_key(&issue_description).await?;
    let assignee = self.resolve_user(&assignee_name).await?;

    self
      .jira
      .assign_issue(&issue_key, &assignee.account_id)
      .await
      .map_err(|e| AssistantError::Rest(format!("Error assigning issue: {e:#}")))?;

    Ok(format!(
      "Issue '{issue_key}' assigned successfully to user '{}'.",
      assignee.display_name
    ))
  }

  /// Resolve a free-text description to an issue key, first match only
  async fn resolve_issue_key(&self, description: &str) -> Result<String, AssistantError> {
    let jql = format!("text ~ \"{}\"", escape_jql(description));
    let issues = self
      .jira
      .search_issues(&jql, 1)
      .await
      .map_err(|e| AssistantError::Rest(format!("Error searching for the issue: {e:#}")))?;

    issues.into_iter().next().map(|issue| issue.key).ok_or_else(|| {
      AssistantError::Resolution("Error: Could not identify the issue to assign from that description.".to_string())
    })
  }

  /// Resolve a display name to a user, exact case-insensitive match only
  async fn resolve_user(&self, display_name: &str) -> Result<JiraUser, AssistantError> {
    let users = self
      .jira
      .search_users(display_name)
      .await
      .map_err(|e| AssistantError::Rest(format!("Error searching for the user: {e:#}")))?;

    users
      .into_iter()
      .find(|user| user.display_name.eq_ignore_ascii_case(display_name))
      .ok_or_else(|| AssistantError::Resolution(format!("Error: Could not find a user named '{display_name}'.")))
  }

  /// transition_issue: extract {issue_key, transition_name}, resolve the
  /// transition against the issue's available transitions, then apply it
  pub async fn transition_issue(&self, utterance: &str) -> Result<String, AssistantError> {
    let slots = self.extract_slots(&prompts::transition_issue(utterance)).await?;

    let (Some(issue_key), Some(transition_name)) = (slot(&slots, "issue_key"), slot(&slots, "transition_name")) else {
      return Err(AssistantError::Validation(
        "Error: Insufficient details in LLM response.".to_string(),
      ));
    };

    let transitions = self
      .jira
      .get_transitions(&issue_key)
      .await
      .map_err(|e| AssistantError::Rest(format!("Error fetching transitions: {e:#}")))?;

    let transition = transitions
      .into_iter()
      .find(|t| t.name.eq_ignore_ascii_case(&transition_name) || t.id == transition_name)
      .ok_or_else(|| {
        AssistantError::Resolution(format!(
          "Error: No transition named '{transition_name}' is available for issue '{issue_key}'."
        ))
      })?;

    self
      .jira
      .transition_issue(&issue_key, &transition.id)
      .await
      .map_err(|e| AssistantError::Rest(format!("Error transitioning issue: {e:#}")))?;

    Ok(format!(
      "Issue '{issue_key}' transitioned successfully to '{}'.",
      transition.name
    ))
  }

  /// add_attachment: extract {issue_key, file_path} and upload the file
  pub async fn add_attachment(&self, utterance: &str) -> Result<String, AssistantError> {
    let slots = self.extract_slots(&prompts::add_attachment(utterance)).await?;

    let (Some(issue_key), Some(file_path)) = (slot(&slots, "issue_key"), slot(&slots, "file_path")) else {
      return Err(AssistantError::Validation(
        "Error: Insufficient details in LLM response.".to_string(),
      ));
    };

    self
      .jira
      .add_attachment(&issue_key, Path::new(&file_path))
      .await
      .map_err(|e| AssistantError::Rest(format!("Error adding attachment: {e:#}")))?;

    Ok(format!("Attachment added to issue '{issue_key}' successfully."))
  }

  /// ask_about_sprint: project → board → sprint overview
  pub async fn sprint_overview(&self, utterance: &str) -> Result<String, AssistantError> {
    let Some(project_name) = jabber_core::text::extract_project_name(utterance) else {
      return Err(AssistantError::Resolution(
        "Error: Could not extract a valid project name from the input.".to_string(),
      ));
    };

    let board = self.resolve_board(&project_name).await?;

    let sprints = self
      .jira
      .get_sprints(board.id, None)
      .await
      .map_err(|e| AssistantError::Rest(format!("Error fetching sprints: {e:#}")))?;

    if sprints.is_empty() {
      return Err(AssistantError::Resolution(format!(
        "No sprints available for the board linked to the project '{project_name}'."
      )));
    }

    Ok(report::render_sprint_overview(&project_name, &sprints))
  }

  /// ask_about_sprint_issues: project → state → board → sprint → issues.
  ///
  /// Each link in the chain fails with its own message so the user knows
  /// exactly which lookup came up empty.
  pub async fn sprint_issues(&self, utterance: &str) -> Result<String, AssistantError> {
    let Some(project_name) = jabber_core::text::extract_project_name(utterance) else {
      return Err(AssistantError::Resolution(
        "Error: No project name or ID found in your input.".to_string(),
      ));
    };

    let Some(state_word) = jabber_core::text::extract_sprint_state(utterance) else {
      return Err(AssistantError::Resolution(
        "Error: No sprint state specified (e.g., current, future, past).".to_string(),
      ));
    };

    self.sprint_issues_chain(&project_name, &state_word).await
  }

  /// The board/sprint/issue chain, after the lexical extraction steps.
  ///
  /// The state word is mapped to Jira's sprint state before any board
  /// lookup; an unmapped state never reaches the network.
  pub(crate) async fn sprint_issues_chain(
    &self,
    project_name: &str,
    state_word: &str,
  ) -> Result<String, AssistantError> {
    let Some(jira_state) = map_sprint_state(state_word) else {
      return Err(AssistantError::Validation(format!(
        "Error: Invalid sprint state '{state_word}'. Valid states are: current, future, past."
      )));
    };

    let board = self.resolve_board(project_name).await?;

    let sprints = self
      .jira
      .get_sprints(board.id, Some(jira_state))
      .await
      .map_err(|e| AssistantError::Rest(format!("Error fetching sprints: {e:#}")))?;

    let Some(sprint) = sprints.into_iter().next() else {
      return Err(AssistantError::Resolution(format!(
        "No {state_word} sprints found for project '{project_name}'."
      )));
    };

    let issues = self.fetch_sprint_issues(&sprint).await?;

    if issues.is_empty() {
      return Err(AssistantError::Resolution(format!(
        "No issues found in sprint '{}' ({state_word}).",
        sprint.name
      )));
    }

    Ok(report::render_sprint_issues(&sprint.name, state_word, &issues))
  }

  /// Resolve a project name to its board, first match only
  async fn resolve_board(&self, project_name: &str) -> Result<Board, AssistantError> {
    self
      .jira
      .find_board(project_name)
      .await
      .map_err(|e| AssistantError::Rest(format!("Error while finding board: {e:#}")))?
      .ok_or_else(|| AssistantError::Resolution(format!("Error: No board found for the project '{project_name}'.")))
  }

  async fn fetch_sprint_issues(&self, sprint: &Sprint) -> Result<Vec<Issue>, AssistantError> {
    self
      .jira
      .get_sprint_issues(sprint.id)
      .await
      .map_err(|e| AssistantError::Rest(format!("Error fetching sprint issues: {e:#}")))
  }

  /// tasks_assigned_to_me: fixed JQL over the authenticated user
  pub async fn tasks_assigned_to_me(&self) -> Result<String, AssistantError> {
    let issues = self
      .jira
      .search_issues(MY_TASKS_JQL, MAX_SEARCH_RESULTS)
      .await
      .map_err(|e| AssistantError::Rest(format!("Error searching for your issues: {e:#}")))?;

    if issues.is_empty() {
      return Ok("You have no unresolved issues assigned to you.".to_string());
    }

    Ok(report::render_issue_report(&issues))
  }
}
