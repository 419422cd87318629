//! # Intent Classification
//!
//! One LLM call turns an utterance into a label from a closed set. The model
//! is asked for the bare label; the reply is normalized defensively and
//! anything that does not match the enumeration becomes [`Intent::Unknown`].

use jabber_llm::{CompletionClient, is_error_reply};
use tracing::{debug, warn};

/// Boilerplate prefix some models insist on despite instructions.
const REPLY_PREFIX: &str = "the intent of the user input is:";

/// What the user wants done, as classified from one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
  CreateTask,
  GetIssueDetails,
  UpdateIssue,
  AddComment,
  SearchIssues,
  AssignIssue,
  TransitionIssue,
  AddAttachment,
  AskAboutSprint,
  AskAboutSprintIssues,
  TasksAssignedToMe,
  Exit,
  /// Anything the classifier could not place in the closed set
  Unknown,
}

impl Intent {
  /// The snake_case label used on the wire with the model
  pub const fn label(&self) -> &'static str {
    match self {
      Intent::CreateTask => "create_task",
      Intent::GetIssueDetails => "get_issue_details",
      Intent::UpdateIssue => "update_issue",
      Intent::AddComment => "add_comment",
      Intent::SearchIssues => "search_issues",
      Intent::AssignIssue => "assign_issue",
      Intent::TransitionIssue => "transition_issue",
      Intent::AddAttachment => "add_attachment",
      Intent::AskAboutSprint => "ask_about_sprint",
      Intent::AskAboutSprintIssues => "ask_about_sprint_issues",
      Intent::TasksAssignedToMe => "tasks_assigned_to_me",
      Intent::Exit => "exit",
      Intent::Unknown => "unknown",
    }
  }

  /// Parse a normalized label; `None` for anything outside the closed set
  pub fn from_label(label: &str) -> Option<Self> {
    match label {
      "create_task" => Some(Intent::CreateTask),
      "get_issue_details" => Some(Intent::GetIssueDetails),
      "update_issue" => Some(Intent::UpdateIssue),
      "add_comment" => Some(Intent::AddComment),
      "search_issues" => Some(Intent::SearchIssues),
      "assign_issue" => Some(Intent::AssignIssue),
      "transition_issue" => Some(Intent::TransitionIssue),
      "add_attachment" => Some(Intent::AddAttachment),
      "ask_about_sprint" => Some(Intent::AskAboutSprint),
      "ask_about_sprint_issues" => Some(Intent::AskAboutSprintIssues),
      "tasks_assigned_to_me" => Some(Intent::TasksAssignedToMe),
      "exit" => Some(Intent::Exit),
      _ => None,
    }
  }

  /// Labels offered to the classifier, in prompt order
  const CHOICES: [&'static str; 12] = [
    "create_task",
    "get_issue_details",
    "update_issue",
    "add_comment",
    "search_issues",
    "assign_issue",
    "transition_issue",
    "add_attachment",
    "ask_about_sprint",
    "ask_about_sprint_issues",
    "tasks_assigned_to_me",
    "exit",
  ];
}

/// Build the enumeration-style classification prompt
fn classification_prompt(utterance: &str) -> String {
  let mut choices = String::new();
  for label in Intent::CHOICES {
    choices.push_str(&format!("- {label}\n"));
  }

  format!(
    "Determine the intent of the following user input. Choose from:\n\
     {choices}\n\
     Important:\n\
     - Return only the intent (e.g., \"create_task\") without additional text.\n\
     - Do not include any explanations or prefixes like \"the intent of the user input is:\".\n\n\
     User input: {utterance}\n"
  )
}

/// Normalize a classifier reply: lowercase, strip the boilerplate prefix,
/// trim whitespace and stray quoting.
pub fn normalize_reply(reply: &str) -> String {
  let lowered = reply.to_lowercase();
  let stripped = lowered.replace(REPLY_PREFIX, "");
  stripped.trim().trim_matches(['"', '\'', '`']).to_string()
}

/// Classify one utterance. Any reply outside the closed set, including an
/// API failure, is [`Intent::Unknown`].
pub async fn classify(llm: &CompletionClient, utterance: &str) -> Intent {
  let reply = llm.complete(&classification_prompt(utterance)).await;
  if is_error_reply(&reply) {
    warn!("Intent classification failed: {reply}");
    return Intent::Unknown;
  }

  let label = normalize_reply(&reply);
  debug!(label = %label, "Classified intent");

  Intent::from_label(&label).unwrap_or(Intent::Unknown)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_label_round_trips() {
    for label in Intent::CHOICES {
      let intent = Intent::from_label(label).unwrap();
      assert_eq!(intent.label(), label);
    }
  }

  #[test]
  fn test_from_label_rejects_unknown() {
    assert_eq!(Intent::from_label("make_coffee"), None);
    assert_eq!(Intent::from_label("unknown"), None);
  }

  #[test]
  fn test_normalize_reply_strips_boilerplate_prefix() {
    assert_eq!(
      normalize_reply("The intent of the user input is: create_task"),
      "create_task"
    );
  }

  #[test]
  fn test_normalize_reply_trims_and_lowercases() {
    assert_eq!(normalize_reply("  Exit \n"), "exit");
    assert_eq!(normalize_reply("\"search_issues\""), "search_issues");
  }

  #[test]
  fn test_classification_prompt_lists_every_choice() {
    let prompt = classification_prompt("create a task");
    for label in Intent::CHOICES {
      assert!(prompt.contains(label), "prompt is missing {label}");
    }
    assert!(prompt.contains("create a task"));
  }
}
