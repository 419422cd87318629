//! # Dispatcher
//!
//! Routes one classified utterance to its handler and renders the outcome as
//! the plain-text chat response. Sequential and stateless: one utterance in,
//! exactly one response out, and safe to call from concurrent requests.

use jabber_core::config::AssistantConfig;
use jabber_core::text::extract_issue_key;
use jabber_jira::JiraClient;
use jabber_llm::CompletionClient;
use tracing::{debug, warn};

use crate::error::AssistantError;
use crate::intent::{Intent, classify};

/// Fixed farewell for the `exit` intent
pub const FAREWELL: &str = "Thank you for using the Jira Assistant. Goodbye!";

/// Fixed fallback for anything the classifier could not place
pub const FALLBACK: &str = "Sorry, I didn't understand that. Please try again.";

/// Response when a key-bearing intent arrives without an issue key
const MISSING_ISSUE_KEY: &str = "Please specify an issue key (e.g., PROJ-123).";

/// The assembled pipeline: completion client plus Jira client.
///
/// Holds no mutable state; both clients are stateless and take every input
/// as a parameter.
pub struct Assistant {
  pub(crate) llm: CompletionClient,
  pub(crate) jira: JiraClient,
}

impl Assistant {
  /// Create an assistant from already-built clients
  pub fn new(llm: CompletionClient, jira: JiraClient) -> Self {
    Self { llm, jira }
  }

  /// Create an assistant from configuration
  pub fn from_config(config: &AssistantConfig) -> Self {
    Self::new(
      CompletionClient::from_config(&config.llm),
      JiraClient::from_config(&config.jira),
    )
  }

  /// Handle one utterance end to end.
  ///
  /// Never errors: every failure kind renders to the sentence the user sees.
  pub async fn handle(&self, utterance: &str) -> String {
    let utterance = utterance.trim();
    let intent = classify(&self.llm, utterance).await;

    debug!(intent = intent.label(), "Dispatching utterance");

    let result = self.dispatch(intent, utterance).await;

    match result {
      Ok(response) => response,
      Err(e) => {
        warn!(intent = intent.label(), "Handler failed: {e}");
        e.to_string()
      }
    }
  }

  async fn dispatch(&self, intent: Intent, utterance: &str) -> Result<String, AssistantError> {
    match intent {
      Intent::CreateTask => self.create_task(utterance).await,
      // Key-bearing intents read the issue key straight from the utterance;
      // no second model call is needed to find it.
      Intent::GetIssueDetails => match extract_issue_key(utterance) {
        Some(issue_key) => self.get_issue_details(&issue_key).await,
        None => Ok(MISSING_ISSUE_KEY.to_string()),
      },
      Intent::UpdateIssue => match extract_issue_key(utterance) {
        Some(issue_key) => self.update_issue(&issue_key, utterance).await,
        None => Ok(MISSING_ISSUE_KEY.to_string()),
      },
      Intent::AddComment => match extract_issue_key(utterance) {
        Some(issue_key) => self.add_comment(&issue_key, utterance).await,
        None => Ok(MISSING_ISSUE_KEY.to_string()),
      },
      Intent::SearchIssues => self.search_issues(utterance).await,
      Intent::AssignIssue => self.assign_issue(utterance).await,
      Intent::TransitionIssue => self.transition_issue(utterance).await,
      Intent::AddAttachment => self.add_attachment(utterance).await,
      Intent::AskAboutSprint => self.sprint_overview(utterance).await,
      Intent::AskAboutSprintIssues => self.sprint_issues(utterance).await,
      Intent::TasksAssignedToMe => self.tasks_assigned_to_me().await,
      Intent::Exit => Ok(FAREWELL.to_string()),
      Intent::Unknown => Ok(FALLBACK.to_string()),
    }
  }
}
