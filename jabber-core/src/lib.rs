//! # Jabber Core Library
//!
//! Shared building blocks for the jabber assistant: explicit configuration
//! for the Jira and LLM boundaries, colored terminal output helpers, and the
//! utterance text heuristics used by the dispatcher.

pub mod config;
pub mod output;
pub mod text;

pub use config::{AssistantConfig, JiraConfig, LlmConfig};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use text::{extract_comment, extract_issue_key, extract_project_name, extract_sprint_state};
