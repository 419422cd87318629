//! # Jira API Client
//!
//! Provides Jira REST API integration for the assistant: issue CRUD,
//! comments, attachments, JQL search, transitions, user lookup, and the
//! agile board/sprint queries backing sprint questions.

mod client;
mod consts;
mod endpoints;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export models
pub use models::{
  AdfDocument, Board, CreatedIssue, Issue, IssueFields, IssueStatus, JiraAuth, JiraUser, Priority, Sprint, Transition,
  UpdateFields,
};
