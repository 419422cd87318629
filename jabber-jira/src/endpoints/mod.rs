//! # Jira API Endpoints
//!
//! Organized endpoint implementations for the resource types the assistant
//! touches: issues, search, transitions, users, boards, and sprints.

pub mod boards;
pub mod issues;
pub mod search;
pub mod sprints;
pub mod transitions;
pub mod users;
