//! # LLM Completion Client
//!
//! Provides the single-shot completion call the assistant pipeline is built
//! on, plus the permissive JSON extraction used to turn free-text model
//! output into structured slot values.

mod client;
mod extract;

pub use client::{API_ERROR_MARKER, CompletionClient, is_error_reply};
pub use extract::extract_json;
