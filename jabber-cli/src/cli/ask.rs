//! # One-shot Questions
//!
//! `jabber ask <request...>` handles a single utterance and prints the
//! response, which makes the assistant scriptable.

use anyhow::Result;
use jabber_assistant::Assistant;
use tokio::runtime::Runtime;

/// Handle one utterance and print the response
pub fn run_ask(rt: &Runtime, assistant: &Assistant, utterance: &str) -> Result<()> {
  let response = rt.block_on(assistant.handle(utterance));
  println!("{response}");
  Ok(())
}
