//! # Terminal Chat
//!
//! A line-at-a-time chat loop. Each line is one utterance handled start to
//! finish; there is no conversation state between lines.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use jabber_assistant::{Assistant, FAREWELL};
use jabber_core::output::{print_info, print_reply};
use tokio::runtime::Runtime;

/// Run the interactive chat loop until `exit` or end of input
pub fn run_chat(rt: &Runtime, assistant: &Assistant) -> Result<()> {
  print_info("Jabber is running in the terminal. Type 'exit' to quit.");

  let stdin = io::stdin();
  loop {
    print!("You: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
      // End of input: leave quietly, same as an explicit exit.
      println!();
      break;
    }

    let input = line.trim();
    if input.is_empty() {
      continue;
    }
    if input.eq_ignore_ascii_case("exit") {
      print_reply(FAREWELL);
      break;
    }

    let response = rt.block_on(assistant.handle(input));
    print_reply(&response);
  }

  Ok(())
}
