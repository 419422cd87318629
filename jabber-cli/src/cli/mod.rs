//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the jabber tool: the
//! terminal chat loop, the HTTP surface, and one-shot questions.

mod ask;
mod chat;
pub mod serve;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Args, Parser, Subcommand};
use jabber_assistant::Assistant;
use jabber_core::config::AssistantConfig;
use jabber_core::output::ColorMode;
use tokio::runtime::Runtime;

/// Top-level CLI command for the jabber tool
#[derive(Parser)]
#[command(name = "jabber")]
#[command(display_name = "💬 Jabber")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "A conversational Jira assistant")]
#[command(
  long_about = "Jabber turns free-text requests into Jira operations.\n\n\
        Ask it to create tasks, look up or update issues, add comments, search\n\
        with plain language, assign and transition issues, or answer sprint\n\
        questions - from a terminal chat, a single command, or over HTTP."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the jabber tool
#[derive(Subcommand)]
pub enum Commands {
  /// Chat with the assistant in the terminal
  #[command(long_about = "Start an interactive chat loop in the terminal.\n\n\
                         Every line you type is handled as one request; type 'exit' to quit.")]
  Chat,

  /// Serve the assistant over HTTP
  #[command(long_about = "Serve the assistant as a small HTTP API.\n\n\
                         POST /process-input with {\"input\": \"...\"} returns {\"response\": \"...\"}.\n\
                         POST /login validates Jira credentials against the configured site.")]
  Serve(ServeArgs),

  /// Ask a single question and exit
  Ask(AskArgs),
}

/// Arguments for the serve command
#[derive(Args)]
pub struct ServeArgs {
  /// Address to listen on
  #[arg(long, default_value = "127.0.0.1:8330")]
  pub bind: String,

  /// Origin allowed to call the API from a browser
  #[arg(long, default_value = "http://localhost:5173")]
  pub cors_origin: String,
}

/// Arguments for the ask command
#[derive(Args)]
pub struct AskArgs {
  /// The request, in plain language
  #[arg(required = true, trailing_var_arg = true)]
  pub utterance: Vec<String>,
}

/// Handle the parsed CLI command
pub fn handle_cli(cli: Cli) -> Result<()> {
  match cli.colors {
    ColorMode::Yes | ColorMode::Always => owo_colors::set_override(true),
    ColorMode::No | ColorMode::Never => owo_colors::set_override(false),
    ColorMode::Auto => {}
  }

  let config = AssistantConfig::from_env()?;
  let assistant = Assistant::from_config(&config);
  let rt = Runtime::new().context("Failed to create async runtime")?;

  match cli.command {
    Commands::Chat => chat::run_chat(&rt, &assistant),
    Commands::Serve(args) => rt.block_on(serve::serve(assistant, &args.bind, &args.cors_origin)),
    Commands::Ask(args) => ask::run_ask(&rt, &assistant, &args.utterance.join(" ")),
  }
}
