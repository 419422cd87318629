//! # Jabber CLI Library
//!
//! Exposes the CLI structure and the HTTP router so integration tests can
//! drive them without spawning the binary.

pub mod cli;
