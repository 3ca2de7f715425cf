//! Command-line interface for song-library.
//!
//! Runs the HTTP API by default and offers a few commands for inspecting
//! the library and configuration from a terminal.

mod commands;

pub use commands::{Cli, Commands, run_command};
