//! Song Library - a REST service for a catalogue of songs.
//!
//! Songs are stored in SQLite, enriched with release date, lyrics and a link
//! from an external music info service when they are added, and can be
//! listed with filters or read verse by verse. The same operations are
//! available from the command line.

pub mod cli;
pub mod config;
pub mod db;
pub mod enrichment;
pub mod error;
pub mod library;
pub mod model;
pub mod server;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("song_library=info".parse()?))
        .init();

    cli::run_command(&args)
}
