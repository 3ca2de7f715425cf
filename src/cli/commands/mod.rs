//! CLI command definitions and dispatch.
//!
//! This module provides the command-line interface for the song library.
//! Each subcommand is implemented in its own submodule:
//! - `serve`: Run the HTTP API (the default when no subcommand is given)
//! - `songs`: List songs, page through lyrics, export the library
//! - `config`: Print the effective configuration

mod config;
mod serve;
mod songs;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::{self as app_config, Config, Overrides};
use crate::db::SqliteSongStore;
use crate::enrichment::build_provider;
use crate::error::{Error, ResultExt};
use crate::library::SongService;

pub use config::cmd_config;
pub use serve::cmd_serve;
pub use songs::{cmd_export, cmd_list, cmd_lyrics};

/// Song library service
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the OS config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "SONG_LIBRARY_BIND", global = true)]
    pub bind: Option<String>,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Music info service base URL (enables enrichment)
    #[arg(long, env = "MUSIC_INFO_URL", global = true)]
    pub music_info_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve,
    /// List songs, optionally filtered
    List {
        /// Group name contains (case-insensitive)
        #[arg(short, long)]
        group: Option<String>,
        /// Song name contains (case-insensitive)
        #[arg(short, long)]
        song: Option<String>,
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: i64,
        /// Songs per page
        #[arg(long, default_value_t = 10)]
        per_page: i64,
    },
    /// Print a page of a song's verses
    Lyrics {
        /// Song ID
        id: i64,
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: i64,
        /// Verses per page
        #[arg(long, default_value_t = 10)]
        per_page: i64,
    },
    /// Export every song as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the effective configuration
    Config,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            bind: self.bind.clone(),
            database_url: self.database_url.clone(),
            music_info_url: self.music_info_url.clone(),
        }
    }
}

/// Run the specified CLI command.
///
/// With no subcommand the HTTP server is started.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = effective_config(cli)?;
    let rt = Runtime::new()?;

    match &cli.command {
        None | Some(Commands::Serve) => cmd_serve(&rt, &config),
        Some(Commands::List {
            group,
            song,
            page,
            per_page,
        }) => cmd_list(&rt, &config, group.clone(), song.clone(), *page, *per_page),
        Some(Commands::Lyrics { id, page, per_page }) => {
            cmd_lyrics(&rt, &config, *id, *page, *per_page)
        }
        Some(Commands::Export { output }) => cmd_export(&rt, &config, output.as_deref()),
        Some(Commands::Config) => cmd_config(&config, cli.config.as_deref()),
    }
}

/// Config file (explicit or default location) with flag/env overrides applied.
fn effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => app_config::load_from(path).map_err(Error::from)?,
        None => app_config::load(),
    };
    Ok(config.apply(&cli.overrides()))
}

/// Open the store, pick the details provider and wire up the service.
async fn build_service(config: &Config) -> anyhow::Result<SongService> {
    let store = SqliteSongStore::connect(&config.database.url, config.database.max_connections)
        .await
        .with_context(format!("opening database {}", config.database.url))?;
    let details = build_provider(&config.enrichment).map_err(Error::from)?;

    Ok(SongService::new(std::sync::Arc::new(store), details))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["song-library"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_list_arguments() {
        let cli = Cli::try_parse_from([
            "song-library",
            "list",
            "--group",
            "muse",
            "--page",
            "2",
            "--per-page",
            "5",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::List {
                group,
                song,
                page,
                per_page,
            }) => {
                assert_eq!(group.as_deref(), Some("muse"));
                assert_eq!(song, None);
                assert_eq!((page, per_page), (2, 5));
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_global_flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "song-library",
            "config",
            "--bind",
            "127.0.0.1:9999",
            "--music-info-url",
            "http://info.local",
        ])
        .unwrap();

        let config = Config::default().apply(&cli.overrides());
        assert_eq!(config.server.bind, "127.0.0.1:9999");
        assert!(config.enrichment.enabled);
        assert_eq!(config.enrichment.base_url, "http://info.local");
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            config: Some(dir.path().join("absent.toml")),
            bind: None,
            database_url: None,
            music_info_url: None,
            command: Some(Commands::Config),
        };
        assert!(effective_config(&cli).is_err());
    }
}
