//! Configuration inspection command.

use std::path::Path;

use crate::config::{self, Config};
use crate::error::Error;

/// Print where config is read from and the effective values
pub fn cmd_config(config: &Config, explicit: Option<&Path>) -> anyhow::Result<()> {
    match explicit.map(Path::to_path_buf).or_else(config::config_path) {
        Some(path) if path.exists() => println!("# Config file: {}", path.display()),
        Some(path) => println!("# Config file: {} (not found, using defaults)", path.display()),
        None => println!("# Config file: unavailable (no config directory)"),
    }

    println!("{}", config.to_toml().map_err(Error::from)?);
    Ok(())
}
