// src/config/io.rs
//! Loading `cotag.toml` from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::Config;
use crate::error::{CotagError, Result};

pub const CONFIG_FILE: &str = "cotag.toml";

/// Loads `path`, falling back to defaults when the file does not exist.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("no {} found, using defaults", path.display());
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path).map_err(|e| CotagError::io(path, e))?;
    let config = parse_toml(&content, path)?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Parses TOML text; `origin` is only used for error messages.
///
/// # Errors
/// Returns error if the TOML is malformed or has wrongly typed values.
pub fn parse_toml(content: &str, origin: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|source| CotagError::Config {
        path: origin.to_path_buf(),
        source,
    })
}
