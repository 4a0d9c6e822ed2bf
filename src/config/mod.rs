// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, DotConfig, FeedConfig, QueryConfig};

use std::path::Path;

use crate::error::{CotagError, Result};

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `cotag.toml` from the working directory.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads the given config file; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.feed.max_tags == 0 {
            return Err(CotagError::InvalidConfig(
                "feed.max_tags must be at least 1".into(),
            ));
        }
        if self.dot.min_node_weight == 0 {
            return Err(CotagError::InvalidConfig(
                "dot.min_node_weight must be at least 1".into(),
            ));
        }
        if self.dot.font_size_min > self.dot.font_size_max {
            return Err(CotagError::InvalidConfig(format!(
                "dot.font_size_min ({}) exceeds dot.font_size_max ({})",
                self.dot.font_size_min, self.dot.font_size_max
            )));
        }
        Ok(())
    }
}
