// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CotagError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Input not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Invalid config in {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config value: {0}")]
    InvalidConfig(String),

    #[error("Malformed report line {line_no}: {line:?}")]
    MalformedLine { line_no: usize, line: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CotagError>;

impl CotagError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CotagError::Io {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to CotagError::Io with unknown path.
impl From<std::io::Error> for CotagError {
    fn from(source: std::io::Error) -> Self {
        CotagError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
