//! Error types for table loading, configuration and the GUI run loop.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading or parsing a tab-separated recording.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input has no header line")]
    MissingHeader,
    #[error("header names {found} columns, need time plus {channels} channels")]
    MissingColumns { found: usize, channels: usize },
    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: {text:?} is not a number")]
    Parse {
        line: usize,
        column: usize,
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Invalid or unreadable counter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level error returned by [`crate::run_counter`].
#[derive(Debug, Error)]
pub enum CounterError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// eframe errors are not `Send + Sync` on every backend, so only the message is kept.
    #[error("window error: {0}")]
    Gui(String),
}

impl From<eframe::Error> for CounterError {
    fn from(e: eframe::Error) -> Self {
        CounterError::Gui(e.to_string())
    }
}
