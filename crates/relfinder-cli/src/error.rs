//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed line in an identifier file
    #[error("There was an error reading in the file: {} at line {line}. {reason}", .path.display())]
    Format {
        /// File being read
        path: PathBuf,
        /// 1-based line number
        line: u64,
        /// What was wrong with the line
        reason: String,
    },

    /// Identifier file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying reader error
        source: csv::Error,
    },

    /// Database error
    #[error(transparent)]
    Store(#[from] relfinder_store::StoreError),

    /// Report or plot output error
    #[error(transparent)]
    Analysis(#[from] relfinder_analysis::AnalysisError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Logging could not be set up
    #[error("Logging error: {0}")]
    Logging(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
