//! Error types for report and plot output

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing outputs
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization error
    #[error("Report write error: {0}")]
    Csv(#[from] csv::Error),

    /// Histogram rendering failed
    #[error("Plot error: {0}")]
    Plot(String),

    /// Output prefix cannot name a file
    #[error("Invalid output prefix: {}", .0.display())]
    InvalidPrefix(PathBuf),
}
