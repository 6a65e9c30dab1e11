//! Log file and console setup.
//!
//! Everything goes to `<log_dir>/<log_filename>`; `--log-to-console` adds a
//! bare-message layer on stderr. User inputs are logged on their own target,
//! which stays at INFO whatever level was picked.

use crate::cli::{LogArgs, LogLevel};
use crate::error::{CliError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Target used for recording user inputs.
pub const INPUTS_TARGET: &str = "relfinder::inputs";

impl LogLevel {
    /// Filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Warning => "warn",
            LogLevel::Verbose => "info",
            LogLevel::Debug => "debug",
        }
    }
}

/// Filter for the chosen level, with user inputs always enabled.
pub fn filter_for(level: LogLevel) -> Result<EnvFilter> {
    EnvFilter::try_new(format!("{},{}=info", level.directive(), INPUTS_TARGET))
        .map_err(|e| CliError::Logging(e.to_string()))
}

/// Install the global subscriber. Returns the log file path.
pub fn init(args: &LogArgs, log_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(log_dir)?;
    let path = log_dir.join(&args.log_filename);
    let file = File::create(&path)?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let console_layer = args.log_to_console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_level(false)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter_for(args.loglevel)?)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    Ok(path)
}

/// Record the arguments a run was started with.
pub fn record_inputs(inputs: &[(&str, String)]) {
    for (parameter, value) in inputs {
        tracing::info!(target: INPUTS_TARGET, "{}: {}", parameter, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directives() {
        assert_eq!(LogLevel::Warning.directive(), "warn");
        assert_eq!(LogLevel::Verbose.directive(), "info");
        assert_eq!(LogLevel::Debug.directive(), "debug");
    }

    #[test]
    fn test_filter_keeps_inputs_at_info() {
        let filter = filter_for(LogLevel::Warning).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("warn"));
        assert!(rendered.contains("relfinder::inputs=info"));
    }
}
