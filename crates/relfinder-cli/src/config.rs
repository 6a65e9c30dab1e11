//! Run settings, optionally loaded from a TOML file.

use crate::error::{CliError, Result};
use relfinder_analysis::PlotSettings;
use relfinder_store::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings that are not worth a command-line flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Rows fetched from the database per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Folder the log file is written to
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Distribution plot settings
    #[serde(default)]
    pub plot: PlotSettings,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let settings: Settings = toml::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CliError::Config("page_size must be at least 1".into()));
        }
        if self.plot.bins == 0 {
            return Err(CliError::Config("plot.bins must be at least 1".into()));
        }
        if self.plot.width == 0 || self.plot.height == 0 {
            return Err(CliError::Config("plot size must be non-zero".into()));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            log_dir: default_log_dir(),
            plot: PlotSettings::default(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use relfinder_analysis::PlotFormat;

    #[test]
    fn test_default_settings() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.page_size, 40);
        assert_eq!(settings.log_dir, PathBuf::from("."));
        assert_eq!(settings.plot.bins, 10);
        assert_eq!(settings.plot.format, PlotFormat::Svg);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            page_size = 25
            log_dir = "logs"

            [plot]
            width = 1024
            format = "svg"
        "#;

        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.page_size, 25);
        assert_eq!(settings.log_dir, PathBuf::from("logs"));
        assert_eq!(settings.plot.width, 1024);
        assert_eq!(settings.plot.height, 600);
        assert_eq!(settings.plot.format, PlotFormat::Svg);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("relfinder.toml");
        std::fs::write(&path, "page_size = 0\n").unwrap();

        let result = Settings::from_file(&path);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::load(Some(Path::new("/nonexistent/relfinder.toml")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
