//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::HighlightMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end, read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Which cells to highlight.
    #[serde(default)]
    highlight: HighlightMode,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show the move that produced each history entry.
    #[serde(default = "default_show_move_details")]
    show_move_details: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_move_details() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            highlight: HighlightMode::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_move_details: default_show_move_details(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(highlight = %config.highlight, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        highlight: Option<HighlightMode>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(highlight) = highlight {
            self.highlight = highlight;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.highlight(), &HighlightMode::WinningLine);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "highlight = \"last-move\"").unwrap();
        writeln!(file, "show_move_details = false").unwrap();

        let config = TuiConfig::load(file.path()).unwrap();
        assert_eq!(config.highlight(), &HighlightMode::LastMove);
        assert!(!config.show_move_details());
        assert_eq!(config.log_file(), &PathBuf::from("rewind.log"));
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_invalid_file_reports_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "highlight = \"sparkles\"").unwrap();

        let err = TuiConfig::load(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides_win() {
        let config = TuiConfig::default()
            .with_overrides(Some(HighlightMode::LastMove), Some(PathBuf::from("x.log")));
        assert_eq!(config.highlight(), &HighlightMode::LastMove);
        assert_eq!(config.log_file(), &PathBuf::from("x.log"));

        let unchanged = TuiConfig::default().with_overrides(None, None);
        assert_eq!(unchanged, TuiConfig::default());
    }
}
