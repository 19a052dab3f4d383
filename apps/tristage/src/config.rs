//! # Configuration
//!
//! Settings are layered, later layers winning:
//!
//! 1. Built-in defaults
//! 2. Optional TOML file (`--config`)
//! 3. Environment variables and CLI flags (resolved by clap)
//!
//! ```toml
//! action_name = "my-action"
//! log_format = "json"
//! state_file = "/tmp/state"
//! ```

use crate::error::AppError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "unknown log format '{}', expected 'text' or 'json'",
                other
            ))),
        }
    }
}

/// Contents of the optional TOML file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub action_name: Option<String>,
    pub log_format: Option<String>,
    pub state_file: Option<PathBuf>,
}

impl FileConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, AppError> {
        toml::from_str(raw).map_err(|e| AppError::Config(format!("invalid config file: {}", e)))
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&raw)
    }
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub action_name: Option<String>,
    pub log_format: Option<String>,
    pub state_file: Option<PathBuf>,
}

/// Effective configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name used in log lines and failure annotations.
    pub action_name: String,
    pub log_format: LogFormat,
    /// From `--state-file`, then `GITHUB_STATE`, then the config file.
    pub state_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            action_name: env!("CARGO_PKG_NAME").to_string(),
            log_format: LogFormat::Text,
            state_file: None,
        }
    }
}

impl Config {
    /// Merge the file layer and the override layer over the defaults.
    pub fn layered(file: FileConfig, overrides: Overrides) -> Result<Self, AppError> {
        let defaults = Self::default();

        let non_blank = |name: &String| !name.trim().is_empty();
        let action_name = overrides
            .action_name
            .filter(non_blank)
            .or(file.action_name.filter(non_blank))
            .unwrap_or(defaults.action_name);

        let log_format = match overrides.log_format.or(file.log_format) {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            action_name,
            log_format,
            state_file: overrides.state_file.or(file.state_file),
        })
    }

    /// Load the optional file, then apply overrides.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, AppError> {
        let file = match path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::layered(file, overrides)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::layered(FileConfig::default(), Overrides::default()).expect("config");
        assert_eq!(config, Config::default());
        assert_eq!(config.action_name, "tristage");
    }

    #[test]
    fn file_layer_applies() {
        let file = FileConfig::from_toml_str(
            "action_name = \"deploy\"\nlog_format = \"json\"\nstate_file = \"/tmp/s\"\n",
        )
        .expect("parse");
        let config = Config::layered(file, Overrides::default()).expect("config");
        assert_eq!(config.action_name, "deploy");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.state_file, Some(PathBuf::from("/tmp/s")));
    }

    #[test]
    fn overrides_win_over_file() {
        let file = FileConfig {
            action_name: Some("deploy".to_string()),
            log_format: Some("json".to_string()),
            state_file: None,
        };
        let overrides = Overrides {
            action_name: Some("release".to_string()),
            log_format: Some("TEXT".to_string()),
            state_file: None,
        };
        let config = Config::layered(file, overrides).expect("config");
        assert_eq!(config.action_name, "release");
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn blank_action_name_falls_back() {
        let overrides = Overrides {
            action_name: Some("  ".to_string()),
            ..Overrides::default()
        };
        let config = Config::layered(FileConfig::default(), overrides).expect("config");
        assert_eq!(config.action_name, "tristage");
    }

    #[test]
    fn blank_override_keeps_file_action_name() {
        let file = FileConfig {
            action_name: Some("deploy".to_string()),
            ..FileConfig::default()
        };
        let overrides = Overrides {
            action_name: Some(String::new()),
            ..Overrides::default()
        };
        let config = Config::layered(file, overrides).expect("config");
        assert_eq!(config.action_name, "deploy");
    }

    #[test]
    fn runner_state_file_beats_config_file() {
        let file = FileConfig::from_toml_str("state_file = \"/tmp/from-config\"\n").expect("parse");
        let overrides = Overrides {
            state_file: Some(PathBuf::from("/runner/state")),
            ..Overrides::default()
        };
        let config = Config::layered(file, overrides).expect("config");
        assert_eq!(config.state_file, Some(PathBuf::from("/runner/state")));
    }

    #[test]
    fn unknown_log_format() {
        let overrides = Overrides {
            log_format: Some("yaml".to_string()),
            ..Overrides::default()
        };
        let err = Config::layered(FileConfig::default(), overrides).expect_err("bad format");
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        assert!(FileConfig::from_toml_str("verbose = true\n").is_err());
    }
}
