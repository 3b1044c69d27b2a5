//! Configuration management.
//!
//! Values are resolved from, lowest to highest precedence: built-in defaults,
//! a TOML config file, environment variables (a `.env` file is honoured), and
//! finally CLI flags applied by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::io::{JsonStyle, ReaderOptions};
use crate::{Error, Result};

/// Prefix of every environment variable the analyser reads.
pub const ENV_PREFIX: &str = "CENSUS_ANALYSER_";

/// Main configuration for the analyser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalyserConfig {
    /// Default census data file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub census_path: Option<PathBuf>,
    /// Default state code data file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code_path: Option<PathBuf>,
    /// Directory the named projections persist their JSON to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Layout of rendered JSON.
    pub json_style: JsonStyle,
    /// Reject state codes that are not two uppercase letters.
    pub strict_state_codes: bool,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `census_analyser=debug`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Output format: `pretty` or `json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Log file path; logs go to stderr when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Census data file.
    pub census_path: Option<String>,
    /// State code data file.
    pub state_code_path: Option<String>,
    /// Output directory.
    pub output_dir: Option<String>,
    /// JSON style name.
    pub json_style: Option<String>,
    /// Strict state code checks.
    pub strict_state_codes: Option<bool>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

impl AnalyserConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for [`ConfigFile`] or a
    /// value is out of range.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| Error::OperationFailed {
            operation: "parse_config_file".to_string(),
            cause: e.to_string(),
        })?;
        Self::from_config_file(file)
    }

    /// Loads configuration from the default location.
    ///
    /// Checks `<platform config dir>/census-analyser/config.toml`. Returns
    /// default configuration if no config file is found or it cannot be read.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
            Self::default()
        })
    }

    /// Returns the default config file location, if the platform has one.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "census-analyser")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from `path` (or the default location) and applies
    /// environment overrides, reading a `.env` file first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be loaded or an
    /// environment value is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        // A missing .env file is normal
        let _ = dotenvy::dotenv();

        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::load_default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies `CENSUS_ANALYSER_*` overrides obtained from `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if a value cannot be parsed.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}")).filter(|v| !v.is_empty());

        if let Some(v) = var("CENSUS_PATH") {
            self.census_path = Some(PathBuf::from(v));
        }
        if let Some(v) = var("STATE_CODE_PATH") {
            self.state_code_path = Some(PathBuf::from(v));
        }
        if let Some(v) = var("OUTPUT_DIR") {
            self.output_dir = Some(PathBuf::from(v));
        }
        if let Some(v) = var("JSON_STYLE") {
            self.json_style = v.parse()?;
        }
        if let Some(v) = var("STRICT_STATE_CODES") {
            self.strict_state_codes = parse_bool(&v)?;
        }
        if let Some(v) = var("LOG") {
            self.logging.level = Some(v);
        }
        if let Some(v) = var("LOG_FORMAT") {
            self.logging.format = Some(v);
        }
        if let Some(v) = var("LOG_FILE") {
            self.logging.file = Some(PathBuf::from(v));
        }
        Ok(())
    }

    /// Converts a `ConfigFile` to `AnalyserConfig`.
    fn from_config_file(file: ConfigFile) -> Result<Self> {
        let mut config = Self::default();

        config.census_path = file.census_path.map(PathBuf::from);
        config.state_code_path = file.state_code_path.map(PathBuf::from);
        config.output_dir = file.output_dir.map(PathBuf::from);
        if let Some(style) = file.json_style {
            config.json_style = style.parse()?;
        }
        if let Some(strict) = file.strict_state_codes {
            config.strict_state_codes = strict;
        }
        if let Some(logging) = file.logging {
            config.logging = logging;
        }

        Ok(config)
    }

    /// Returns the reader options implied by this configuration.
    #[must_use]
    pub fn reader_options(&self) -> ReaderOptions {
        ReaderOptions::default().with_strict_state_codes(self.strict_state_codes)
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Sets the JSON style.
    #[must_use]
    pub const fn with_json_style(mut self, style: JsonStyle) -> Self {
        self.json_style = style;
        self
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidInput(format!("Expected a boolean, found: {value}"))),
    }
}
