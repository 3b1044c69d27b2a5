//! Structured logging configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::LoggingSettings;
use crate::{Error, Result};

/// Default filter when nothing else is configured.
const DEFAULT_DIRECTIVE: &str = "warn";
/// Default filter with `--verbose`.
const VERBOSE_DIRECTIVE: &str = "debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidInput(format!("Unknown log format: {s}"))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive.
    pub directive: String,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file; stderr otherwise.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directive: DEFAULT_DIRECTIVE.to_string(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Builds logging configuration from settings, honouring `RUST_LOG`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the configured format is unknown.
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Result<Self> {
        Self::resolve(settings, verbose, std::env::var("RUST_LOG").ok())
    }

    fn resolve(
        settings: Option<&LoggingSettings>,
        verbose: bool,
        rust_log: Option<String>,
    ) -> Result<Self> {
        let level = settings.and_then(|s| s.level.clone());
        let fallback = if verbose {
            VERBOSE_DIRECTIVE
        } else {
            DEFAULT_DIRECTIVE
        };
        let directive = rust_log
            .filter(|v| !v.is_empty())
            .or(level)
            .unwrap_or_else(|| fallback.to_string());

        let format = settings
            .and_then(|s| s.format.as_deref())
            .map(str::parse::<LogFormat>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            directive,
            format,
            file: settings.and_then(|s| s.file.clone()),
        })
    }
}
