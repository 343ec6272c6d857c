//! Setup configuration, loadable from JSON
//!
//! ```json
//! {
//!   "level": "INFO",
//!   "target": { "file": "logs/app.log" },
//!   "timestamp": "Iso8601",
//!   "colors": false
//! }
//! ```
//!
//! Every field is optional; missing ones take the values of
//! [`LogzConfig::default`].

use crate::core::{LogLevel, LoggerError, Result, TimestampFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where both handlers write
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Stderr,
    File(PathBuf),
}

/// Rendering used by both handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// The fyi/alert text layouts
    #[default]
    Text,
    /// One JSON object per record
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogzConfig {
    /// Threshold of the root logger
    pub level: LogLevel,
    /// Highest level the routine ("fyi") handler accepts
    pub fyi_max_level: LogLevel,
    /// Lowest level the alert handler accepts
    pub alert_level: LogLevel,
    pub target: Target,
    pub timestamp: TimestampFormat,
    /// Colour level names on the console
    pub colors: bool,
    pub format: RecordFormat,
}

impl Default for LogzConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            fyi_max_level: LogLevel::Info,
            alert_level: LogLevel::Warning,
            target: Target::Stderr,
            timestamp: TimestampFormat::Human,
            colors: true,
            format: RecordFormat::Text,
        }
    }
}

impl LogzConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LogzConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| LoggerError::io_operation("reading config", path.display().to_string(), e))?;
        Self::from_json_str(&json)
    }

    /// The fyi band must end below where alerts begin, otherwise a record
    /// would be written twice.
    pub fn validate(&self) -> Result<()> {
        if self.fyi_max_level >= self.alert_level {
            return Err(LoggerError::config(
                "LogzConfig",
                format!(
                    "fyi_max_level ({}) must be below alert_level ({})",
                    self.fyi_max_level, self.alert_level
                ),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_target(Target::File(path.into()))
    }

    #[must_use]
    pub fn with_timestamp(mut self, format: TimestampFormat) -> Self {
        self.timestamp = format;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }
}
