//! Timestamp formatting utilities
//!
//! Records carry local time, so the default rendering includes the UTC offset
//! (`2025-01-08 10:30:45 +0100`). Log file names use [`FILE_STAMP`].

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// strftime pattern used in log file names: `20250108103045`
pub const FILE_STAMP: &str = "%Y%m%d%H%M%S";

/// strftime pattern behind [`TimestampFormat::Human`]
pub const HUMAN_STAMP: &str = "%Y-%m-%d %H:%M:%S %z";

/// Timestamp format options for the `{asctime}` field
///
/// # Examples
///
/// ```
/// use logz::core::TimestampFormat;
///
/// // Apache log format
/// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
/// assert!(!format.is_numeric());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45 +0100`
    #[default]
    Human,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45.123456+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Any strftime-compatible format string
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::Human => datetime.format(HUMAN_STAMP).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix)
    }
}
