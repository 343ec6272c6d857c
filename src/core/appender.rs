//! Appender trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// Destination for already-formatted records.
///
/// The record is passed along with its rendered text so a destination can
/// route on level without re-formatting.
pub trait Appender: Send + Sync {
    fn append(&mut self, text: &str, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
