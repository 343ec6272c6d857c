//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod handler;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use filter::{Filter, MaxLevelFilter, NameFilter};
pub use formatter::{Formatter, JsonFormatter, PatternFormatter, ALERT_PATTERN, FYI_PATTERN};
pub use handler::{Handler, HandlerBuilder};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, ROOT_NAME};
pub use metrics::LoggerMetrics;
pub use timestamp::{TimestampFormat, FILE_STAMP, HUMAN_STAMP};
