//! # logz
//!
//! Logging set up once at the root and used from every module.
//!
//! - **Two handlers, one destination**: routine messages as single lines,
//!   warnings and above with where they came from
//! - **Filters and formatters** that can be recombined into other setups
//! - **Per-run log files** named after the program and its start time
//! - **Logger tree**: modules log through named children of the root
//!
//! ```no_run
//! use logz::prelude::*;
//!
//! let root = setup(&LogzConfig::default()).unwrap();
//! let log = root.child("main");
//! log.debug("⚪ shown on the routine handler");
//! log.warning("🟧 shown on the alert handler");
//! ```

pub mod appenders;
pub mod config;
pub mod core;
pub mod demo;
pub mod macros;
pub mod setup;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::config::{LogzConfig, RecordFormat, Target};
    pub use crate::core::{
        Appender, Filter, Formatter, Handler, JsonFormatter, LogLevel, LogRecord, Logger,
        LoggerError, LoggerMetrics, MaxLevelFilter, NameFilter, PatternFormatter, Result,
        TimestampFormat,
    };
    pub use crate::setup::{init_logfile, setup, LogSession};
}

pub use appenders::{ConsoleAppender, ConsoleStream, FileAppender};
pub use config::{LogzConfig, RecordFormat, Target};
pub use core::{
    Appender, Filter, Formatter, Handler, HandlerBuilder, JsonFormatter, LogLevel, LogRecord,
    Logger, LoggerError, LoggerMetrics, MaxLevelFilter, NameFilter, PatternFormatter, Result,
    TimestampFormat,
};
pub use setup::{init_logfile, log_file_path, setup, LogSession};
