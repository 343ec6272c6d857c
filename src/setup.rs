//! Two-handler logging setup and per-run log files
//!
//! [`setup`] wires a root logger with two handlers on one destination:
//!
//! | handler | level            | filter                | layout                    |
//! |---------|------------------|-----------------------|---------------------------|
//! | `fyi`   | any              | `<= fyi_max_level`    | one line                  |
//! | `alert` | `alert_level` up | none                  | message, then origin info |
//!
//! The root threshold (`config.level`) is the only lower gate.
//!
//! [`init_logfile`] picks a file named after the calling program and the
//! start time, logs a startup banner plus the environment, and returns a
//! [`LogSession`] that writes the closing banner when it ends.

use crate::appenders::{ConsoleAppender, FileAppender};
use crate::config::{LogzConfig, RecordFormat, Target};
use crate::core::{
    Appender, Formatter, Handler, JsonFormatter, LogLevel, Logger, LoggerError, MaxLevelFilter,
    PatternFormatter, Result, FILE_STAMP,
};
use chrono::{DateTime, Local};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

pub const STARTING_BANNER: &str = "========== STARTING ==========";
pub const ENDING_BANNER: &str = "========== ENDING ==========";

/// Environment keys containing any of these have their values masked
const SENSITIVE_KEY_PARTS: [&str; 6] = ["SECRET", "TOKEN", "PASSWORD", "PASSWD", "KEY", "CREDENTIAL"];
const MASK: &str = "********";

/// Build a root logger configured by `config`.
///
/// # Errors
///
/// Fails if the configuration is inconsistent or the log file cannot be
/// opened.
pub fn setup(config: &LogzConfig) -> Result<Logger> {
    config.validate()?;

    let root = Logger::root();
    root.set_level(config.level);

    match &config.target {
        Target::Stderr => {
            let colors = config.colors && std::io::stderr().is_terminal();
            root.add_handler(fyi_handler(config, ConsoleAppender::new(), colors));
            root.add_handler(alert_handler(config, ConsoleAppender::new(), colors));
        }
        Target::File(path) => {
            root.add_handler(fyi_handler(config, FileAppender::new(path)?, false));
            root.add_handler(alert_handler(config, FileAppender::new(path)?, false));
        }
    }

    Ok(root)
}

fn formatter(config: &LogzConfig, pattern: PatternFormatter, colors: bool) -> Box<dyn Formatter> {
    match config.format {
        RecordFormat::Text => Box::new(
            pattern
                .with_timestamp_format(config.timestamp.clone())
                .with_colors(colors),
        ),
        RecordFormat::Json => Box::new(JsonFormatter),
    }
}

fn fyi_handler<A: Appender + 'static>(config: &LogzConfig, appender: A, colors: bool) -> Handler {
    Handler::builder(appender)
        .name("fyi")
        .level(LogLevel::Trace)
        .filter(MaxLevelFilter::new(config.fyi_max_level))
        .boxed_formatter(formatter(config, PatternFormatter::fyi(), colors))
        .build()
}

fn alert_handler<A: Appender + 'static>(config: &LogzConfig, appender: A, colors: bool) -> Handler {
    Handler::builder(appender)
        .name("alert")
        .level(config.alert_level)
        .boxed_formatter(formatter(config, PatternFormatter::alert(), colors))
        .build()
}

/// Basename of `source` up to its first `.`: `src/bin/demo.rs` -> `demo`
pub fn source_stem(source: &str) -> String {
    let base = source.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(source);
    base.split('.').next().unwrap_or(base).to_string()
}

/// `dir/<stem>-<YYYYmmddHHMMSS>.log`
pub fn log_file_path(dir: impl AsRef<Path>, source: &str, started: &DateTime<Local>) -> PathBuf {
    dir.as_ref().join(format!(
        "{}-{}.log",
        source_stem(source),
        started.format(FILE_STAMP)
    ))
}

/// Start a per-run log file under `logs_dir` for the program at `source`.
///
/// The directory is created when missing. `config.target` is replaced by the
/// generated file path.
///
/// # Example
///
/// ```no_run
/// use logz::{init_logfile, LogzConfig};
///
/// let mut session = init_logfile("logs", file!(), LogzConfig::default()).unwrap();
/// session.logger().child("main").info("⬛ Trying Actions…");
/// session.term();
/// ```
pub fn init_logfile(
    logs_dir: impl AsRef<Path>,
    source: &str,
    config: LogzConfig,
) -> Result<LogSession> {
    let logs_dir = logs_dir.as_ref();
    fs::create_dir_all(logs_dir).map_err(|e| {
        LoggerError::io_operation("creating log directory", logs_dir.display().to_string(), e)
    })?;

    let path = log_file_path(logs_dir, source, &Local::now());
    let logger = setup(&config.with_file(&path))?;

    logger.info(format!(
        "\n{}\nFILE: {}\n{}",
        platform_summary(),
        source,
        STARTING_BANNER
    ));
    log_environment(&logger);

    Ok(LogSession {
        logger,
        path,
        source: source.to_string(),
        ended: false,
    })
}

fn platform_summary() -> String {
    format!(
        "OPERATING SYSTEM: {} ({}, {})\nLOGZ VERSION: {}",
        std::env::consts::OS,
        std::env::consts::ARCH,
        std::env::consts::FAMILY,
        env!("CARGO_PKG_VERSION")
    )
}

/// Log the starting banner for `source` without platform details
pub fn log_start(logger: &Logger, source: &str) {
    logger.info(format!("\nFILE: {}\n{}", source, STARTING_BANNER));
}

pub fn log_end(logger: &Logger, source: &str) {
    logger.info(format!("\n{}\nFILE: {}", ENDING_BANNER, source));
}

/// Log every environment variable, sorted by key, at DEBUG.
pub fn log_environment(logger: &Logger) {
    if !logger.is_enabled_for(LogLevel::Debug) {
        return;
    }

    let mut vars: Vec<(String, String)> = std::env::vars_os()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        })
        .collect();
    vars.sort();

    let mut message = String::from("ENVIRONMENT:");
    for (key, value) in &vars {
        message.push_str("\n  ");
        message.push_str(key);
        message.push('=');
        message.push_str(&masked_value(key, value));
    }
    logger.debug(message);
}

fn masked_value<'a>(key: &str, value: &'a str) -> std::borrow::Cow<'a, str> {
    let upper = key.to_uppercase();
    if SENSITIVE_KEY_PARTS.iter().any(|part| upper.contains(part)) {
        MASK.into()
    } else {
        value.into()
    }
}

/// A running per-run log file.
///
/// Ending the session writes the closing banner exactly once, either through
/// [`LogSession::term`] or when the session is dropped.
pub struct LogSession {
    logger: Logger,
    path: PathBuf,
    source: String,
    ended: bool,
}

impl LogSession {
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Write the closing banner and flush. Later calls do nothing.
    pub fn term(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;
        log_end(&self.logger, &self.source);
        if let Err(e) = self.logger.flush() {
            eprintln!("[LOGZ ERROR] Failed to flush '{}': {}", self.path.display(), e);
        }
    }
}

impl Drop for LogSession {
    fn drop(&mut self) {
        self.term();
    }
}
