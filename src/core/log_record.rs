//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::cell::RefCell;
use std::error::Error;
use std::panic::Location;
use std::path::Path;
use std::sync::OnceLock;

// Thread-local cache so every record on a thread reuses the same label
thread_local! {
    static THREAD_LABEL_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

static PROCESS_NAME: OnceLock<String> = OnceLock::new();

/// Thread name if the thread has one, otherwise its id
fn thread_label() -> String {
    THREAD_LABEL_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| {
                let current = std::thread::current();
                match current.name() {
                    Some(name) => name.to_string(),
                    None => format!("{:?}", current.id()),
                }
            })
            .clone()
    })
}

/// Executable stem, computed once per process
fn process_name() -> &'static str {
    PROCESS_NAME.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "main".to_string())
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    /// Dotted logger name, e.g. `pkg_a.mdl_b`
    pub name: String,
    pub file: String,
    pub line: u32,
    /// Source file stem of the call site
    pub module: String,
    /// Enclosing function, when captured by the logging macros
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    pub thread: String,
    pub process: u32,
    pub process_name: String,
    /// Error and its sources, outermost first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_chain: Option<Vec<String>>,
}

impl LogRecord {
    /// Build a record located at the caller of this function.
    #[track_caller]
    pub fn new(level: LogLevel, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::at(level, name, message, Location::caller())
    }

    pub fn at(
        level: LogLevel,
        name: impl Into<String>,
        message: impl Into<String>,
        location: &Location<'_>,
    ) -> Self {
        let file = location.file().to_string();
        let module = Path::new(&file)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
            name: name.into(),
            file,
            line: location.line(),
            module,
            function: None,
            thread: thread_label(),
            process: std::process::id(),
            process_name: process_name().to_string(),
            error_chain: None,
        }
    }

    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Attach an error and every error in its `source()` chain
    pub fn with_error(mut self, error: &(dyn Error + 'static)) -> Self {
        let mut chain = vec![error.to_string()];
        let mut source = error.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        self.error_chain = Some(chain);
        self
    }
}
