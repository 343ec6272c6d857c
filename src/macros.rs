//! Logging macros with `format!`-style arguments.
//!
//! ```
//! use logz::prelude::*;
//! use logz::info;
//!
//! let logger = Logger::root().child("server");
//! logger.set_level(LogLevel::Info);
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Name of the enclosing function, without its module path.
///
/// ```
/// fn load_settings() -> &'static str {
///     logz::function_name!()
/// }
/// assert_eq!(load_settings(), "load_settings");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            Some(pos) => &name[pos + 2..],
            None => name,
        }
    }};
}

/// Log a message at an explicit level, recording the enclosing function.
///
/// ```
/// # use logz::prelude::*;
/// # let logger = Logger::root();
/// use logz::log;
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_in($level, $crate::function_name!(), format!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// ```
/// # use logz::prelude::*;
/// # let logger = Logger::root();
/// use logz::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};

    #[test]
    fn test_macros_respect_threshold() {
        let logger = Logger::root().child("macros");
        logger.set_level(LogLevel::Warning);

        trace!(logger, "Value: {}", 10);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warning!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        critical!(logger, "Failure: {}", "system");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);

        // No handlers: everything counts as suppressed, but only the four
        // below WARNING stop at the threshold.
        assert_eq!(logger.metrics().suppressed_count(), 7);
        assert_eq!(logger.metrics().emitted_count(), 0);
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name!(), "test_function_name");
        let from_closure = || function_name!();
        assert_eq!(from_closure(), "test_function_name");
    }
}
