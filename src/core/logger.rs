//! Logger handles and the shared handler tree

use super::{
    error::Result,
    handler::Handler,
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::cell::RefCell;
use std::error::Error;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Name of the logger returned by [`Logger::root`]
pub const ROOT_NAME: &str = "root";

thread_local! {
    // Trees this thread is dispatching into, keyed by shared-state address
    static DISPATCHING: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };
}

/// Marks a tree as busy on this thread until dropped
struct DispatchGuard(usize);

impl DispatchGuard {
    fn enter(tree: usize) -> Option<Self> {
        DISPATCHING.with(|active| {
            let mut active = active.borrow_mut();
            if active.contains(&tree) {
                None
            } else {
                active.push(tree);
                Some(DispatchGuard(tree))
            }
        })
    }
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        let _ = DISPATCHING.try_with(|active| active.borrow_mut().retain(|t| *t != self.0));
    }
}

struct Shared {
    level: RwLock<LogLevel>,
    handlers: RwLock<Vec<Handler>>,
    metrics: LoggerMetrics,
}

/// A named handle onto a tree of loggers.
///
/// Every handle derived with [`Logger::child`] shares the root's threshold and
/// handlers, so configuring the root once configures every module that logs
/// through one of its children. Cloning is cheap.
///
/// # Example
///
/// ```
/// use logz::prelude::*;
///
/// let root = Logger::root();
/// let pkg = root.child("pkg_a");
/// let module = pkg.child("mdl_b");
/// assert_eq!(module.name(), "pkg_a.mdl_b");
///
/// root.set_level(LogLevel::Warning);
/// assert!(!module.is_enabled_for(LogLevel::Info));
/// ```
#[derive(Clone)]
pub struct Logger {
    name: Arc<str>,
    shared: Arc<Shared>,
}

impl Logger {
    /// A fresh root logger: threshold `WARNING`, no handlers.
    #[must_use]
    pub fn root() -> Self {
        Self {
            name: Arc::from(ROOT_NAME),
            shared: Arc::new(Shared {
                level: RwLock::new(LogLevel::Warning),
                handlers: RwLock::new(Vec::new()),
                metrics: LoggerMetrics::new(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_root(&self) -> bool {
        &*self.name == ROOT_NAME
    }

    /// Handle for `suffix` below this logger.
    ///
    /// Children of the root are named `suffix`; deeper ones `parent.suffix`.
    #[must_use]
    pub fn child(&self, suffix: &str) -> Logger {
        let name = if self.is_root() {
            suffix.to_string()
        } else {
            format!("{}.{}", self.name, suffix)
        };
        Logger {
            name: Arc::from(name),
            shared: Arc::clone(&self.shared),
        }
    }

    /// Set the threshold for the whole tree
    pub fn set_level(&self, level: LogLevel) {
        *self.shared.level.write() = level;
    }

    pub fn level(&self) -> LogLevel {
        *self.shared.level.read()
    }

    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    pub fn add_handler(&self, handler: Handler) {
        self.shared.handlers.write().push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.shared.handlers.read().len()
    }

    /// Remove every handler, flushing each first
    pub fn clear_handlers(&self) {
        let mut handlers = self.shared.handlers.write();
        for handler in handlers.iter_mut() {
            if let Err(e) = handler.flush() {
                eprintln!("[LOGZ ERROR] Handler '{}' flush failed: {}", handler.name(), e);
            }
        }
        handlers.clear();
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.log_error(level, message, None);
    }

    /// Log with the name of the enclosing function, as the macros do
    #[track_caller]
    pub fn log_in(&self, level: LogLevel, function: &str, message: impl Into<String>) {
        self.emit(level, message, None, Some(function));
    }

    /// Log with an optional error whose source chain is appended to the output
    #[track_caller]
    pub fn log_error(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        error: Option<&(dyn Error + 'static)>,
    ) {
        self.emit(level, message, error, None);
    }

    #[track_caller]
    fn emit(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        error: Option<&(dyn Error + 'static)>,
        function: Option<&str>,
    ) {
        if !self.is_enabled_for(level) {
            self.shared.metrics.record_suppressed();
            return;
        }

        let mut record = LogRecord::new(level, &*self.name, message);
        if let Some(function) = function {
            record = record.with_function(function);
        }
        if let Some(error) = error {
            record = record.with_error(error);
        }
        self.dispatch(&record);
    }

    /// Log `error` and its causes at `ERROR` level
    #[track_caller]
    pub fn exception(&self, message: impl Into<String>, error: &(dyn Error + 'static)) {
        self.log_error(LogLevel::Error, message, Some(error));
    }

    #[track_caller]
    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[track_caller]
    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[track_caller]
    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }

    /// Hand `record` to every handler.
    ///
    /// A failing or panicking handler is reported on stderr and counted; the
    /// remaining handlers still run and the caller never sees the failure.
    /// A record logged into the same tree from inside one of its filters,
    /// formatters or appenders is dropped and counted as failed, since the
    /// handler list is locked while they run.
    fn dispatch(&self, record: &LogRecord) {
        let metrics = &self.shared.metrics;
        let Some(_guard) = DispatchGuard::enter(Arc::as_ptr(&self.shared) as usize) else {
            eprintln!(
                "[LOGZ ERROR] Dropped record logged to '{}' from inside one of its handlers",
                self.name
            );
            metrics.record_failed();
            return;
        };
        let mut handlers = self.shared.handlers.write();
        let mut delivered = false;

        for handler in handlers.iter_mut() {
            let outcome = catch_unwind(AssertUnwindSafe(|| handler.handle(record)));

            match outcome {
                Ok(Ok(emitted)) => delivered |= emitted,
                Ok(Err(e)) => {
                    eprintln!("[LOGZ ERROR] Handler '{}' failed: {}", handler.name(), e);
                    metrics.record_failed();
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGZ CRITICAL] Handler '{}' panicked: {}. \
                         Other handlers continue to function.",
                        handler.name(),
                        panic_msg
                    );
                    metrics.record_failed();
                }
            }
        }

        if delivered {
            metrics.record_emitted();
        } else {
            metrics.record_suppressed();
        }
    }

    /// Flush every handler, returning the first failure
    pub fn flush(&self) -> Result<()> {
        let mut handlers = self.shared.handlers.write();
        let mut first_error = None;
        for handler in handlers.iter_mut() {
            if let Err(e) = handler.flush() {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("handlers", &self.handler_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Appender, LoggerError, PatternFormatter};
    use parking_lot::Mutex;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<String>>>);

    impl Appender for Capture {
        fn append(&mut self, text: &str, _record: &LogRecord) -> Result<()> {
            self.0.lock().push(text.to_string());
            Ok(())
        }
        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
        fn name(&self) -> &str {
            "capture"
        }
    }

    struct Failing;

    impl Appender for Failing {
        fn append(&mut self, _text: &str, _record: &LogRecord) -> Result<()> {
            Err(LoggerError::writer("disk on fire"))
        }
        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
        fn name(&self) -> &str {
            "failing"
        }
    }

    struct Panicking;

    impl Appender for Panicking {
        fn append(&mut self, _text: &str, _record: &LogRecord) -> Result<()> {
            panic!("appender exploded");
        }
        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
        fn name(&self) -> &str {
            "panicking"
        }
    }

    fn captured_root(pattern: &str) -> (Logger, Capture) {
        let root = Logger::root();
        let capture = Capture::default();
        root.add_handler(
            Handler::builder(capture.clone())
                .formatter(PatternFormatter::new(pattern).unwrap())
                .build(),
        );
        (root, capture)
    }

    #[test]
    fn test_child_names() {
        let root = Logger::root();
        assert_eq!(root.name(), "root");
        assert_eq!(root.child("test").name(), "test");
        assert_eq!(root.child("pkg_z").child("mdl_a").name(), "pkg_z.mdl_a");
    }

    #[test]
    fn test_children_share_handlers_and_level() {
        let (root, capture) = captured_root("{name}:{message}");
        root.set_level(LogLevel::Debug);
        let child = root.child("mdl_z");

        child.debug("hello");
        child.trace("hidden");

        assert_eq!(*capture.0.lock(), vec!["mdl_z:hello".to_string()]);
        assert_eq!(child.level(), LogLevel::Debug);
        assert_eq!(root.metrics().emitted_count(), 1);
        assert_eq!(root.metrics().suppressed_count(), 1);
    }

    #[test]
    fn test_default_threshold_is_warning() {
        let (root, capture) = captured_root("{levelname}");
        root.info("nope");
        root.warning("yes");
        assert_eq!(*capture.0.lock(), vec!["WARNING".to_string()]);
    }

    #[test]
    fn test_exception_appends_chain() {
        let (root, capture) = captured_root("{levelname} {message}");
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "broken pipe");
        root.exception("write failed", &io_err);

        assert_eq!(
            *capture.0.lock(),
            vec!["ERROR write failed\nError: broken pipe".to_string()]
        );
    }

    #[test]
    fn test_call_site_is_captured() {
        let (root, capture) = captured_root("{module}:{lineno}");
        let line = line!() + 1;
        root.error("where am I");
        assert_eq!(*capture.0.lock(), vec![format!("logger:{}", line)]);
    }

    #[test]
    fn test_failing_handlers_are_isolated() {
        let (root, capture) = captured_root("{message}");
        root.add_handler(Handler::builder(Failing).build());
        root.add_handler(Handler::builder(Panicking).build());

        root.error("still delivered");

        assert_eq!(*capture.0.lock(), vec!["still delivered".to_string()]);
        assert_eq!(root.metrics().failed_count(), 2);
        assert_eq!(root.metrics().emitted_count(), 1);
    }

    #[test]
    fn test_logging_from_a_filter_is_dropped() {
        let (root, capture) = captured_root("{message}");
        root.set_level(LogLevel::Info);
        let nested = root.child("filter");
        root.add_handler(
            Handler::builder(Capture::default())
                .filter(move |_record: &LogRecord| {
                    nested.info("from inside");
                    true
                })
                .build(),
        );

        root.info("outer");

        assert_eq!(*capture.0.lock(), vec!["outer".to_string()]);
        assert_eq!(root.metrics().failed_count(), 1);
        assert_eq!(root.metrics().emitted_count(), 1);

        // the tree is usable again afterwards
        root.clear_handlers();
        root.info("after");
        assert_eq!(root.metrics().suppressed_count(), 1);
    }

    #[test]
    fn test_flush_reaches_every_handler() {
        struct Flushes(Arc<Mutex<u32>>, bool);

        impl Appender for Flushes {
            fn append(&mut self, _text: &str, _record: &LogRecord) -> Result<()> {
                Ok(())
            }
            fn flush(&mut self) -> Result<()> {
                *self.0.lock() += 1;
                if self.1 {
                    Err(LoggerError::writer("flush refused"))
                } else {
                    Ok(())
                }
            }
            fn name(&self) -> &str {
                "flushes"
            }
        }

        let count = Arc::new(Mutex::new(0));
        let root = Logger::root();
        root.add_handler(Handler::builder(Flushes(Arc::clone(&count), true)).build());
        root.add_handler(Handler::builder(Flushes(Arc::clone(&count), false)).build());

        let err = root.flush().unwrap_err();
        assert!(err.to_string().contains("flush refused"));
        assert_eq!(*count.lock(), 2);
    }

    #[test]
    fn test_clear_handlers() {
        let (root, _capture) = captured_root("{message}");
        assert_eq!(root.handler_count(), 1);
        root.clear_handlers();
        assert_eq!(root.handler_count(), 0);
        root.critical("nobody listens");
        assert_eq!(root.metrics().suppressed_count(), 1);
    }
}
