//! Handlers: level gate, filters, formatter and destination in one unit

use super::{
    appender::Appender,
    error::Result,
    filter::Filter,
    formatter::{Formatter, PatternFormatter},
    log_level::LogLevel,
    log_record::LogRecord,
};

/// Routes records that pass its level and filters to an appender.
pub struct Handler {
    name: String,
    level: LogLevel,
    filters: Vec<Box<dyn Filter>>,
    formatter: Box<dyn Formatter>,
    appender: Box<dyn Appender>,
}

impl Handler {
    /// Start building a handler around a destination.
    ///
    /// # Example
    ///
    /// ```
    /// use logz::prelude::*;
    ///
    /// let handler = Handler::builder(ConsoleAppender::new())
    ///     .name("fyi")
    ///     .level(LogLevel::Debug)
    ///     .filter(MaxLevelFilter::new(LogLevel::Info))
    ///     .formatter(PatternFormatter::fyi())
    ///     .build();
    /// assert_eq!(handler.name(), "fyi");
    /// ```
    pub fn builder<A: Appender + 'static>(appender: A) -> HandlerBuilder {
        HandlerBuilder::new(Box::new(appender))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn add_filter<F: Filter + 'static>(&mut self, filter: F) {
        self.filters.push(Box::new(filter));
    }

    /// Whether this handler would emit `record`
    pub fn accepts(&self, record: &LogRecord) -> bool {
        record.level >= self.level && self.filters.iter().all(|f| f.accept(record))
    }

    /// Format and emit `record`. Returns `Ok(false)` when it was filtered out.
    pub fn handle(&mut self, record: &LogRecord) -> Result<bool> {
        if !self.accepts(record) {
            return Ok(false);
        }
        let text = self.formatter.format(record)?;
        self.appender.append(&text, record)?;
        Ok(true)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.appender.flush()
    }
}

pub struct HandlerBuilder {
    name: Option<String>,
    level: LogLevel,
    filters: Vec<Box<dyn Filter>>,
    formatter: Box<dyn Formatter>,
    appender: Box<dyn Appender>,
}

impl HandlerBuilder {
    fn new(appender: Box<dyn Appender>) -> Self {
        Self {
            name: None,
            level: LogLevel::Trace,
            filters: Vec::new(),
            formatter: Box::new(PatternFormatter::fyi()),
            appender,
        }
    }

    /// Name shown in failure reports; defaults to the appender's name
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn build(self) -> Handler {
        let name = self
            .name
            .unwrap_or_else(|| self.appender.name().to_string());
        Handler {
            name,
            level: self.level,
            filters: self.filters,
            formatter: self.formatter,
            appender: self.appender,
        }
    }
}
