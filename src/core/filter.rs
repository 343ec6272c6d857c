//! Record filters attached to handlers

use super::log_level::LogLevel;
use super::log_record::LogRecord;

/// Predicate deciding whether a handler sees a record.
///
/// Records a filter logs into its own logger tree are dropped, since that
/// tree's handlers are busy with the record being filtered.
pub trait Filter: Send + Sync {
    fn accept(&self, record: &LogRecord) -> bool;
}

impl<F> Filter for F
where
    F: Fn(&LogRecord) -> bool + Send + Sync,
{
    fn accept(&self, record: &LogRecord) -> bool {
        self(record)
    }
}

/// Accepts records at or below a ceiling level.
///
/// Paired with a handler minimum level this gives a level band, e.g.
/// DEBUG..=INFO for routine messages while a second handler takes WARNING up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLevelFilter {
    ceiling: LogLevel,
}

impl MaxLevelFilter {
    pub fn new(ceiling: LogLevel) -> Self {
        Self { ceiling }
    }
}

impl Filter for MaxLevelFilter {
    fn accept(&self, record: &LogRecord) -> bool {
        record.level <= self.ceiling
    }
}

/// Accepts records from one branch of the logger tree.
///
/// `NameFilter::new("pkg_a")` passes `pkg_a` and `pkg_a.mdl_b` but not
/// `pkg_ab`. An empty prefix passes everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    prefix: String,
}

impl NameFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Filter for NameFilter {
    fn accept(&self, record: &LogRecord) -> bool {
        if self.prefix.is_empty() {
            return true;
        }
        match record.name.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}
