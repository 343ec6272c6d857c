//! Console appender implementation

use crate::core::{Appender, LogRecord, Result};
use std::io::{self, Write};

/// Which standard stream a [`ConsoleAppender`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStream {
    #[default]
    Stderr,
    Stdout,
}

/// Writes formatted records to stderr (default) or stdout.
///
/// Colour is the formatter's concern; see `PatternFormatter::with_colors`.
pub struct ConsoleAppender {
    stream: ConsoleStream,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }

    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, text: &str, _record: &LogRecord) -> Result<()> {
        match self.stream {
            ConsoleStream::Stderr => writeln!(io::stderr().lock(), "{}", text)?,
            ConsoleStream::Stdout => writeln!(io::stdout().lock(), "{}", text)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stderr => io::stderr().flush()?,
            ConsoleStream::Stdout => io::stdout().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stderr => "stderr",
            ConsoleStream::Stdout => "stdout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_default_is_stderr() {
        let appender = ConsoleAppender::default();
        assert_eq!(appender.stream(), ConsoleStream::Stderr);
        assert_eq!(appender.name(), "stderr");
    }

    #[test]
    fn test_append_and_flush() {
        let mut appender = ConsoleAppender::stdout();
        let record = LogRecord::new(LogLevel::Info, "t", "x");
        appender.append("console appender test line", &record).unwrap();
        appender.flush().unwrap();
        assert_eq!(appender.name(), "stdout");
    }
}
