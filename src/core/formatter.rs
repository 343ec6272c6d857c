//! Record formatters
//!
//! - [`PatternFormatter`]: text rendered from a `{field}` template
//! - [`JsonFormatter`]: one JSON object per record

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;

/// Renders a record as text
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> Result<String>;
}

/// Routine messages: one line, preceded by a blank line.
pub const FYI_PATTERN: &str = "\n{asctime} - {name} - {levelname}: {message}";

/// Warnings and above: message first, then where it came from.
pub const ALERT_PATTERN: &str = "\n{message}\n\
{asctime} - {name} - {levelname}\n\
{thread} → {processName}\n\
{pathname}\n\
→ {module} → {funcName} @ {lineno}";

/// Shown for `{funcName}` when the record carries no function
const UNKNOWN_FUNCTION: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Asctime,
    Name,
    LevelName,
    Message,
    Thread,
    Process,
    ProcessName,
    PathName,
    Module,
    FuncName,
    LineNo,
}

impl Field {
    fn parse(name: &str) -> Option<Self> {
        Some(match name {
            "asctime" => Field::Asctime,
            "name" => Field::Name,
            "levelname" => Field::LevelName,
            "message" => Field::Message,
            "thread" => Field::Thread,
            "process" => Field::Process,
            "processName" => Field::ProcessName,
            "pathname" => Field::PathName,
            "module" => Field::Module,
            "funcName" => Field::FuncName,
            "lineno" => Field::LineNo,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Field(Field),
}

fn parse_pattern(pattern: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => return Err(LoggerError::pattern(pattern, "unclosed '{'")),
                    }
                }
                let field = Field::parse(&name).ok_or_else(|| {
                    LoggerError::pattern(pattern, format!("unknown field '{}'", name))
                })?;
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Field(field));
            }
            '}' => return Err(LoggerError::pattern(pattern, "unmatched '}'")),
            c => literal.push(c),
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    Ok(tokens)
}

/// Text formatter driven by a `{field}` template.
///
/// Fields: `asctime name levelname message thread process processName
/// pathname module funcName lineno`. Use `{{` and `}}` for literal braces.
/// `funcName` is only known for records logged through the crate's macros.
///
/// # Example
///
/// ```
/// use logz::core::{LogLevel, LogRecord, Formatter, PatternFormatter};
///
/// let formatter = PatternFormatter::new("{levelname}|{name}|{message}").unwrap();
/// let record = LogRecord::new(LogLevel::Info, "app", "ready");
/// assert_eq!(formatter.format(&record).unwrap(), "INFO|app|ready");
/// ```
#[derive(Debug, Clone)]
pub struct PatternFormatter {
    tokens: Vec<Token>,
    timestamp_format: TimestampFormat,
    use_colors: bool,
}

impl PatternFormatter {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            tokens: parse_pattern(pattern)?,
            timestamp_format: TimestampFormat::default(),
            use_colors: false,
        })
    }

    pub fn fyi() -> Self {
        Self::from_builtin(FYI_PATTERN)
    }

    pub fn alert() -> Self {
        Self::from_builtin(ALERT_PATTERN)
    }

    fn from_builtin(pattern: &str) -> Self {
        Self {
            tokens: parse_pattern(pattern).unwrap_or_else(|_| vec![Token::Field(Field::Message)]),
            timestamp_format: TimestampFormat::default(),
            use_colors: false,
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Colour `{levelname}` by level. Has no effect without the `console` feature.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn level_name(&self, record: &LogRecord) -> String {
        if self.use_colors {
            return colored_level(record.level);
        }
        record.level.to_str().to_string()
    }
}

#[cfg(feature = "console")]
fn colored_level(level: LogLevel) -> String {
    use colored::Colorize;
    level.to_str().color(level.color_code()).to_string()
}

#[cfg(not(feature = "console"))]
fn colored_level(level: LogLevel) -> String {
    level.to_str().to_string()
}

impl Formatter for PatternFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let mut out = String::with_capacity(128);

        for token in &self.tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Field(field) => match field {
                    Field::Asctime => {
                        out.push_str(&self.timestamp_format.format(&record.timestamp))
                    }
                    Field::Name => out.push_str(&record.name),
                    Field::LevelName => out.push_str(&self.level_name(record)),
                    Field::Message => out.push_str(&record.message),
                    Field::Thread => out.push_str(&record.thread),
                    Field::Process => out.push_str(&record.process.to_string()),
                    Field::ProcessName => out.push_str(&record.process_name),
                    Field::PathName => out.push_str(&record.file),
                    Field::Module => out.push_str(&record.module),
                    Field::FuncName => {
                        out.push_str(record.function.as_deref().unwrap_or(UNKNOWN_FUNCTION))
                    }
                    Field::LineNo => out.push_str(&record.line.to_string()),
                },
            }
        }

        if let Some(chain) = &record.error_chain {
            if let Some((head, causes)) = chain.split_first() {
                out.push_str("\nError: ");
                out.push_str(head);
                if !causes.is_empty() {
                    out.push_str("\nCaused by:");
                    for (idx, cause) in causes.iter().enumerate() {
                        out.push_str(&format!("\n    {}: {}", idx, cause));
                    }
                }
            }
        }

        Ok(out)
    }
}

/// One JSON object per record, newline-free
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        Ok(serde_json::to_string(record)?)
    }
}
