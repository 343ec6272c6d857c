//! Property-based tests for logz using proptest

use logz::prelude::*;
use parking_lot::Mutex;
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Critical),
    ]
}

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<LogLevel>>>);

impl Appender for Capture {
    fn append(&mut self, _text: &str, record: &LogRecord) -> Result<()> {
        self.0.lock().push(record.level);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "capture"
    }
}

// ============================================================================
// LogLevel
// ============================================================================

proptest! {
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        let lower: LogLevel = level.to_str().to_lowercase().parse().unwrap();
        prop_assert_eq!(level, lower);
    }

    #[test]
    fn test_log_level_ordering_matches_discriminant(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
        prop_assert_eq!(a < b, (a as u8) < (b as u8));
    }

    #[test]
    fn test_unknown_level_names_rejected(name in "[a-z]{1,12}") {
        let known = ["trace", "debug", "info", "warning", "warn", "error", "critical", "fatal"];
        prop_assume!(!known.contains(&name.as_str()));
        prop_assert!(name.parse::<LogLevel>().is_err());
    }
}

// ============================================================================
// Threshold and level bands
// ============================================================================

proptest! {
    /// A record is emitted exactly when its level is at or above the threshold
    #[test]
    fn test_threshold_gate(threshold in any_level(), levels in prop::collection::vec(any_level(), 0..40)) {
        let root = Logger::root();
        root.set_level(threshold);
        let capture = Capture::default();
        root.add_handler(Handler::builder(capture.clone()).build());

        let log = root.child("prop");
        for level in &levels {
            log.log(*level, "m");
        }

        let expected: Vec<LogLevel> = levels.iter().copied().filter(|l| *l >= threshold).collect();
        prop_assert_eq!(&*capture.0.lock(), &expected);
        prop_assert_eq!(root.metrics().emitted_count(), expected.len() as u64);
        prop_assert_eq!(
            root.metrics().suppressed_count(),
            (levels.len() - expected.len()) as u64
        );
    }

    /// The fyi band and the alert band partition every level they cover
    #[test]
    fn test_bands_partition(ceiling in any_level(), level in any_level()) {
        prop_assume!(ceiling < LogLevel::Critical);
        let alert_from = LogLevel::ALL[ceiling as usize + 1];

        let fyi = Handler::builder(Capture::default())
            .level(LogLevel::Trace)
            .filter(MaxLevelFilter::new(ceiling))
            .build();
        let alert = Handler::builder(Capture::default()).level(alert_from).build();

        let record = LogRecord::new(level, "prop", "m");
        prop_assert!(fyi.accepts(&record) != alert.accepts(&record));
    }
}

// ============================================================================
// Names and patterns
// ============================================================================

proptest! {
    #[test]
    fn test_child_names_join_with_dots(parts in prop::collection::vec("[a-z_]{1,8}", 1..5)) {
        let mut logger = Logger::root();
        for part in &parts {
            logger = logger.child(part);
        }
        prop_assert_eq!(logger.name(), parts.join("."));
    }

    #[test]
    fn test_name_filter_accepts_descendants(
        prefix in "[a-z]{1,6}",
        rest in prop::collection::vec("[a-z]{1,6}", 0..3),
    ) {
        let mut name = prefix.clone();
        for part in &rest {
            name.push('.');
            name.push_str(part);
        }
        let record = LogRecord::new(LogLevel::Info, name, "m");
        prop_assert!(NameFilter::new(prefix).accept(&record));
    }

    /// Literal text without braces is reproduced verbatim
    #[test]
    fn test_pattern_literals_verbatim(text in "[^{}]{0,40}") {
        let formatter = PatternFormatter::new(&text).unwrap();
        let record = LogRecord::new(LogLevel::Info, "prop", "m");
        prop_assert_eq!(formatter.format(&record).unwrap(), text);
    }
}
