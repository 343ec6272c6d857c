//! Stand-ins for application modules and packages that log through a child
//! of the configured root.

use crate::core::Logger;
use crate::info;

/// A module that owns a child logger, some values and three functions
pub struct DemoModule {
    log: Logger,
    pub var_a: String,
    pub var_b: String,
    pub var_z: String,
}

impl DemoModule {
    /// Create the module's logger below `parent` and announce the load.
    pub fn load(parent: &Logger, name: &str) -> Self {
        let log = parent.child(name);
        log.info(format!("⬛ Loading {}.", log.name()));

        let greeting = |var: &str| format!("Hi! I'm {}.{}!", log.name(), var);
        let (var_a, var_b, var_z) = (greeting("var_a"), greeting("var_b"), greeting("var_z"));
        Self {
            log,
            var_a,
            var_b,
            var_z,
        }
    }

    pub fn name(&self) -> &str {
        self.log.name()
    }

    pub fn function_a(&self, value: &str) {
        info!(self.log, "⬛ {} I'm in {}.function_a!", value, self.name());
    }

    pub fn function_b(&self, value: &str) {
        info!(self.log, "⬛ {} I'm in {}.function_b!", value, self.name());
    }

    pub fn function_z(&self, value: &str) {
        info!(self.log, "⬛ {} I'm in {}.function_z!", value, self.name());
    }
}

/// Three modules loaded under a package prefix
pub struct DemoPackage {
    pub mdl_a: DemoModule,
    pub mdl_b: DemoModule,
    pub mdl_z: DemoModule,
}

impl DemoPackage {
    pub fn load(parent: &Logger, name: &str) -> Self {
        let package = parent.child(name);
        Self {
            mdl_a: DemoModule::load(&package, "mdl_a"),
            mdl_b: DemoModule::load(&package, "mdl_b"),
            mdl_z: DemoModule::load(&package, "mdl_z"),
        }
    }
}

/// Top-level modules plus three packages, loaded in declaration order
pub struct DemoTree {
    pub mdl_a: DemoModule,
    pub mdl_b: DemoModule,
    pub mdl_z: DemoModule,
    pub pkg_a: DemoPackage,
    pub pkg_b: DemoPackage,
    pub pkg_z: DemoPackage,
}

impl DemoTree {
    pub fn load(root: &Logger) -> Self {
        Self {
            mdl_a: DemoModule::load(root, "mdl_a"),
            mdl_b: DemoModule::load(root, "mdl_b"),
            mdl_z: DemoModule::load(root, "mdl_z"),
            pkg_a: DemoPackage::load(root, "pkg_a"),
            pkg_b: DemoPackage::load(root, "pkg_b"),
            pkg_z: DemoPackage::load(root, "pkg_z"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Appender, Handler, LogLevel, LogRecord, PatternFormatter, Result};
    use parking_lot::Mutex;
    use std::sync::Arc;

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

    fn root() -> (Logger, Capture) {
        let root = Logger::root();
        root.set_level(LogLevel::Debug);
        let capture = Capture::default();
        root.add_handler(
            Handler::builder(capture.clone())
                .formatter(PatternFormatter::new("{name}|{message}").unwrap())
                .build(),
        );
        (root, capture)
    }

    #[test]
    fn test_module_load_and_values() {
        let (root, capture) = root();
        let module = DemoModule::load(&root.child("pkg_b"), "mdl_z");

        assert_eq!(module.name(), "pkg_b.mdl_z");
        assert_eq!(module.var_b, "Hi! I'm pkg_b.mdl_z.var_b!");
        assert_eq!(
            *capture.0.lock(),
            vec!["pkg_b.mdl_z|⬛ Loading pkg_b.mdl_z.".to_string()]
        );
    }

    #[test]
    fn test_functions_log_through_own_logger() {
        let (root, capture) = root();
        let module = DemoModule::load(&root, "mdl_a");
        module.function_z("value");

        let lines = capture.0.lock();
        assert_eq!(lines[1], "mdl_a|⬛ value I'm in mdl_a.function_z!");
    }

    #[test]
    fn test_functions_record_their_names() {
        let root = Logger::root();
        root.set_level(LogLevel::Debug);
        let capture = Capture::default();
        root.add_handler(
            Handler::builder(capture.clone())
                .formatter(PatternFormatter::new("{funcName}").unwrap())
                .build(),
        );

        let module = DemoModule::load(&root, "mdl_b");
        module.function_a("x");
        module.function_b("x");
        module.function_z("x");

        assert_eq!(
            *capture.0.lock(),
            vec!["-", "function_a", "function_b", "function_z"]
        );
    }

    #[test]
    fn test_tree_load_order() {
        let (root, capture) = root();
        let tree = DemoTree::load(&root);

        let names: Vec<String> = capture
            .0
            .lock()
            .iter()
            .map(|line| line.split('|').next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "mdl_a", "mdl_b", "mdl_z",
                "pkg_a.mdl_a", "pkg_a.mdl_b", "pkg_a.mdl_z",
                "pkg_b.mdl_a", "pkg_b.mdl_b", "pkg_b.mdl_z",
                "pkg_z.mdl_a", "pkg_z.mdl_b", "pkg_z.mdl_z",
            ]
        );
        assert_eq!(tree.pkg_z.mdl_b.name(), "pkg_z.mdl_b");
    }
}
