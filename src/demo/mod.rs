//! Demonstration modules and packages that log through one configured root

pub mod module;

pub use module::{DemoModule, DemoPackage, DemoTree};
pub use self_test::{checked_divide, run_self_test, SelfTestOptions, SelfTestOutcome};

use crate::core::{LogLevel, Logger};

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("attempted to divide {dividend} by zero")]
    DivisionByZero { dividend: i64 },

    #[error("step '{step}' failed")]
    Step {
        step: String,
        #[source]
        source: Box<DemoError>,
    },

    #[error("{0}")]
    Unexpected(String),
}

/// Exercise every level from `log`, then call across the demo tree so each
/// module logs under its own name.
pub fn run_tour(log: &Logger, tree: &DemoTree) {
    log.info("⬛ Trying Actions…");

    log.info("⬛ Message");
    log.trace("⚫ Message.");
    log.debug("⚪ Message.");
    log.warning("🟧 Message.");
    log.error("🟥 Message.");
    log.critical("🟥🟥 Message.");

    if let Err(err) = checked_divide(1, 0) {
        log.exception("🟥 Specified Exception Message.", &err);

        let wrapped = DemoError::Step {
            step: "tour".to_string(),
            source: Box::new(err),
        };
        log.log_error(
            LogLevel::Error,
            "🟥🟥 Unspecified Exception Message.",
            Some(&wrapped),
        );
    }

    tree.pkg_z.mdl_a.function_b(&tree.pkg_z.mdl_z.var_z);
    tree.pkg_a.mdl_z.function_a(&tree.pkg_b.mdl_a.var_b);
    tree.pkg_b.mdl_a.function_z(&tree.pkg_z.mdl_z.var_z);
    tree.pkg_a.mdl_z.function_a(&tree.mdl_z.var_z);
    tree.pkg_a.mdl_b.function_a(&tree.pkg_z.mdl_a.var_a);
    tree.mdl_z.function_b(&tree.mdl_a.var_b);
    tree.mdl_z.function_z(&tree.pkg_a.mdl_b.var_b);

    log.info("🟩 …Completed Actions.");
}
