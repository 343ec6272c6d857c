//! `logz`: run the sample messages through the two-handler setup.

use anyhow::{Context, Result};
use clap::Parser;
use logz::demo::{run_self_test, SelfTestOptions, SelfTestOutcome};
use logz::setup::{log_end, log_start};
use logz::{setup, LogLevel, LogzConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logz", version)]
#[command(
    about = "Initialize logging to file or stderr for messaging (e.g. info, debug, warning, error, critical)."
)]
struct Args {
    #[arg(
        long = "tes",
        visible_alias = "test-exception-specified",
        help = "Test specified exception handling (division by zero)"
    )]
    test_exception_specified: bool,

    #[arg(
        long = "teu",
        visible_alias = "test-exception-unspecified",
        help = "Test unspecified exception handling"
    )]
    test_exception_unspecified: bool,

    #[arg(
        long = "lfpn",
        visible_alias = "logfile-path-name",
        value_name = "PATH",
        help = "Log file path and name (e.g. logs/execution.log); stderr when omitted"
    )]
    logfile_path_name: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", help = "Lowest level logged (TRACE..CRITICAL)")]
    level: Option<LogLevel>,

    #[arg(long, value_name = "JSON", help = "Load setup options from a JSON file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Do not colour level names on stderr")]
    no_color: bool,
}

impl Args {
    fn logz_config(&self) -> Result<LogzConfig> {
        let mut config = match &self.config {
            Some(path) => LogzConfig::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => LogzConfig::default(),
        };
        if let Some(level) = self.level {
            config = config.with_level(level);
        }
        if let Some(path) = &self.logfile_path_name {
            config = config.with_file(path);
        }
        if self.no_color {
            config = config.with_colors(false);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let root = setup(&args.logz_config()?).context("failed to initialize logging")?;
    let source = file!();

    log_start(&root, source);

    println!("⬛ Trying actions.");
    let outcome = run_self_test(
        &root,
        SelfTestOptions {
            specified_failure: args.test_exception_specified,
            unspecified_failure: args.test_exception_unspecified,
        },
    );

    if outcome == SelfTestOutcome::Completed {
        match &args.logfile_path_name {
            Some(path) => println!(
                "\n\n🟩 SUCCESSFUL EXECUTION: See output in {}.",
                path.display()
            ),
            None => println!("\n\n🟩 SUCCESSFUL EXECUTION: See output displayed above."),
        }
    }

    log_end(&root, source);
    root.flush().context("failed to flush log output")?;
    Ok(())
}
