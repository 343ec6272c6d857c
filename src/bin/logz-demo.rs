//! `logz-demo`: log from a tree of modules and packages into a per-run file.

use anyhow::{Context, Result};
use clap::Parser;
use logz::demo::{run_tour, DemoTree};
use logz::{init_logfile, LogLevel, LogzConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logz-demo", version)]
#[command(
    about = "Log a demonstration sequence across modules and packages to logs/<program>-<timestamp>.log"
)]
struct Args {
    #[arg(long, default_value = "logs", value_name = "DIR", help = "Directory for the log file")]
    logs_dir: PathBuf,

    #[arg(long, default_value = "DEBUG", value_name = "LEVEL", help = "Lowest level logged")]
    level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut session = init_logfile(
        &args.logs_dir,
        file!(),
        LogzConfig::default().with_level(args.level),
    )
    .with_context(|| format!("failed to start log file in {}", args.logs_dir.display()))?;

    let root = session.logger().clone();
    let log = root.child("demo");
    log.info(format!("Loading {}.", log.name()));

    let tree = DemoTree::load(&root);

    println!("🟩 MSG_TYPE: Message.");
    run_tour(&log, &tree);

    session.term();
    println!("Log written to {}", session.path().display());
    Ok(())
}
