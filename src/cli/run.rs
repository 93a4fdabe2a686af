//! Handler for the `run` command.

use std::fs::File;
use std::io::{self, BufReader};
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::{JsonLinesObserver, LogObserver};
use crate::app::{build_back_office, build_triggers, ReplaySummary, Runner};
use crate::cli::RunArgs;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::outbound::executor::OrderExecutor;

/// Execute the run command.
pub fn execute(args: &RunArgs) -> Result<ReplaySummary> {
    let mut config = Config::load(&args.config)?;
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    config.init_logging();

    info!(
        triggers = config.triggers.len(),
        back_office = config.back_office.enabled,
        "pricebot starting"
    );

    let executor = build_back_office(&config.back_office).map(|o| o as Arc<dyn OrderExecutor>);
    let runner = Runner::new(build_triggers(&config, executor));

    runner.observe_all(LogObserver);
    if args.json {
        runner.observe_all(JsonLinesObserver::new(io::stdout()));
    }

    let summary = match &args.ticks {
        Some(path) => runner.replay(BufReader::new(File::open(path)?))?,
        None => runner.replay(io::stdin().lock())?,
    };

    eprintln!(
        "{} ticks, {} completed, {} failed",
        summary.ticks, summary.completions, summary.failures
    );
    Ok(summary)
}
