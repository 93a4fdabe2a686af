//! Command-line interface definitions.

pub mod check;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pricebot - buy when the price drops below a threshold.
#[derive(Parser, Debug)]
#[command(name = "pricebot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a JSON-lines tick stream through the configured triggers
    Run(RunArgs),

    /// Validate configuration file
    Check(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// File of JSON-lines ticks; reads stdin when omitted
    #[arg(short, long)]
    pub ticks: Option<PathBuf>,

    /// Write notices to stdout as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_run_arguments() {
        let cli = Cli::parse_from(["pricebot", "run", "-c", "bot.toml", "--ticks", "ticks.jsonl", "--json"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.config, PathBuf::from("bot.toml"));
                assert_eq!(args.ticks, Some(PathBuf::from("ticks.jsonl")));
                assert!(args.json);
                assert!(args.log_level.is_none());
            }
            other => panic!("expected run, got {other:?}"),
        }
    }
}
