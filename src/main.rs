use anyhow::Context;
use clap::Parser;
use pricebot::cli::{check, run, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Run(args) => {
            run::execute(args)
                .with_context(|| format!("run failed (config: {})", args.config.display()))?;
        }
        Commands::Check(args) => {
            check::execute(&args.config)
                .with_context(|| format!("invalid configuration: {}", args.config.display()))?;
        }
    }

    Ok(())
}
