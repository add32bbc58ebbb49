//! SpecFill: populate product spec lists in a catalog export.

use std::sync::Arc;

use specfill_ai::config::COST_PER_CALL;
use specfill_ai::{AiConfig, AiExtractor};
use specfill_core::{ExtractionLimits, SpecExtractor};
use specfill_extract::RuleExtractor;
use specfill_runner::{default_output_path, load_rows, print_report, save_rows, RunOptions, Runner};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod args;

use args::{CliArgs, Command, Strategy, USAGE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let command = match args::parse(std::env::args().skip(1), |key| std::env::var(key).ok()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    match command {
        Command::Help => {
            println!("SpecFill: extract product specifications into catalog rows");
            println!();
            println!("{}", USAGE);
            Ok(())
        }
        Command::Run(cli) => {
            if let Err(e) = run(cli).await {
                error!("{:#}", e);
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

async fn run(cli: CliArgs) -> anyhow::Result<()> {
    let extractor: Arc<dyn SpecExtractor> = match cli.strategy {
        Strategy::Rules => Arc::new(RuleExtractor::with_limits(ExtractionLimits::from_env())),
        Strategy::Ai => {
            let mut config = AiConfig::load(cli.config.as_deref());
            if let Some(key) = cli.api_key.clone() {
                config = config.with_api_key(key);
            }
            Arc::new(AiExtractor::from_config(config)?)
        }
    };

    let remote = extractor.is_remote();
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input, remote));

    let mut rows = load_rows(&cli.input)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", cli.input.display(), e))?;
    info!("Loaded {} rows from {}", rows.len(), cli.input.display());

    let runner = Runner::new(RunOptions {
        overwrite: cli.overwrite,
        quiet: cli.quiet,
        delay: cli.delay,
    });
    let report = runner.run(&mut rows, extractor.as_ref()).await?;

    save_rows(&output, &rows)
        .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", output.display(), e))?;

    if !cli.quiet {
        print_report(&report, &output, remote.then_some(COST_PER_CALL));
    }
    Ok(())
}
