//! Load-test planner CLI
//!
//! Validates load-test configs and generates per-transaction message plans.

use clap::{Parser, Subcommand};
use loadtest_spammer::config::LoadTestConfig;
use loadtest_spammer::runner::PlanRunner;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "loadtest-spammer")]
#[command(about = "Turns a load-test workload config into per-transaction message plans")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a config without generating anything
    Validate {
        /// Config file (.json or .toml)
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Generate message plans for every configured round
    Plan {
        /// Config file (.json or .toml)
        #[arg(short, long)]
        config: PathBuf,

        /// Override the config's master seed
        #[arg(long)]
        seed: Option<u64>,

        /// Override the config's number of rounds
        #[arg(long)]
        rounds: Option<u64>,

        /// Print one JSON transaction plan per line instead of a summary
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON plans on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { config } => {
            let test = LoadTestConfig::load(&config)?;
            println!("Config OK: {}", config.display());
            println!("  chain_id:      {}", test.chain_id);
            println!("  message_type:  {}", test.group);
            println!("  rounds:        {}", test.rounds);
            println!("  txs_per_block: {}", test.txs_per_block);
            println!("  msgs_per_tx:   {}", test.msgs_per_tx);
            println!("  budget:        {}", test.budget);
        }

        Commands::Plan {
            config,
            seed,
            rounds,
            json,
        } => {
            let mut test = LoadTestConfig::load(&config)?;
            if let Some(seed) = seed {
                test = test.with_seed(seed);
            }
            if let Some(rounds) = rounds {
                test = test.with_rounds(rounds)?;
            }

            let runner = PlanRunner::new(test)?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();

            let report = runner.run(|tx| -> Result<(), Box<dyn std::error::Error>> {
                if json {
                    serde_json::to_writer(&mut out, &tx)?;
                    writeln!(out)?;
                }
                Ok(())
            })?;

            if !json {
                println!("{}", report);
            }
        }
    }

    Ok(())
}
