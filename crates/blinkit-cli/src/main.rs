mod output;
mod run;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::run::{run_scrape, RunOutcome};

#[derive(Debug, Parser)]
#[command(name = "blinkit-cli")]
#[command(about = "Blinkit category listing scraper")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape every location × category pair and write `output_<date>.csv`
    Scrape {
        /// Locations input file (overrides `BLINKIT_LOCATIONS_CSV`)
        #[arg(long)]
        locations: Option<PathBuf>,
        /// Categories input file (overrides `BLINKIT_CATEGORIES_CSV`)
        #[arg(long)]
        categories: Option<PathBuf>,
        /// Directory for the output file (overrides `BLINKIT_OUTPUT_DIR`)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Load inputs and count tasks without sending any request
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let loaded = blinkit_core::load_app_config();
    let log_level = loaded
        .as_ref()
        .map_or(DEFAULT_LOG_LEVEL, |config| config.log_level.as_str());
    let rust_log = std::env::var("RUST_LOG").ok();
    match log_filter(rust_log.as_deref(), log_level) {
        Ok(filter) => tracing_subscriber::fmt().with_env_filter(filter).init(),
        Err(error) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new(DEFAULT_LOG_LEVEL))
                .init();
            tracing::warn!(log_level, error = %error, "invalid log filter; using default");
        }
    }

    let mut config = match loaded {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(error = %error, "failed to load configuration");
            return Err(error.into());
        }
    };

    match cli.command {
        Some(Commands::Scrape {
            locations,
            categories,
            output_dir,
            dry_run,
        }) => {
            if let Some(path) = locations {
                config.locations_path = path;
            }
            if let Some(path) = categories {
                config.categories_path = path;
            }
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }

            let outcome = match run_scrape(&config, dry_run).await {
                Ok(outcome) => outcome,
                Err(error) => {
                    tracing::error!(error = %format!("{error:#}"), "scrape aborted");
                    return Err(error);
                }
            };
            print_outcome(&outcome);
        }
        None => println!("blinkit-cli: run `blinkit-cli scrape --help` to get started"),
    }

    Ok(())
}

const DEFAULT_LOG_LEVEL: &str = "info";

/// Log filter from `RUST_LOG` when it is set and valid, else from `fallback`.
fn log_filter(rust_log: Option<&str>, fallback: &str) -> Result<EnvFilter, ParseError> {
    match rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        Some(filter) => Ok(filter),
        None => EnvFilter::try_new(fallback),
    }
}

fn print_outcome(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::DryRun { tasks } => {
            println!("dry-run: would scrape {tasks} location/category tasks");
        }
        RunOutcome::NoTasks => eprintln!("error: no tasks generated; check the input files"),
        RunOutcome::NoRecords { tasks } => {
            eprintln!("error: no products scraped from {tasks} tasks; nothing saved");
        }
        RunOutcome::Saved { path, records } => {
            println!("saved {records} products to {}", path.display());
        }
        RunOutcome::SaveFailed { records, error } => {
            eprintln!("error: scraped {records} products but failed to save them: {error}");
        }
    }
}
