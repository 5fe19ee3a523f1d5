//! kycaml CLI - synthetic AML / KYC datasets from the command line
//!
//! Usage:
//! ```bash
//! kycaml transactions --count 500 --suspicious-ratio 0.15 --customers 50
//! kycaml pattern --type STRUCTURING --days 30
//! kycaml customers --count 50 --individual-ratio 0.7
//! kycaml summary --input aml_synthetic_transactions.json --kind transactions --format csv
//! kycaml --seed 42 --config dataset.json transactions
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use kycaml_reports::ExportFormat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::DatasetConfig;

/// kycaml - synthetic transaction, SAR and KYC customer generator
#[derive(Parser)]
#[command(name = "kycaml")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Seed for the random generator (OS entropy when omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// JSON dataset configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a transaction batch and a sample SAR
    Transactions {
        /// Number of transactions
        #[arg(long)]
        count: Option<usize>,
        /// Share of suspicious transactions, in [0, 1]
        #[arg(long)]
        suspicious_ratio: Option<f64>,
        /// Number of customer ids to spread transactions over
        #[arg(long)]
        customers: Option<usize>,
        /// Transactions output file
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// SAR output file
        #[arg(long)]
        sar_output: Option<PathBuf>,
    },

    /// Generate one laundering pattern for a single customer
    Pattern {
        /// STRUCTURING, RAPID_MOVEMENT or SMURFING
        #[arg(long = "type")]
        pattern_type: String,
        /// Customer id (random when omitted)
        #[arg(long)]
        customer: Option<String>,
        /// Days back from now the pattern starts
        #[arg(long)]
        days: Option<u32>,
        /// Output file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Generate KYC customer profiles
    Customers {
        /// Number of customers
        #[arg(long)]
        count: Option<usize>,
        /// Share of individual customers, in [0, 1]
        #[arg(long)]
        individual_ratio: Option<f64>,
        /// Output file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Summarize a generated dataset
    Summary {
        /// Dataset file written by `transactions` or `customers`
        #[arg(long, short)]
        input: PathBuf,
        /// Kind of records in the input
        #[arg(long)]
        kind: DatasetKind,
        /// Report format: markdown, json or csv
        #[arg(long, default_value = "markdown")]
        format: ExportFormat,
        /// Write the report here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DatasetKind {
    Transactions,
    Customers,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<DatasetConfig> {
    let config = match &cli.config {
        Some(path) => DatasetConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DatasetConfig::default(),
    };
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = load_config(&cli)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!(seed = ?cli.seed, "Random generator ready");

    match cli.command {
        Commands::Transactions {
            count,
            suspicious_ratio,
            customers,
            output,
            sar_output,
        } => {
            if let Some(count) = count {
                config.transaction_count = count;
            }
            if let Some(ratio) = suspicious_ratio {
                config.suspicious_ratio = ratio;
            }
            if let Some(customers) = customers {
                config.customer_id_count = customers;
            }
            if let Some(path) = output {
                config.transactions_output = path;
            }
            if let Some(path) = sar_output {
                config.sar_output = path;
            }
            config.validate()?;
            commands::generate::transactions(&mut rng, &config)?;
        }

        Commands::Pattern {
            pattern_type,
            customer,
            days,
            output,
        } => {
            if let Some(days) = days {
                config.pattern_days = days;
            }
            if let Some(path) = output {
                config.pattern_output = path;
            }
            commands::generate::pattern(&mut rng, &config, &pattern_type, customer)?;
        }

        Commands::Customers {
            count,
            individual_ratio,
            output,
        } => {
            if let Some(count) = count {
                config.customer_count = count;
            }
            if let Some(ratio) = individual_ratio {
                config.individual_ratio = ratio;
            }
            if let Some(path) = output {
                config.customers_output = path;
            }
            config.validate()?;
            commands::generate::customers(&mut rng, &config)?;
        }

        Commands::Summary {
            input,
            kind,
            format,
            output,
        } => {
            commands::summary::run(&input, kind, format, output.as_deref())?;
        }
    }

    Ok(())
}
