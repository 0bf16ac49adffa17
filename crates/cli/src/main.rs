//! Export Tracker CLI - migrations, demo data and report generation.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! et-cli migrate
//!
//! # Insert the demo records into the database (existing ones are skipped)
//! et-cli seed
//!
//! # Write a catalogue report as CSV
//! et-cli report payment-aging
//! et-cli report firc-report --output firc.csv --date 2026-03-31
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed the database with demo data
//! - `report` - Generate a CSV report (from the database, or demo data when
//!   none is configured)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "et-cli")]
#[command(author, version, about = "Export Tracker CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Insert demo customers, orders, shipments and payments
    Seed {
        /// Date the demo records are laid out around (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Generate a catalogue report as CSV
    Report {
        /// Report slug (e.g. `payment-aging`, `lc-tracker`)
        slug: String,

        /// Output file (default: the report's file stem plus `.csv`, e.g. `order-summary-report.csv`, in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report as of this date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { date } => commands::seed::run(date).await?,
        Commands::Report { slug, output, date } => {
            commands::report::run(&slug, output, date).await?;
        }
    }
    Ok(())
}
