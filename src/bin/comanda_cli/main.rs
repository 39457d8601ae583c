// ABOUTME: Comanda CLI - runs the costing and signal engine over a JSON snapshot
// ABOUTME: Prints full reports, single-recipe costs, or filtered signals as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Full report (costs, prices, signals, insights)
//! comanda-cli report snapshot.json --pretty
//!
//! # Cost and price of one recipe
//! comanda-cli cost snapshot.json --recipe negroni
//!
//! # Warnings and critical signals only
//! comanda-cli signals snapshot.json --min-severity warning
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use comanda::errors::AppError;
use comanda::intelligence::config::EngineConfig;
use comanda::logging::LoggingConfig;
use comanda::models::Severity;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "comanda-cli",
    about = "Comanda costing and business-signal CLI",
    long_about = "Costs recipes, recommends prices, and evaluates cost, market, and stock rules over a JSON snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the full report
    Report {
        /// Snapshot file
        snapshot: PathBuf,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print one recipe's cost breakdown and price recommendation
    Cost {
        /// Snapshot file
        snapshot: PathBuf,

        /// Recipe id
        #[arg(long)]
        recipe: String,
    },

    /// Print signals at or above a severity
    Signals {
        /// Snapshot file
        snapshot: PathBuf,

        /// Lowest severity to print (info, warning, critical)
        #[arg(long, default_value = "info")]
        min_severity: Severity,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = EngineConfig::load().map_err(|e| AppError::config(e.to_string()))?;
    debug!(?config, "engine configuration loaded");

    match cli.command {
        Command::Report { snapshot, pretty } => commands::report(&snapshot, &config, pretty),
        Command::Cost { snapshot, recipe } => commands::cost(&snapshot, &config, &recipe),
        Command::Signals {
            snapshot,
            min_severity,
        } => commands::signals(&snapshot, &config, min_severity),
    }
}
