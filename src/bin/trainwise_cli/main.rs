// ABOUTME: Trainwise CLI - load summaries and next-session suggestions from JSON exports
// ABOUTME: Parses arguments, sets up logging and configuration, and prints results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Load summary as of a date
//! trainwise-cli --records records.json summary --as-of 2025-03-10
//!
//! # Next session, week type alternating from history
//! trainwise-cli --records records.json --history history.json suggest --as-of 2025-03-10
//!
//! # Force a week type and use a custom planner config
//! trainwise-cli --history history.json --planner-config planner.json suggest --week-type kid
//!
//! # Both at once
//! trainwise-cli --records records.json --history history.json overview
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing::info;
use trainwise::config::ServiceConfig;
use trainwise::constants::service_names;
use trainwise::logging::LoggingConfig;
use trainwise::models::WeekType;
use trainwise::providers::JsonFileStore;
use trainwise::services::TrainingService;

#[derive(Parser)]
#[command(
    name = "trainwise-cli",
    about = "Trainwise training load and session suggestion CLI",
    long_about = "Computes trailing training load summaries and suggests the next strength session from JSON exports."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Training records JSON file (overrides TRAINWISE_RECORDS_PATH)
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    /// Session history JSON file (overrides TRAINWISE_HISTORY_PATH)
    #[arg(long, global = true)]
    history: Option<PathBuf>,

    /// Exercise catalog JSON file (overrides TRAINWISE_CATALOG_PATH, built-in catalog when unset)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Session planner config JSON file (overrides TRAINWISE_PLANNER_CONFIG)
    #[arg(long, global = true)]
    planner_config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print trailing window statistics and the load trend
    Summary {
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Print the suggested next session
    Suggest {
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Week type (kid or non-kid); alternates from history when omitted
        #[arg(long)]
        week_type: Option<WeekType>,
    },

    /// Print the load summary and the suggested next session together
    Overview {
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Week type (kid or non-kid); alternates from history when omitted
        #[arg(long)]
        week_type: Option<WeekType>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().with_service_name(service_names::TRAINWISE_CLI);
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut service_config = ServiceConfig::from_env();
    if cli.records.is_some() {
        service_config.data.records = cli.records;
    }
    if cli.history.is_some() {
        service_config.data.history = cli.history;
    }
    if cli.catalog.is_some() {
        service_config.data.catalog = cli.catalog;
    }
    if cli.planner_config.is_some() {
        service_config.planner_config_path = cli.planner_config;
    }

    let intelligence = service_config.intelligence_config()?;
    let store = JsonFileStore::from_paths(&service_config.data);
    let service = TrainingService::new(store, intelligence);

    let today = Utc::now().date_naive();
    info!(environment = %service_config.environment, "Trainwise CLI ready");

    match cli.command {
        Command::Summary { as_of } => {
            commands::summary(&service, as_of.unwrap_or(today)).await?;
        }
        Command::Suggest { as_of, week_type } => {
            commands::suggest(&service, as_of.unwrap_or(today), week_type).await?;
        }
        Command::Overview { as_of, week_type } => {
            commands::overview(&service, as_of.unwrap_or(today), week_type).await?;
        }
    }

    Ok(())
}
