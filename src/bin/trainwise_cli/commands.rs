// ABOUTME: Subcommand handlers for trainwise-cli
// ABOUTME: Runs the training service and writes pretty JSON results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use trainwise::models::WeekType;
use trainwise::providers::JsonFileStore;
use trainwise::services::TrainingService;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON output")?;
    println!("{rendered}");
    Ok(())
}

pub async fn summary(service: &TrainingService<JsonFileStore>, as_of: NaiveDate) -> Result<()> {
    let summary = service
        .load_summary(as_of)
        .await
        .with_context(|| format!("Failed to compute load summary as of {as_of}"))?;
    print_json(&summary)
}

pub async fn suggest(
    service: &TrainingService<JsonFileStore>,
    as_of: NaiveDate,
    week_type: Option<WeekType>,
) -> Result<()> {
    let suggestion = service
        .suggest_next_session(as_of, week_type)
        .await
        .with_context(|| format!("Failed to suggest a session as of {as_of}"))?;
    print_json(&suggestion)
}

pub async fn overview(
    service: &TrainingService<JsonFileStore>,
    as_of: NaiveDate,
    week_type: Option<WeekType>,
) -> Result<()> {
    let overview = service
        .training_overview(as_of, week_type)
        .await
        .with_context(|| format!("Failed to build training overview as of {as_of}"))?;
    print_json(&overview)
}
