// ABOUTME: Command handlers for the Comanda CLI
// ABOUTME: Load a snapshot, run the engine, and print JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::path::Path;

use anyhow::Result;
use comanda::errors::AppError;
use comanda::intelligence::config::EngineConfig;
use comanda::models::Severity;
use comanda::report::analyze;
use comanda::snapshot::Snapshot;
use serde::Serialize;
use tracing::info;

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

/// Full report
pub fn report(path: &Path, config: &EngineConfig, pretty: bool) -> Result<()> {
    let snapshot = Snapshot::from_path(path)?;
    let report = analyze(&snapshot, config);
    info!(
        recipes = report.summary.recipes,
        insights = report.summary.insights,
        "report ready"
    );
    print_json(&report, pretty)
}

/// One recipe's cost and price
pub fn cost(path: &Path, config: &EngineConfig, recipe_id: &str) -> Result<()> {
    let snapshot = Snapshot::from_path(path)?;
    let report = analyze(&snapshot, config);
    let recipe = report
        .recipe(recipe_id)
        .ok_or_else(|| AppError::invalid_input(format!("unknown recipe: {recipe_id}")))?;
    print_json(recipe, true)
}

/// Signals at or above `min_severity`
pub fn signals(path: &Path, config: &EngineConfig, min_severity: Severity) -> Result<()> {
    let snapshot = Snapshot::from_path(path)?;
    let report = analyze(&snapshot, config);
    let signals = report.signals_at_least(min_severity);
    info!(
        total = report.signals.len(),
        shown = signals.len(),
        min_severity = %min_severity,
        "signals filtered"
    );
    print_json(&signals, true)
}
