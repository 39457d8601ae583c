// ABOUTME: Full-pipeline analysis of a snapshot into costs, prices, signals, and insights
// ABOUTME: Wires the intelligence engines together in data-flow order and summarizes the result
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Report
//!
//! [`analyze`] runs the engine over one [`Snapshot`]:
//!
//! 1. cost every recipe against the purchase catalog
//! 2. cost every recipe against stock averages
//! 3. price every recipe
//! 4. evaluate the cost, stock and market rule sets
//! 5. derive insights from all signals
//!
//! The result is a plain value; the same snapshot and configuration always
//! produce the same report.

use chrono::{DateTime, Utc};
use comanda_core::models::{Insight, Severity, Signal};
use comanda_intelligence::config::EngineConfig;
use comanda_intelligence::costing::{cost_metrics, cost_recipes, real_cost, RealCost, RecipeCost};
use comanda_intelligence::insights::{InsightContext, InsightEngine};
use comanda_intelligence::pricing::{MarginStatus, PriceRecommendation, PricingEngine};
use comanda_intelligence::signals::SignalEngine;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::snapshot::Snapshot;

/// Costs and prices of one recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeReport {
    /// Recipe id
    pub recipe_id: String,
    /// Recipe name
    pub name: String,
    /// Cost against purchase records
    pub cost: RecipeCost,
    /// Cost against stock averages
    pub real_cost: RealCost,
    /// Price recommendation from the catalog cost
    pub pricing: PriceRecommendation,
}

/// Signal counts per severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// Info signals
    pub info: usize,
    /// Warning signals
    pub warning: usize,
    /// Critical signals
    pub critical: usize,
}

impl SeverityCounts {
    fn tally(signals: &[Signal]) -> Self {
        signals
            .iter()
            .fold(Self::default(), |mut counts, signal| {
                match signal.severity {
                    Severity::Info => counts.info += 1,
                    Severity::Warning => counts.warning += 1,
                    Severity::Critical => counts.critical += 1,
                }
                counts
            })
    }
}

/// Headline figures of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Recipes evaluated
    pub recipes: usize,
    /// Recipes whose every line was costed
    pub fully_costed_recipes: usize,
    /// Recipes without a real cost
    pub recipes_without_real_cost: usize,
    /// Recipes in the red margin band
    pub red_margin_recipes: usize,
    /// Signals per severity
    pub signals: SeverityCounts,
    /// Insights derived
    pub insights: usize,
}

/// Result of analyzing one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Evaluation instant
    pub as_of: DateTime<Utc>,
    /// Per-recipe costs and prices, in snapshot order
    pub recipes: Vec<RecipeReport>,
    /// Cost signals, then stock signals, then market signals
    pub signals: Vec<Signal>,
    /// Insights in template order
    pub insights: Vec<Insight>,
    /// Headline figures
    pub summary: ReportSummary,
}

impl Report {
    /// Per-recipe section by recipe id
    #[must_use]
    pub fn recipe(&self, recipe_id: &str) -> Option<&RecipeReport> {
        self.recipes.iter().find(|r| r.recipe_id == recipe_id)
    }

    /// Signals at or above a severity, in report order
    #[must_use]
    pub fn signals_at_least(&self, min: Severity) -> Vec<&Signal> {
        self.signals.iter().filter(|s| s.severity >= min).collect()
    }
}

/// Run the whole engine over a snapshot
#[must_use]
pub fn analyze(snapshot: &Snapshot, config: &EngineConfig) -> Report {
    let catalog = snapshot.catalog();
    let pricing = PricingEngine::with_config(config.pricing.clone());
    let signal_engine = SignalEngine::with_thresholds(config.signals.clone());

    let costs = cost_recipes(&snapshot.recipes, &catalog);
    let recipes: Vec<RecipeReport> = snapshot
        .recipes
        .par_iter()
        .zip(costs)
        .map(|(recipe, cost)| RecipeReport {
            recipe_id: recipe.id.clone(),
            name: recipe.name.clone(),
            real_cost: real_cost(recipe, &snapshot.stock),
            pricing: pricing.price(cost.total, recipe.sale_price),
            cost,
        })
        .collect();

    let metrics: Vec<_> = recipes
        .iter()
        .map(|r| cost_metrics(&r.cost, &r.real_cost))
        .collect();
    let mut signals = signal_engine.evaluate_cost_batch(&metrics);
    signals.extend(signal_engine.evaluate_stock_batch(&snapshot.stock, snapshot.as_of));
    signals.extend(signal_engine.evaluate_market_batch(&snapshot.market, snapshot.as_of));

    let recipes_without_real_cost = recipes
        .iter()
        .filter(|r| r.real_cost.value.is_none())
        .count();
    let context = InsightContext {
        affected_recipes: recipes_without_real_cost,
        total_recipes: recipes.len(),
    };
    let insights = InsightEngine::new().derive_insights(&signals, &context);

    let summary = ReportSummary {
        recipes: recipes.len(),
        fully_costed_recipes: recipes.iter().filter(|r| r.cost.is_complete()).count(),
        recipes_without_real_cost,
        red_margin_recipes: recipes
            .iter()
            .filter(|r| r.pricing.margin_status == MarginStatus::Red)
            .count(),
        signals: SeverityCounts::tally(&signals),
        insights: insights.len(),
    };
    info!(
        recipes = summary.recipes,
        signals = signals.len(),
        insights = summary.insights,
        "snapshot analyzed"
    );

    Report {
        as_of: snapshot.as_of,
        recipes,
        signals,
        insights,
        summary,
    }
}
