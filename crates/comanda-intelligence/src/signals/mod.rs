// ABOUTME: Signal engine running the cost, market, and stock rule sets
// ABOUTME: Rules are pure functions registered in per-domain tables and evaluated in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Signal Engine
//!
//! Three independent rule sets inspect cost, market and stock data and emit
//! [`Signal`] records. Each rule set is a table of [`RuleEntry`] values
//! holding plain function pointers; a rule returns `Some(signal)` when it
//! fires. Evaluation walks the table in order, so output order is stable
//! for identical inputs.
//!
//! Adding a rule means adding a function and a table row; the evaluation
//! loop does not change.

pub mod cost;
pub mod market;
pub mod stock;

use chrono::{DateTime, Utc};
use comanda_core::models::{CostMetrics, ProductMarket, Signal, StockItem};
use rayon::prelude::*;

use crate::config::{EngineConfig, SignalThresholds};

/// Stable signal identifiers
pub mod ids {
    /// Theoretical cost is zero
    pub const THEORETICAL_COST_UNDEFINED: &str = "theoretical-cost-undefined";
    /// Real cost cannot be computed because stock data is missing
    pub const REAL_COST_INCOMPLETE: &str = "real-cost-incomplete";
    /// Real cost above theoretical
    pub const REAL_COST_ABOVE_THEORETICAL: &str = "real-cost-above-theoretical";
    /// Real cost below theoretical
    pub const REAL_COST_BELOW_THEORETICAL: &str = "real-cost-below-theoretical";
    /// Only one supplier offers the product
    pub const SINGLE_SUPPLIER: &str = "single-supplier";
    /// Supplier prices spread widely
    pub const PRICE_VARIANCE: &str = "price-variance";
    /// Currently paid price exceeds the cheapest offer
    pub const SAVINGS_OPPORTUNITY: &str = "savings-opportunity";
    /// No supplier updated prices recently
    pub const STALE_PRICE: &str = "stale-price";
    /// Stock item has no average cost
    pub const MISSING_PRICE: &str = "missing-price";
    /// Stock item not linked to a master ingredient
    pub const UNLINKED_ITEM: &str = "unlinked-item";
    /// Stocked item not purchased recently
    pub const STALE_PURCHASE: &str = "stale-purchase";
}

/// A registered rule; `F` is the rule set's function pointer type
pub struct RuleEntry<F> {
    /// Id of the signal the rule emits
    pub id: &'static str,
    /// Rule body
    pub rule: F,
}

/// Ids of a rule table, in evaluation order
#[must_use]
pub fn rule_ids<F>(table: &[RuleEntry<F>]) -> Vec<&'static str> {
    table.iter().map(|entry| entry.id).collect()
}

/// Percentage with two-decimal rounding for display fields
pub(crate) fn round_pct(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rule set runner bound to a set of thresholds
#[derive(Debug, Clone)]
pub struct SignalEngine {
    thresholds: SignalThresholds,
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalEngine {
    /// Create a signal engine from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            thresholds: EngineConfig::global().signals.clone(),
        }
    }

    /// Create with custom thresholds
    #[must_use]
    pub const fn with_thresholds(thresholds: SignalThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &SignalThresholds {
        &self.thresholds
    }

    /// Evaluate the cost rule set for one recipe
    #[must_use]
    pub fn evaluate_cost(&self, metrics: &CostMetrics) -> Vec<Signal> {
        cost::evaluate(metrics, &self.thresholds)
    }

    /// Evaluate the market rule set for one product
    #[must_use]
    pub fn evaluate_market(&self, market: &ProductMarket, as_of: DateTime<Utc>) -> Vec<Signal> {
        market::evaluate(market, as_of, &self.thresholds)
    }

    /// Evaluate the stock rule set for one item
    #[must_use]
    pub fn evaluate_stock(&self, item: &StockItem, as_of: DateTime<Utc>) -> Vec<Signal> {
        stock::evaluate(item, as_of, &self.thresholds)
    }

    /// Evaluate the cost rule set for many recipes in parallel, preserving input order
    #[must_use]
    pub fn evaluate_cost_batch(&self, metrics: &[CostMetrics]) -> Vec<Signal> {
        metrics
            .par_iter()
            .flat_map_iter(|m| self.evaluate_cost(m))
            .collect()
    }

    /// Evaluate the market rule set for many products in parallel, preserving input order
    #[must_use]
    pub fn evaluate_market_batch(
        &self,
        markets: &[ProductMarket],
        as_of: DateTime<Utc>,
    ) -> Vec<Signal> {
        markets
            .par_iter()
            .flat_map_iter(|m| self.evaluate_market(m, as_of))
            .collect()
    }

    /// Evaluate the stock rule set for many items in parallel, preserving input order
    #[must_use]
    pub fn evaluate_stock_batch(&self, items: &[StockItem], as_of: DateTime<Utc>) -> Vec<Signal> {
        items
            .par_iter()
            .flat_map_iter(|item| self.evaluate_stock(item, as_of))
            .collect()
    }
}
