// ABOUTME: Rule cutoffs for the cost, market, and stock signal rule sets
// ABOUTME: Defaults are the exact thresholds; all comparisons against them are strict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use comanda_core::constants::{cost_rules, market_rules, stock_rules};
use serde::{Deserialize, Serialize};

/// Thresholds shared by the three rule sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    /// Real cost above `theoretical * cost_higher_factor` raises a warning
    pub cost_higher_factor: f64,
    /// Real cost below `theoretical * cost_lower_factor` raises a favorable info
    pub cost_lower_factor: f64,
    /// Supplier spread `(max - min) / min` above this raises a warning
    pub price_variance_ratio: f64,
    /// Reference price premium over the cheapest offer above this raises an info
    pub savings_ratio: f64,
    /// Freshest supplier update older than this many days is stale
    pub stale_price_days: i64,
    /// Last purchase older than this many days is stale
    pub stale_purchase_days: i64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            cost_higher_factor: cost_rules::HIGHER_FACTOR,
            cost_lower_factor: cost_rules::LOWER_FACTOR,
            price_variance_ratio: market_rules::PRICE_VARIANCE_RATIO,
            savings_ratio: market_rules::SAVINGS_RATIO,
            stale_price_days: market_rules::STALE_PRICE_DAYS,
            stale_purchase_days: stock_rules::STALE_PURCHASE_DAYS,
        }
    }
}
