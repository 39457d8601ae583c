// ABOUTME: Sale price recommendations and gross margin classification
// ABOUTME: Applies fixed cost multipliers and red/yellow/green margin bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Pricing engine
//!
//! Prices are multiples of total recipe cost. Margin health is the gross
//! margin of the current sale price; when the recipe has no sale price the
//! recommended price is evaluated instead.

use serde::{Deserialize, Serialize};

use crate::config::{EngineConfig, PricingConfig};

/// Gross margin health band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginStatus {
    /// At or above the green band
    Green,
    /// At or above the yellow band, below green
    Yellow,
    /// Below the yellow band
    Red,
}

/// Price recommendation for one recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecommendation {
    /// Total recipe cost the prices derive from
    pub cost: f64,
    /// Minimum sale price
    pub min: f64,
    /// Recommended sale price
    pub recommended: f64,
    /// Premium sale price
    pub premium: f64,
    /// Price the margin was evaluated at (`None` when cost and sale price are both absent)
    pub evaluated_price: Option<f64>,
    /// Gross margin percentage at `evaluated_price`
    pub margin_pct: Option<f64>,
    /// Margin band
    pub margin_status: MarginStatus,
}

/// Multiplier-based pricing engine
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PricingEngine {
    /// Create a pricing engine from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::global().pricing.clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Derive sale prices from cost and classify the margin
    #[must_use]
    pub fn price(&self, total_cost: f64, current_sale_price: Option<f64>) -> PriceRecommendation {
        let cost = if total_cost.is_finite() { total_cost } else { 0.0 };
        let min = cost * self.config.min_multiplier;
        let recommended = cost * self.config.recommended_multiplier;
        let premium = cost * self.config.premium_multiplier;

        let (evaluated_price, margin) = match current_sale_price.filter(|p| *p > 0.0) {
            Some(sale_price) => (Some(sale_price), Some(margin_pct(cost, sale_price))),
            // margin of the recommended price is exact from the multiplier alone
            None if recommended > 0.0 => (Some(recommended), Some(self.policy_margin_pct())),
            // nothing to lose money on
            None => (None, None),
        };
        let margin_status = margin.map_or(MarginStatus::Green, |pct| self.classify_margin(pct));

        PriceRecommendation {
            cost,
            min,
            recommended,
            premium,
            evaluated_price,
            margin_pct: margin,
            margin_status,
        }
    }

    /// Gross margin percentage of the recommended multiplier
    #[must_use]
    pub fn policy_margin_pct(&self) -> f64 {
        (1.0 - 1.0 / self.config.recommended_multiplier) * 100.0
    }

    /// Band a margin percentage
    #[must_use]
    pub fn classify_margin(&self, margin_pct: f64) -> MarginStatus {
        if margin_pct >= self.config.green_margin_pct {
            MarginStatus::Green
        } else if margin_pct >= self.config.yellow_margin_pct {
            MarginStatus::Yellow
        } else {
            MarginStatus::Red
        }
    }
}

/// Gross margin percentage of selling at `price` something that costs `cost`
///
/// Returns 0 for a non-positive price.
#[must_use]
pub fn margin_pct(cost: f64, price: f64) -> f64 {
    if price <= 0.0 {
        return 0.0;
    }
    (price - cost) / price * 100.0
}

/// Price with the default policy
#[must_use]
pub fn price(total_cost: f64, current_sale_price: Option<f64>) -> PriceRecommendation {
    PricingEngine::with_config(PricingConfig::default()).price(total_cost, current_sale_price)
}
