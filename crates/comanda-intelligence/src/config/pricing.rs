// ABOUTME: Pricing policy configuration for sale price multipliers and margin bands
// ABOUTME: Defaults reproduce the fixed 3x/4x/5x policy and the 67%/75% bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use comanda_core::constants::pricing;
use serde::{Deserialize, Serialize};

/// Multipliers over cost and gross margin bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Minimum sale price multiplier
    pub min_multiplier: f64,
    /// Recommended sale price multiplier
    pub recommended_multiplier: f64,
    /// Premium sale price multiplier
    pub premium_multiplier: f64,
    /// Margin percentage at or above which the status is green
    pub green_margin_pct: f64,
    /// Margin percentage at or above which the status is yellow
    pub yellow_margin_pct: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            min_multiplier: pricing::MIN_MULTIPLIER,
            recommended_multiplier: pricing::RECOMMENDED_MULTIPLIER,
            premium_multiplier: pricing::PREMIUM_MULTIPLIER,
            green_margin_pct: pricing::GREEN_MARGIN_PCT,
            yellow_margin_pct: pricing::YELLOW_MARGIN_PCT,
        }
    }
}
