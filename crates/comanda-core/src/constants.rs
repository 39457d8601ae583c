// ABOUTME: Domain constants for unit conversion, pricing policy, and signal rule cutoffs
// ABOUTME: Named values eliminate magic numbers across the costing and signal engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped by domain. Rule cutoffs here are the defaults of
//! the engine configuration; the comparisons that use them are strict
//! unless stated otherwise.

/// Unit conversion factors into the canonical base symbols (`ml`, `g`, `und`)
pub mod units {
    /// Milliliters per liter
    pub const ML_PER_LITER: f64 = 1000.0;
    /// Milliliters per deciliter
    pub const ML_PER_DECILITER: f64 = 100.0;
    /// Milliliters per centiliter
    pub const ML_PER_CENTILITER: f64 = 10.0;
    /// Milliliters per fluid ounce (bar measure)
    pub const ML_PER_FL_OZ: f64 = 29.57;
    /// Milliliters per tablespoon
    pub const ML_PER_TBSP: f64 = 15.0;
    /// Milliliters per teaspoon
    pub const ML_PER_TSP: f64 = 5.0;
    /// Milliliters per US cup
    pub const ML_PER_CUP: f64 = 240.0;
    /// Milliliters per US gallon
    pub const ML_PER_GALLON: f64 = 3785.41;
    /// Grams per kilogram
    pub const GRAMS_PER_KG: f64 = 1000.0;
    /// Grams per milligram
    pub const GRAMS_PER_MG: f64 = 0.001;
    /// Grams per pound
    pub const GRAMS_PER_LB: f64 = 453.6;
    /// Units per dozen
    pub const UNITS_PER_DOZEN: f64 = 12.0;
    /// Grams per milliliter when mass and volume are mixed (water density)
    pub const DENSITY_APPROXIMATION: f64 = 1.0;
}

/// Package-size inference for count-based purchases used by mass/volume
pub mod containers {
    /// Container size assumed when nothing in the record says otherwise (1 L / 1 kg)
    pub const DEFAULT_CONTAINER_SIZE: f64 = 1000.0;
    /// Name markers checked in order; the first hit wins
    pub const NUMERIC_MARKERS: [(&str, f64); 4] =
        [("700", 700.0), ("750", 750.0), ("330", 330.0), ("355", 355.0)];
    /// Gallon spellings recognized in ingredient names
    pub const GALLON_MARKERS: [&str; 2] = ["galon", "gal"];
    /// Words that contain a gallon marker but are not gallons
    pub const GALLON_FALSE_FRIENDS: [&str; 1] = ["galleta"];
    /// Size inferred for a gallon marker, in milliliters
    pub const GALLON_SIZE: f64 = super::units::ML_PER_GALLON;
}

/// Fixed multiplier pricing policy
pub mod pricing {
    /// Minimum sale price multiplier over cost
    pub const MIN_MULTIPLIER: f64 = 3.0;
    /// Recommended sale price multiplier over cost
    pub const RECOMMENDED_MULTIPLIER: f64 = 4.0;
    /// Premium sale price multiplier over cost
    pub const PREMIUM_MULTIPLIER: f64 = 5.0;
    /// Gross margin percentage at or above which a price is healthy
    pub const GREEN_MARGIN_PCT: f64 = 75.0;
    /// Gross margin percentage at or above which a price is acceptable
    pub const YELLOW_MARGIN_PCT: f64 = 67.0;
}

/// Cost rule set cutoffs
pub mod cost_rules {
    /// Real cost above `theoretical * this` is flagged
    pub const HIGHER_FACTOR: f64 = 1.05;
    /// Real cost below `theoretical * this` is flagged as favorable
    pub const LOWER_FACTOR: f64 = 0.95;
}

/// Market rule set cutoffs
pub mod market_rules {
    /// Relative spread between cheapest and dearest supplier
    pub const PRICE_VARIANCE_RATIO: f64 = 0.20;
    /// Relative premium of the reference price over the cheapest offer
    pub const SAVINGS_RATIO: f64 = 0.05;
    /// Age of the freshest supplier update before prices count as stale
    pub const STALE_PRICE_DAYS: i64 = 30;
}

/// Stock rule set cutoffs
pub mod stock_rules {
    /// Age of the last purchase before a stocked item counts as stale
    pub const STALE_PURCHASE_DAYS: i64 = 60;
}

/// Bounds on configurable rule cutoffs
pub mod rule_limits {
    /// Longest accepted stale window, in days (100 years)
    pub const MAX_STALE_DAYS: i64 = 36_500;
}

/// Static insight confidence scores (0-100)
pub mod confidence {
    /// Missing stock prices block real costing
    pub const COST_BLOCKAGE: u8 = 95;
    /// Stock items without a master ingredient link
    pub const UNLINKED_ITEMS: u8 = 100;
    /// Real cost drifting above theoretical
    pub const MARGIN_EROSION: u8 = 80;
    /// Cheaper supplier available
    pub const SUPPLIER_SAVINGS: u8 = 85;
}
