// ABOUTME: Costing and business-signal engine for restaurant recipes, stock, and suppliers
// ABOUTME: Unit normalization, recipe costing, pricing, rule-based signals, and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Comanda Intelligence
//!
//! Pure, synchronous pipeline over the value types of `comanda-core`:
//!
//! 1. [`units`] resolves unit aliases and normalizes quantities onto a
//!    mass, volume or count axis.
//! 2. [`costing`] prices recipe line items against purchase records and
//!    stock items, degrading to zero-cost lines instead of failing.
//! 3. [`pricing`] derives min/recommended/premium prices and bands margins.
//! 4. [`signals`] runs the cost, market and stock rule tables.
//! 5. [`insights`] turns signals into insights with suggested actions.
//!
//! Nothing here performs I/O or holds shared mutable state besides the
//! lazily loaded [`config::EngineConfig::global`].

/// Engine configuration with environment overrides
pub mod config;

/// Recipe costing against purchase records and stock
pub mod costing;

/// Signal-to-insight templates
pub mod insights;

/// Price recommendations and margin banding
pub mod pricing;

/// Cost, market and stock rule sets
pub mod signals;

/// Unit aliases and normalization
pub mod units;

pub use config::{ConfigError, EngineConfig, PricingConfig, SignalThresholds};
pub use costing::{
    cost, cost_metrics, cost_recipes, real_cost, CostCalculator, CostMethod, CostedLineItem,
    IngredientCatalog, LineStatus, RealCost, RecipeCost,
};
pub use insights::{derive_insights, InsightContext, InsightEngine};
pub use pricing::{margin_pct, price, MarginStatus, PriceRecommendation, PricingEngine};
pub use signals::SignalEngine;
pub use units::{normalize, BaseUnit, NormalizedQuantity, ParsedUnit, Unit, UnitNormalizer};
