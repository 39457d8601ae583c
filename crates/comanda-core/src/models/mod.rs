// ABOUTME: Core data models for the Comanda costing engine
// ABOUTME: Re-exports catalog records and the Signal/Insight value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Plain value types handed to the engine by the data repository and handed
//! back to the presentation layer.
//!
//! ## Design Principles
//!
//! - **Tolerant**: unit fields are free strings; unknown values are the
//!   normalizer's problem, not a deserialization failure
//! - **Transient**: `Signal` and `Insight` are recomputed on every evaluation
//!   and carry no identity beyond the call that produced them
//! - **Deterministic**: maps use `BTreeMap` so identical inputs serialize identically

mod catalog;
mod insight;
mod signal;

pub use catalog::{
    CostMetrics, ProductMarket, PurchaseRecord, Recipe, RecipeLineItem, StockItem, SupplierOffer,
};
pub use insight::{ActionVariant, ImpactDirection, ImpactFormat, Insight, InsightAction, InsightImpact};
pub use signal::{Scope, Severity, Signal, SignalType};
