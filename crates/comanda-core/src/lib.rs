// ABOUTME: Core types and constants for the Comanda restaurant costing engine
// ABOUTME: Foundation crate with catalog records, signal and insight values, errors, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Comanda Core
//!
//! Foundation crate providing shared types and constants for the Comanda
//! costing and business-signal engine. This crate is designed to change
//! infrequently so the intelligence crate and the application crate can
//! compile against a stable set of value types.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode` and `AppResult` for the fallible edges (snapshot loading)
//! - **constants**: Unit factors, pricing policy and rule thresholds organized by domain
//! - **models**: Catalog records (purchases, recipes, stock, supplier offers), `Signal` and `Insight`

/// Unified error handling for the fallible edges of the engine
pub mod errors;

/// Domain constants (unit factors, pricing multipliers, rule cutoffs)
pub mod constants;

/// Catalog records and the transient `Signal`/`Insight` value objects
pub mod models;
