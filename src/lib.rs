// ABOUTME: Main library entry point for the Comanda costing and business-signal engine
// ABOUTME: Re-exports the engine crates and adds logging, snapshot loading, and full reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Comanda
//!
//! Recipe costing, pricing and business signals for restaurant and bar
//! operations. The engine itself lives in two workspace crates:
//!
//! - **`comanda-core`**: catalog records, `Signal`/`Insight` values, errors, constants
//! - **`comanda-intelligence`**: unit normalization, costing, pricing, rules, insights
//!
//! This crate adds what a running tool needs around them: structured logging,
//! JSON snapshot loading, and [`report::analyze`], which runs the whole
//! pipeline over a snapshot.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use comanda::intelligence::config::EngineConfig;
//! use comanda::report::analyze;
//! use comanda::snapshot::Snapshot;
//!
//! fn main() -> comanda::errors::AppResult<()> {
//!     let snapshot = Snapshot::from_path("snapshot.json")?;
//!     let report = analyze(&snapshot, EngineConfig::global());
//!     println!("{} signals", report.signals.len());
//!     Ok(())
//! }
//! ```

/// Structured logging setup for binaries
pub mod logging;

/// Full-pipeline analysis of a snapshot
pub mod report;

/// Snapshot loading and validation
pub mod snapshot;

pub use comanda_core::{constants, errors, models};
pub use comanda_intelligence as intelligence;
