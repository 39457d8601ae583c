// ABOUTME: Signal value object emitted by the cost, market, and stock rule sets
// ABOUTME: Severity-tagged, scope-tagged facts with deterministic context maps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Rule set that produced a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    /// Theoretical vs. real recipe cost
    Cost,
    /// Supplier pricing across offers
    Market,
    /// Inventory data health
    Stock,
}

/// Ordered urgency: `Info < Warning < Critical`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational
    Info,
    /// Needs attention
    Warning,
    /// Blocks downstream computation
    Critical,
}

impl Severity {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "critical" => Ok(Self::Critical),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

/// Entity type a signal or insight pertains to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// A recipe
    Recipe,
    /// A purchasable product
    Product,
    /// A stock item
    Stock,
}

/// A low-level, rule-triggered fact about cost, market, or stock data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    /// Rule identifier, e.g. `missing-price`
    pub id: String,
    /// Rule set that produced the signal
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    /// Urgency
    pub severity: Severity,
    /// Entity type
    pub scope: Scope,
    /// Id of the recipe, product, or stock item the rule fired for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    /// Short human-readable message
    pub message: String,
    /// Why the rule fired
    pub explanation: String,
    /// Facts about the subject (ids, figures)
    pub context: BTreeMap<String, Value>,
    /// Facts about the rule (thresholds)
    pub meta: BTreeMap<String, Value>,
}

impl Signal {
    /// Create a signal with empty explanation and maps
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        signal_type: SignalType,
        severity: Severity,
        scope: Scope,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            signal_type,
            severity,
            scope,
            subject_id: None,
            message: message.into(),
            explanation: String::new(),
            context: BTreeMap::new(),
            meta: BTreeMap::new(),
        }
    }

    /// Set the subject the rule fired for
    #[must_use]
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_id = Some(subject_id.into());
        self
    }

    /// Set the explanation
    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Add a context entry
    #[must_use]
    pub fn with_context(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.context.insert(key.to_owned(), value.into());
        self
    }

    /// Add a meta entry
    #[must_use]
    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.meta.insert(key.to_owned(), value.into());
        self
    }

    /// Look up a numeric context entry
    #[must_use]
    pub fn context_f64(&self, key: &str) -> Option<f64> {
        self.context.get(key).and_then(Value::as_f64)
    }
}
