// ABOUTME: Insight value object derived from signals for the presentation layer
// ABOUTME: Carries an impact estimate, static confidence, and suggested actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};

use super::{Scope, Severity};

/// How an impact value should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactFormat {
    /// Plain count or number
    Number,
    /// Money amount
    Currency,
    /// Percentage
    Percent,
}

/// Whether the impacted metric is moving the right way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactDirection {
    /// Metric improves
    Up,
    /// Metric degrades
    Down,
    /// No direction
    Neutral,
}

/// Estimated impact of an insight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightImpact {
    /// Metric name, e.g. `items_missing_price`
    pub metric: String,
    /// Metric value
    pub value: f64,
    /// Rendering format
    pub format: ImpactFormat,
    /// Direction
    pub direction: ImpactDirection,
}

/// Visual weight of a suggested action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionVariant {
    /// Main call to action
    Primary,
    /// Alternative action
    Secondary,
    /// Low-emphasis action
    Ghost,
}

/// A suggested action attached to an insight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightAction {
    /// Button label
    pub label: String,
    /// Identifier the presentation layer dispatches on
    pub action_id: String,
    /// Visual weight
    pub variant: ActionVariant,
}

/// A user-actionable interpretation of one or more signals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Template identifier
    pub id: String,
    /// Entity type
    pub scope: Scope,
    /// Urgency
    pub severity: Severity,
    /// Headline
    pub title: String,
    /// One-paragraph summary
    pub summary: String,
    /// Impact estimate
    pub impact: InsightImpact,
    /// Suggested actions
    pub actions: Vec<InsightAction>,
    /// Static confidence score (0-100)
    pub confidence: u8,
    /// Id of the signal that triggered this insight (lookup only)
    pub source_signal_id: String,
    /// Subjects of every matching signal, in signal order
    #[serde(default)]
    pub subject_ids: Vec<String>,
}
