// ABOUTME: Cost rule set comparing theoretical recipe cost with stock-based real cost
// ABOUTME: Flags undefined, incomplete, higher-than-expected, and favorable real costs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use comanda_core::models::{CostMetrics, Scope, Severity, Signal, SignalType};

use super::{ids, round_pct, RuleEntry};
use crate::config::SignalThresholds;

/// Cost rule signature
pub type CostRule = fn(&CostMetrics, &SignalThresholds) -> Option<Signal>;

/// Cost rules, in evaluation order
pub const RULES: &[RuleEntry<CostRule>] = &[
    RuleEntry {
        id: ids::THEORETICAL_COST_UNDEFINED,
        rule: theoretical_cost_undefined,
    },
    RuleEntry {
        id: ids::REAL_COST_INCOMPLETE,
        rule: real_cost_incomplete,
    },
    RuleEntry {
        id: ids::REAL_COST_ABOVE_THEORETICAL,
        rule: real_cost_above_theoretical,
    },
    RuleEntry {
        id: ids::REAL_COST_BELOW_THEORETICAL,
        rule: real_cost_below_theoretical,
    },
];

/// Evaluate every cost rule against one recipe's metrics
#[must_use]
pub fn evaluate(metrics: &CostMetrics, thresholds: &SignalThresholds) -> Vec<Signal> {
    RULES
        .iter()
        .filter_map(|entry| (entry.rule)(metrics, thresholds))
        .collect()
}

fn cost_signal(id: &str, severity: Severity, metrics: &CostMetrics, message: &str) -> Signal {
    Signal::new(id, SignalType::Cost, severity, Scope::Recipe, message)
        .with_subject(metrics.recipe_id.as_str())
        .with_context("recipe_id", metrics.recipe_id.as_str())
        .with_context("theoretical_cost", metrics.theoretical_cost)
}

fn theoretical_cost_undefined(metrics: &CostMetrics, _: &SignalThresholds) -> Option<Signal> {
    if metrics.theoretical_cost > 0.0 {
        return None;
    }
    Some(
        cost_signal(
            ids::THEORETICAL_COST_UNDEFINED,
            Severity::Info,
            metrics,
            "Undefined theoretical cost",
        )
        .with_explanation(
            "None of the recipe's ingredients has a usable purchase price, so its cost is zero.",
        ),
    )
}

fn real_cost_incomplete(metrics: &CostMetrics, _: &SignalThresholds) -> Option<Signal> {
    if metrics.real_cost.is_some() || metrics.missing_stock_count == 0 {
        return None;
    }
    Some(
        cost_signal(
            ids::REAL_COST_INCOMPLETE,
            Severity::Warning,
            metrics,
            "Incomplete real cost",
        )
        .with_explanation(format!(
            "{} ingredient(s) have no priced stock item, so the real cost cannot be computed.",
            metrics.missing_stock_count
        ))
        .with_context("missing_stock_count", metrics.missing_stock_count),
    )
}

/// Real and theoretical cost, only when both are usable for comparison
fn comparable(metrics: &CostMetrics) -> Option<(f64, f64)> {
    let real = metrics.real_cost?;
    (metrics.theoretical_cost > 0.0).then_some((real, metrics.theoretical_cost))
}

fn delta_pct(real: f64, theoretical: f64) -> f64 {
    (real - theoretical) / theoretical * 100.0
}

fn real_cost_above_theoretical(
    metrics: &CostMetrics,
    thresholds: &SignalThresholds,
) -> Option<Signal> {
    let (real, theoretical) = comparable(metrics)?;
    if real <= theoretical * thresholds.cost_higher_factor {
        return None;
    }
    let delta = delta_pct(real, theoretical);
    Some(
        cost_signal(
            ids::REAL_COST_ABOVE_THEORETICAL,
            Severity::Warning,
            metrics,
            "Real cost above theoretical",
        )
        .with_explanation(format!(
            "Stock prices put this recipe {delta:.1}% above its catalog cost."
        ))
        .with_context("real_cost", real)
        .with_context("delta_pct", round_pct(delta))
        .with_meta("higher_factor", thresholds.cost_higher_factor),
    )
}

fn real_cost_below_theoretical(
    metrics: &CostMetrics,
    thresholds: &SignalThresholds,
) -> Option<Signal> {
    let (real, theoretical) = comparable(metrics)?;
    if real >= theoretical * thresholds.cost_lower_factor {
        return None;
    }
    let delta = delta_pct(real, theoretical);
    Some(
        cost_signal(
            ids::REAL_COST_BELOW_THEORETICAL,
            Severity::Info,
            metrics,
            "Real cost below theoretical",
        )
        .with_explanation(format!(
            "Stock prices put this recipe {:.1}% below its catalog cost.",
            -delta
        ))
        .with_context("real_cost", real)
        .with_context("delta_pct", round_pct(delta))
        .with_meta("lower_factor", thresholds.cost_lower_factor),
    )
}
