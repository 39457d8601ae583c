// ABOUTME: Stock rule set over individual inventory items
// ABOUTME: Flags unpriced items, items not linked to an ingredient, and stale purchases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Duration, Utc};
use comanda_core::models::{Scope, Severity, Signal, SignalType, StockItem};

use super::{ids, RuleEntry};
use crate::config::SignalThresholds;

/// Stock rule signature
pub type StockRule = fn(&StockItem, DateTime<Utc>, &SignalThresholds) -> Option<Signal>;

/// Stock rules, in evaluation order
pub const RULES: &[RuleEntry<StockRule>] = &[
    RuleEntry {
        id: ids::MISSING_PRICE,
        rule: missing_price,
    },
    RuleEntry {
        id: ids::UNLINKED_ITEM,
        rule: unlinked_item,
    },
    RuleEntry {
        id: ids::STALE_PURCHASE,
        rule: stale_purchase,
    },
];

/// Evaluate every stock rule against one item
#[must_use]
pub fn evaluate(
    item: &StockItem,
    as_of: DateTime<Utc>,
    thresholds: &SignalThresholds,
) -> Vec<Signal> {
    RULES
        .iter()
        .filter_map(|entry| (entry.rule)(item, as_of, thresholds))
        .collect()
}

fn stock_signal(id: &str, severity: Severity, item: &StockItem, message: &str) -> Signal {
    Signal::new(id, SignalType::Stock, severity, Scope::Stock, message)
        .with_subject(item.id.as_str())
        .with_context("stock_item_id", item.id.as_str())
        .with_context("name", item.name.as_str())
}

fn missing_price(item: &StockItem, _: DateTime<Utc>, _: &SignalThresholds) -> Option<Signal> {
    if item.average_unit_cost > 0.0 {
        return None;
    }
    Some(
        stock_signal(ids::MISSING_PRICE, Severity::Critical, item, "Missing price")
            .with_explanation(format!(
                "{} has no average cost; recipes using it cannot be costed from stock.",
                item.name
            ))
            .with_context("average_unit_cost", item.average_unit_cost),
    )
}

fn unlinked_item(item: &StockItem, _: DateTime<Utc>, _: &SignalThresholds) -> Option<Signal> {
    let linked = item
        .ingredient_id
        .as_deref()
        .is_some_and(|id| !id.trim().is_empty());
    if linked {
        return None;
    }
    Some(
        stock_signal(ids::UNLINKED_ITEM, Severity::Warning, item, "Unlinked item")
            .with_explanation(format!(
                "{} is not linked to a master ingredient and is invisible to recipe costing.",
                item.name
            )),
    )
}

fn stale_purchase(
    item: &StockItem,
    as_of: DateTime<Utc>,
    thresholds: &SignalThresholds,
) -> Option<Signal> {
    let last = item.last_purchase_at?;
    if item.quantity_available <= 0.0 {
        return None;
    }
    let age = as_of - last;
    // a window beyond chrono's range never elapses
    let window = Duration::try_days(thresholds.stale_purchase_days)?;
    if age <= window {
        return None;
    }
    Some(
        stock_signal(ids::STALE_PURCHASE, Severity::Info, item, "Stale purchase")
            .with_explanation(format!(
                "{} is still in stock but was last purchased {} days ago.",
                item.name,
                age.num_days()
            ))
            .with_context("last_purchase_at", last.to_rfc3339())
            .with_context("age_days", age.num_days())
            .with_context("quantity_available", item.quantity_available)
            .with_meta("stale_purchase_days", thresholds.stale_purchase_days),
    )
}
