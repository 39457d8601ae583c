// ABOUTME: Integration tests for signal-to-insight derivation
// ABOUTME: Covers template matching, aggregation, static confidence, and output order
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use comanda::intelligence::config::SignalThresholds;
use comanda::intelligence::insights::{
    derive_insights, insight_ids, InsightContext, InsightEngine, TEMPLATES,
};
use comanda::intelligence::signals::{ids, SignalEngine};
use comanda::models::{
    ActionVariant, ImpactDirection, ImpactFormat, Scope, Severity, Signal, SignalType,
};

mod common;

use common::as_of;

fn signal(id: &str) -> Signal {
    Signal::new(id, SignalType::Stock, Severity::Info, Scope::Stock, id)
}

#[test]
fn test_missing_price_maps_to_cost_blockage() {
    common::init_test_logging();
    let item = common::stock_item("stock-gin", Some("gin"), "ml", 0.0);
    let signals = SignalEngine::with_thresholds(SignalThresholds::default())
        .evaluate_stock(&item, as_of());
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].severity, Severity::Critical);

    let insights = derive_insights(&signals, &InsightContext::default());
    assert_eq!(insights.len(), 1);

    let insight = &insights[0];
    assert_eq!(insight.id, insight_ids::COST_BLOCKAGE);
    assert_eq!(insight.confidence, 95);
    assert_eq!(insight.severity, Severity::Critical);
    assert_eq!(insight.source_signal_id, ids::MISSING_PRICE);
    assert_eq!(insight.actions.len(), 1);
    assert_eq!(insight.actions[0].action_id, "view-affected-recipes");
    assert_eq!(insight.actions[0].variant, ActionVariant::Primary);
    assert_eq!(insight.impact.metric, "items_missing_price");
    assert_eq!(insight.impact.format, ImpactFormat::Number);
    assert_eq!(insight.impact.direction, ImpactDirection::Down);
}

#[test]
fn test_insight_lists_every_affected_subject() {
    let engine = SignalEngine::with_thresholds(SignalThresholds::default());
    let items = vec![
        common::stock_item("stock-gin", Some("gin"), "ml", 0.0),
        common::stock_item("stock-tonic", Some("tonic"), "ml", 0.002),
        common::stock_item("stock-lemon", Some("lemon"), "g", 0.0),
    ];
    let signals = engine.evaluate_stock_batch(&items, as_of());

    let insights = derive_insights(&signals, &InsightContext::default());
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].source_signal_id, ids::MISSING_PRICE);
    assert_eq!(insights[0].subject_ids, vec!["stock-gin", "stock-lemon"]);
}

#[test]
fn test_unlinked_items_insight() {
    let insights = derive_insights(&[signal(ids::UNLINKED_ITEM)], &InsightContext::default());
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].id, insight_ids::UNLINKED_ITEMS);
    assert_eq!(insights[0].severity, Severity::Info);
    assert_eq!(insights[0].confidence, 100);
    assert_eq!(insights[0].actions[0].label, "Link now");
}

#[test]
fn test_matching_signals_aggregate_into_one_insight() {
    let signals = vec![
        signal(ids::UNLINKED_ITEM),
        signal(ids::MISSING_PRICE),
        signal(ids::UNLINKED_ITEM),
        signal(ids::UNLINKED_ITEM),
    ];
    let insights = derive_insights(&signals, &InsightContext::default());
    assert_eq!(insights.len(), 2);

    let unlinked = insights
        .iter()
        .find(|i| i.id == insight_ids::UNLINKED_ITEMS)
        .unwrap();
    assert!((unlinked.impact.value - 3.0).abs() < f64::EPSILON);
    assert!(unlinked.summary.starts_with('3'));
}

#[test]
fn test_insights_follow_template_order() {
    let signals = vec![
        signal(ids::SAVINGS_OPPORTUNITY),
        signal(ids::REAL_COST_ABOVE_THEORETICAL),
        signal(ids::UNLINKED_ITEM),
        signal(ids::MISSING_PRICE),
    ];
    let insights = derive_insights(&signals, &InsightContext::default());
    let order: Vec<&str> = insights.iter().map(|i| i.id.as_str()).collect();
    let expected: Vec<&str> = TEMPLATES.iter().map(|t| t.id).collect();
    assert_eq!(order, expected);

    let erosion = &insights[2];
    assert_eq!(erosion.id, insight_ids::MARGIN_EROSION);
    assert_eq!(erosion.confidence, 80);
    assert_eq!(erosion.actions[0].label, "Review recipe costs");

    let savings = &insights[3];
    assert_eq!(savings.id, insight_ids::SUPPLIER_SAVINGS);
    assert_eq!(savings.confidence, 85);
    assert_eq!(savings.actions[0].label, "Compare suppliers");
}

#[test]
fn test_unmapped_signals_produce_nothing() {
    let signals = vec![signal(ids::SINGLE_SUPPLIER), signal(ids::STALE_PURCHASE)];
    assert!(InsightEngine::new()
        .derive_insights(&signals, &InsightContext::default())
        .is_empty());
    assert!(derive_insights(&[], &InsightContext::default()).is_empty());
}

#[test]
fn test_context_fills_cost_blockage_summary() {
    let context = InsightContext {
        affected_recipes: 4,
        total_recipes: 10,
    };
    let insights = derive_insights(&[signal(ids::MISSING_PRICE)], &context);
    assert!(insights[0].summary.contains("4 of 10"));
}
