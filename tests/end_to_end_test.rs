// ABOUTME: End-to-end tests running the whole engine over a snapshot
// ABOUTME: Verifies costs, prices, signals, insights, and summary figures together
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use comanda::intelligence::config::EngineConfig;
use comanda::intelligence::insights::insight_ids;
use comanda::intelligence::pricing::MarginStatus;
use comanda::intelligence::signals::ids;
use comanda::models::Severity;
use comanda::report::analyze;

mod common;

use common::{approx_eq, days_ago, offer};

#[test]
fn test_healthy_snapshot_has_no_signals() {
    common::init_test_logging();
    let report = analyze(&common::snapshot(), &EngineConfig::default());

    assert_eq!(report.as_of, common::as_of());
    assert_eq!(report.recipes.len(), 2);
    assert!(report.signals.is_empty(), "{:?}", report.signals);
    assert!(report.insights.is_empty());
    assert_eq!(report.summary.recipes, 2);
    assert_eq!(report.summary.fully_costed_recipes, 2);
    assert_eq!(report.summary.recipes_without_real_cost, 0);
}

#[test]
fn test_recipe_sections_carry_costs_and_prices() {
    let report = analyze(&common::snapshot(), &EngineConfig::default());

    let gin_tonic = report.recipe("gin-tonic").unwrap();
    assert!(approx_eq(gin_tonic.cost.total, 1.93));
    assert!(approx_eq(gin_tonic.real_cost.value.unwrap(), 1.93));
    assert_eq!(gin_tonic.pricing.evaluated_price, Some(9.0));
    assert_eq!(gin_tonic.pricing.margin_status, MarginStatus::Green);

    let shot = report.recipe("gin-shot").unwrap();
    assert!(approx_eq(shot.cost.total, 0.9));
    assert!(approx_eq(shot.pricing.recommended, 3.6));
    assert!(report.recipe("martini").is_none());
}

#[test]
fn test_unpriced_stock_blocks_real_cost() {
    let mut snapshot = common::snapshot();
    snapshot.stock[0].average_unit_cost = 0.0;

    let report = analyze(&snapshot, &EngineConfig::default());
    let signal_ids: Vec<&str> = report.signals.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        signal_ids,
        vec![
            ids::REAL_COST_INCOMPLETE,
            ids::REAL_COST_INCOMPLETE,
            ids::MISSING_PRICE,
        ]
    );
    assert_eq!(report.summary.signals.critical, 1);
    assert_eq!(report.summary.signals.warning, 2);
    assert_eq!(report.summary.recipes_without_real_cost, 2);

    assert_eq!(report.insights.len(), 1);
    assert_eq!(report.insights[0].id, insight_ids::COST_BLOCKAGE);
    assert_eq!(report.insights[0].confidence, 95);
    assert!(report.insights[0].summary.contains("2 of 2"));
}

#[test]
fn test_dearer_stock_erodes_margins() {
    let mut snapshot = common::snapshot();
    // gin stock now 0.04/ml against a catalog price of 0.03/ml
    snapshot.stock[0].average_unit_cost = 0.04;

    let report = analyze(&snapshot, &EngineConfig::default());
    let above: Vec<_> = report
        .signals
        .iter()
        .filter(|s| s.id == ids::REAL_COST_ABOVE_THEORETICAL)
        .collect();
    assert_eq!(above.len(), 2);
    assert_eq!(report.insights.len(), 1);
    assert_eq!(report.insights[0].id, insight_ids::MARGIN_EROSION);
    assert!(approx_eq(report.insights[0].impact.value, 2.0));
}

#[test]
fn test_market_and_stock_signals_in_report() {
    let mut snapshot = common::snapshot();
    snapshot.market[0].offers.push(offer("caro", 35.0, 700.0, "ml", 2));
    snapshot.market[0].reference_unit_price = Some(0.035);
    snapshot.stock[2].ingredient_id = None;
    snapshot.stock[2].last_purchase_at = Some(days_ago(200));

    let report = analyze(&snapshot, &EngineConfig::default());
    let signal_ids: Vec<&str> = report.signals.iter().map(|s| s.id.as_str()).collect();
    // unlinking lemon only costs the gin tonic its real cost
    assert_eq!(
        signal_ids,
        vec![
            ids::REAL_COST_INCOMPLETE,
            ids::UNLINKED_ITEM,
            ids::STALE_PURCHASE,
            ids::PRICE_VARIANCE,
            ids::SAVINGS_OPPORTUNITY,
        ]
    );
    let insight_order: Vec<&str> = report.insights.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        insight_order,
        vec![insight_ids::UNLINKED_ITEMS, insight_ids::SUPPLIER_SAVINGS]
    );
    assert_eq!(report.signals_at_least(Severity::Warning).len(), 3);
}

#[test]
fn test_analysis_is_deterministic() {
    let mut snapshot = common::snapshot();
    snapshot.stock[0].average_unit_cost = 0.0;
    let config = EngineConfig::default();

    let first = serde_json::to_string(&analyze(&snapshot, &config)).unwrap();
    let second = serde_json::to_string(&analyze(&snapshot, &config)).unwrap();
    assert_eq!(first, second);
}
