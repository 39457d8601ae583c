// ABOUTME: Integration tests for price recommendations and margin banding
// ABOUTME: Covers multiplier policy, exact band boundaries, and zero-cost defaults
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use comanda::intelligence::config::PricingConfig;
use comanda::intelligence::pricing::{margin_pct, price, MarginStatus, PricingEngine};

mod common;

use common::approx_eq;

#[test]
fn test_multiplier_policy() {
    let recommendation = price(2.5, None);
    assert!(approx_eq(recommendation.min, 7.5));
    assert!(approx_eq(recommendation.recommended, 10.0));
    assert!(approx_eq(recommendation.premium, 12.5));
}

#[test]
fn test_margin_band_boundaries() {
    // margin exactly 75% -> green
    assert_eq!(price(25.0, Some(100.0)).margin_status, MarginStatus::Green);
    // 74.999% -> yellow
    assert_eq!(price(25.001, Some(100.0)).margin_status, MarginStatus::Yellow);
    // exactly 67% -> yellow
    assert_eq!(price(33.0, Some(100.0)).margin_status, MarginStatus::Yellow);
    // 66.999% -> red
    assert_eq!(price(33.001, Some(100.0)).margin_status, MarginStatus::Red);
}

#[test]
fn test_margin_bands_hold_for_menu_prices() {
    // 2.40 on a 9.60 menu price is exactly a 75% margin
    let recommendation = price(2.40, Some(9.60));
    assert_eq!(recommendation.margin_pct, Some(75.0));
    assert_eq!(recommendation.margin_status, MarginStatus::Green);
    assert!(margin_pct(2.40, 9.60) >= 75.0);
}

#[test]
fn test_margin_percentage() {
    assert!(approx_eq(margin_pct(25.0, 100.0), 75.0));
    assert!(approx_eq(margin_pct(1.93, 9.0), (9.0 - 1.93) / 9.0 * 100.0));
    assert!(approx_eq(margin_pct(5.0, 0.0), 0.0));
}

#[test]
fn test_sale_price_is_evaluated_when_present() {
    let recommendation = price(4.0, Some(10.0));
    assert_eq!(recommendation.evaluated_price, Some(10.0));
    assert!(approx_eq(recommendation.margin_pct.unwrap(), 60.0));
    assert_eq!(recommendation.margin_status, MarginStatus::Red);
}

#[test]
fn test_without_sale_price_recommended_price_is_evaluated() {
    let recommendation = price(0.9, None);
    assert!(approx_eq(recommendation.evaluated_price.unwrap(), 3.6));
    assert!(approx_eq(recommendation.margin_pct.unwrap(), 75.0));
    assert_eq!(recommendation.margin_status, MarginStatus::Green);
}

#[test]
fn test_non_positive_sale_price_is_ignored() {
    let recommendation = price(1.0, Some(0.0));
    assert_eq!(recommendation.evaluated_price, Some(4.0));
    assert_eq!(recommendation.margin_status, MarginStatus::Green);
}

#[test]
fn test_zero_cost_without_sale_price_is_green() {
    let recommendation = price(0.0, None);
    assert!(approx_eq(recommendation.recommended, 0.0));
    assert_eq!(recommendation.evaluated_price, None);
    assert_eq!(recommendation.margin_pct, None);
    assert_eq!(recommendation.margin_status, MarginStatus::Green);
}

#[test]
fn test_non_finite_cost_is_treated_as_zero() {
    let recommendation = price(f64::NAN, None);
    assert!(approx_eq(recommendation.cost, 0.0));
    assert_eq!(recommendation.margin_status, MarginStatus::Green);
}

#[test]
fn test_custom_policy() {
    let engine = PricingEngine::with_config(PricingConfig {
        min_multiplier: 2.0,
        recommended_multiplier: 2.5,
        premium_multiplier: 3.0,
        green_margin_pct: 70.0,
        yellow_margin_pct: 55.0,
    });
    let recommendation = engine.price(10.0, None);
    assert!(approx_eq(recommendation.recommended, 25.0));
    // 60% margin at the recommended price
    assert_eq!(recommendation.margin_status, MarginStatus::Yellow);
    assert_eq!(engine.classify_margin(70.0), MarginStatus::Green);
    assert_eq!(engine.classify_margin(54.9), MarginStatus::Red);
}
