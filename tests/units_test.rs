// ABOUTME: Integration tests for unit alias resolution and normalization
// ABOUTME: Covers canonical idempotence, conversion factors, round trips, and unknown units
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use comanda::intelligence::units::{normalize, BaseUnit, ParsedUnit, Unit, UnitNormalizer};

mod common;

// ============================================================================
// Canonical units
// ============================================================================

#[test]
fn test_canonical_units_are_idempotent() {
    for (quantity, unit, base) in [
        (42.5, "ml", BaseUnit::Volume),
        (0.0, "g", BaseUnit::Mass),
        (3.0, "und", BaseUnit::Count),
    ] {
        let normalized = normalize(quantity, unit);
        assert!(common::approx_eq(normalized.quantity, quantity));
        assert_eq!(normalized.base, Some(base));
    }
}

#[test]
fn test_normalizing_twice_changes_nothing() {
    let once = normalize(2.0, "kg");
    let twice = normalize(once.quantity, BaseUnit::Mass.symbol());
    assert!(common::approx_eq(once.quantity, twice.quantity));
    assert_eq!(once.base, twice.base);
}

// ============================================================================
// Conversions
// ============================================================================

#[test]
fn test_conversion_factors() {
    let cases = [
        (2.0, "cl", 20.0, BaseUnit::Volume),
        (1.0, "oz", 29.57, BaseUnit::Volume),
        (1.5, "kg", 1500.0, BaseUnit::Mass),
        (2.0, "tbsp", 30.0, BaseUnit::Volume),
        (1.0, "litro", 1000.0, BaseUnit::Volume),
        (1.0, "L", 1000.0, BaseUnit::Volume),
        (1.0, "gal", 3785.41, BaseUnit::Volume),
        (2.0, "docena", 24.0, BaseUnit::Count),
        (500.0, "mg", 0.5, BaseUnit::Mass),
    ];
    for (quantity, unit, expected, base) in cases {
        let normalized = normalize(quantity, unit);
        assert!(
            (normalized.quantity - expected).abs() < 1e-9,
            "{quantity} {unit} should be {expected}, got {}",
            normalized.quantity
        );
        assert_eq!(normalized.base, Some(base), "base of {unit}");
    }
}

#[test]
fn test_round_trip_through_base() {
    for unit in Unit::ALL {
        let base_quantity = UnitNormalizer::normalize(7.25, unit.symbol()).quantity;
        let back = unit.from_base(base_quantity);
        assert!((back - 7.25).abs() < 1e-9, "round trip through {unit}");
    }
}

#[test]
fn test_alias_resolution_is_case_and_space_insensitive() {
    assert_eq!(ParsedUnit::parse("  Litros "), ParsedUnit::Known(Unit::Liter));
    assert_eq!(ParsedUnit::parse("Lt."), ParsedUnit::Known(Unit::Liter));
    assert_eq!(ParsedUnit::parse("KG"), ParsedUnit::Known(Unit::Kilogram));
    assert_eq!(ParsedUnit::parse("Cucharada"), ParsedUnit::Known(Unit::Tablespoon));
    assert_eq!(ParsedUnit::parse("unidad"), ParsedUnit::Known(Unit::Each));
}

#[test]
fn test_mass_and_volume_never_mix() {
    assert_eq!(normalize(1.0, "kg").base, Some(BaseUnit::Mass));
    assert_eq!(normalize(1.0, "l").base, Some(BaseUnit::Volume));
}

// ============================================================================
// Unknown units
// ============================================================================

#[test]
fn test_unknown_unit_passes_through() {
    let normalized = normalize(3.0, "Botella");
    assert!(common::approx_eq(normalized.quantity, 3.0));
    assert_eq!(normalized.base, None);
    assert!(!normalized.is_known());
    assert_eq!(normalized.unit, ParsedUnit::Unrecognized("botella".to_owned()));
    assert_eq!(normalized.unit.symbol(), "botella");
}

#[test]
fn test_empty_unit_is_unrecognized() {
    let normalized = normalize(1.0, "");
    assert_eq!(normalized.base, None);
    assert_eq!(normalized.unit, ParsedUnit::Unrecognized(String::new()));
}
