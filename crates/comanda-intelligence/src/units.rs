// ABOUTME: Unit normalization for purchase and usage quantities
// ABOUTME: Resolves unit aliases to a tagged enum and converts into mass, volume, or count bases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Unit Normalizer
//!
//! Every quantity is reduced to one of three canonical axes before any
//! arithmetic happens: mass (`g`), volume (`ml`) or count (`und`).
//!
//! Resolution is total. An alias that is not in the table becomes
//! [`ParsedUnit::Unrecognized`] and normalizes to an unknown base with the
//! quantity untouched; nothing here returns an error. Mass and volume are
//! never mixed in this module.

use comanda_core::constants::units::{
    GRAMS_PER_KG, GRAMS_PER_LB, GRAMS_PER_MG, ML_PER_CENTILITER, ML_PER_CUP, ML_PER_DECILITER,
    ML_PER_FL_OZ, ML_PER_GALLON, ML_PER_LITER, ML_PER_TBSP, ML_PER_TSP, UNITS_PER_DOZEN,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Canonical measurement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseUnit {
    /// Grams
    Mass,
    /// Milliliters
    Volume,
    /// Whole units
    Count,
}

impl BaseUnit {
    /// Canonical symbol of the axis
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Mass => "g",
            Self::Volume => "ml",
            Self::Count => "und",
        }
    }

    /// Mass and volume can be bridged with a density approximation; count cannot
    #[must_use]
    pub const fn is_physical(&self) -> bool {
        matches!(self, Self::Mass | Self::Volume)
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Supported measurement units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Milliliters (canonical volume)
    Milliliter,
    /// Centiliters (10 ml)
    Centiliter,
    /// Deciliters (100 ml)
    Deciliter,
    /// Liters (1000 ml)
    Liter,
    /// Fluid ounces (29.57 ml)
    FluidOunce,
    /// Tablespoons (15 ml)
    Tablespoon,
    /// Teaspoons (5 ml)
    Teaspoon,
    /// US cups (240 ml)
    Cup,
    /// US gallons (3785.41 ml)
    Gallon,
    /// Grams (canonical mass)
    Gram,
    /// Milligrams (0.001 g)
    Milligram,
    /// Kilograms (1000 g)
    Kilogram,
    /// Pounds (453.6 g)
    Pound,
    /// Whole units (canonical count)
    Each,
    /// Dozens (12 und)
    Dozen,
}

impl Unit {
    /// Every supported unit, in table order
    pub const ALL: [Self; 15] = [
        Self::Milliliter,
        Self::Centiliter,
        Self::Deciliter,
        Self::Liter,
        Self::FluidOunce,
        Self::Tablespoon,
        Self::Teaspoon,
        Self::Cup,
        Self::Gallon,
        Self::Gram,
        Self::Milligram,
        Self::Kilogram,
        Self::Pound,
        Self::Each,
        Self::Dozen,
    ];

    /// Resolve an already lowercased, trimmed alias
    fn from_alias(alias: &str) -> Option<Self> {
        let unit = match alias {
            "ml" | "mililitro" | "mililitros" | "milliliter" | "milliliters" | "millilitre"
            | "cc" => Self::Milliliter,
            "cl" | "centilitro" | "centilitros" | "centiliter" => Self::Centiliter,
            "dl" | "decilitro" | "decilitros" | "deciliter" => Self::Deciliter,
            "l" | "lt" | "lts" | "litro" | "litros" | "liter" | "liters" | "litre" => Self::Liter,
            "oz" | "fl oz" | "floz" | "onza" | "onzas" | "ounce" | "ounces" => Self::FluidOunce,
            "tbsp" | "cucharada" | "cucharadas" | "tablespoon" | "tablespoons" => Self::Tablespoon,
            "tsp" | "cucharadita" | "cucharaditas" | "teaspoon" | "teaspoons" => Self::Teaspoon,
            "cup" | "cups" | "taza" | "tazas" => Self::Cup,
            "gal" | "galon" | "galón" | "galones" | "gallon" | "gallons" => Self::Gallon,
            "g" | "gr" | "grs" | "gramo" | "gramos" | "gram" | "grams" => Self::Gram,
            "mg" | "miligramo" | "miligramos" | "milligram" | "milligrams" => Self::Milligram,
            "kg" | "kgs" | "kilo" | "kilos" | "kilogramo" | "kilogramos" | "kilogram"
            | "kilograms" => Self::Kilogram,
            "lb" | "lbs" | "libra" | "libras" | "pound" | "pounds" => Self::Pound,
            "und" | "un" | "u" | "unidad" | "unidades" | "unit" | "units" | "pcs" | "pc"
            | "pieza" | "piezas" | "ea" | "each" => Self::Each,
            "docena" | "docenas" | "dozen" | "dz" => Self::Dozen,
            _ => return None,
        };
        Some(unit)
    }

    /// Canonical symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Milliliter => "ml",
            Self::Centiliter => "cl",
            Self::Deciliter => "dl",
            Self::Liter => "l",
            Self::FluidOunce => "oz",
            Self::Tablespoon => "tbsp",
            Self::Teaspoon => "tsp",
            Self::Cup => "cup",
            Self::Gallon => "gal",
            Self::Gram => "g",
            Self::Milligram => "mg",
            Self::Kilogram => "kg",
            Self::Pound => "lb",
            Self::Each => "und",
            Self::Dozen => "dz",
        }
    }

    /// Axis this unit measures
    #[must_use]
    pub const fn base(&self) -> BaseUnit {
        match self {
            Self::Milliliter
            | Self::Centiliter
            | Self::Deciliter
            | Self::Liter
            | Self::FluidOunce
            | Self::Tablespoon
            | Self::Teaspoon
            | Self::Cup
            | Self::Gallon => BaseUnit::Volume,
            Self::Gram | Self::Milligram | Self::Kilogram | Self::Pound => BaseUnit::Mass,
            Self::Each | Self::Dozen => BaseUnit::Count,
        }
    }

    /// Factor into the axis' canonical symbol
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Milliliter | Self::Gram | Self::Each => 1.0,
            Self::Centiliter => ML_PER_CENTILITER,
            Self::Deciliter => ML_PER_DECILITER,
            Self::Liter => ML_PER_LITER,
            Self::FluidOunce => ML_PER_FL_OZ,
            Self::Tablespoon => ML_PER_TBSP,
            Self::Teaspoon => ML_PER_TSP,
            Self::Cup => ML_PER_CUP,
            Self::Gallon => ML_PER_GALLON,
            Self::Milligram => GRAMS_PER_MG,
            Self::Kilogram => GRAMS_PER_KG,
            Self::Pound => GRAMS_PER_LB,
            Self::Dozen => UNITS_PER_DOZEN,
        }
    }

    /// Whether this unit is the canonical symbol of its axis
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        matches!(self, Self::Milliliter | Self::Gram | Self::Each)
    }

    /// Convert a base quantity back into this unit
    #[must_use]
    pub fn from_base(&self, base_quantity: f64) -> f64 {
        base_quantity / self.factor()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Result of resolving a free-text unit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsedUnit {
    /// A supported unit
    Known(Unit),
    /// Anything else, lowercased and trimmed
    Unrecognized(String),
}

impl ParsedUnit {
    /// Resolve a unit string through the alias table
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace and a
    /// trailing period (`"Lt."`, `" KG "`).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().trim_end_matches('.').to_lowercase();
        Unit::from_alias(&normalized).map_or(Self::Unrecognized(normalized), Self::Known)
    }

    /// The known unit, if any
    #[must_use]
    pub const fn known(&self) -> Option<Unit> {
        match self {
            Self::Known(unit) => Some(*unit),
            Self::Unrecognized(_) => None,
        }
    }

    /// Canonical symbol, or the normalized raw string
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Known(unit) => unit.symbol(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

/// A quantity reduced to a canonical axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedQuantity {
    /// Quantity in the base's canonical symbol (unchanged when the base is unknown)
    pub quantity: f64,
    /// Canonical axis; `None` when the unit was not recognized
    pub base: Option<BaseUnit>,
    /// How the input unit resolved
    pub unit: ParsedUnit,
}

impl NormalizedQuantity {
    /// Whether the unit resolved to a known axis
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.base.is_some()
    }
}

/// Stateless normalizer over the alias and conversion tables
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitNormalizer;

impl UnitNormalizer {
    /// Convert `(quantity, unit)` into its canonical base quantity
    #[must_use]
    pub fn normalize(quantity: f64, unit: &str) -> NormalizedQuantity {
        let parsed = ParsedUnit::parse(unit);
        match parsed.known() {
            Some(known) if known.is_canonical() => NormalizedQuantity {
                quantity,
                base: Some(known.base()),
                unit: parsed,
            },
            Some(known) => NormalizedQuantity {
                quantity: quantity * known.factor(),
                base: Some(known.base()),
                unit: parsed,
            },
            None => {
                debug!(unit = %unit, "unrecognized unit, leaving quantity unconverted");
                NormalizedQuantity {
                    quantity,
                    base: None,
                    unit: parsed,
                }
            }
        }
    }
}

/// Convert `(quantity, unit)` into its canonical base quantity
#[must_use]
pub fn normalize(quantity: f64, unit: &str) -> NormalizedQuantity {
    UnitNormalizer::normalize(quantity, unit)
}
