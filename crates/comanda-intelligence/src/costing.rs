// ABOUTME: Recipe cost calculation from ingredient purchase records and stock averages
// ABOUTME: Bridges mismatched unit axes heuristically and degrades to zero-cost lines, never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Cost Calculator
//!
//! Costs each recipe line against the ingredient's purchase record:
//!
//! | Package base | Usage base | Method |
//! |---|---|---|
//! | same axis | same axis | price per base unit times usage |
//! | mass | volume (or reverse) | 1 g = 1 ml, then same axis |
//! | count | mass or volume | per-container price over the inferred container size |
//! | unknown | unknown | literal unit match, else zero |
//!
//! Any other combination, a missing record, a non-positive price or an empty
//! package yields a zero-cost line tagged with a [`LineStatus`] explaining why.
//! The total is always returned.

use std::collections::HashMap;

use comanda_core::constants::containers::{
    DEFAULT_CONTAINER_SIZE, GALLON_FALSE_FRIENDS, GALLON_MARKERS, GALLON_SIZE, NUMERIC_MARKERS,
};
use comanda_core::constants::units::DENSITY_APPROXIMATION;
use comanda_core::models::{CostMetrics, PurchaseRecord, Recipe, RecipeLineItem, StockItem};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::units::{normalize, BaseUnit, NormalizedQuantity};

/// Why a line cost what it cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStatus {
    /// Priced normally
    Costed,
    /// No purchase record for the ingredient
    MissingIngredient,
    /// Purchase price is zero or negative
    Unpriced,
    /// Package and usage units cannot be reconciled
    UnitMismatch,
    /// Package quantity is zero or negative
    InvalidPackage,
}

/// Which branch priced the line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostMethod {
    /// Package and usage share an axis
    SameBase,
    /// Mass and volume bridged at 1 g = 1 ml
    DensityApproximation,
    /// Counted package priced through its container size
    ContainerSize,
    /// Both units unrecognized but spelled the same
    LiteralUnit,
    /// Not priced
    None,
}

/// Cost of one recipe line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostedLineItem {
    /// Ingredient id
    pub ingredient_id: String,
    /// Usage quantity as written in the recipe
    pub quantity: f64,
    /// Usage unit as written in the recipe
    pub unit: String,
    /// Line cost (zero when not priced)
    pub cost: f64,
    /// Price per usage base unit, when priced
    pub unit_price: Option<f64>,
    /// Outcome
    pub status: LineStatus,
    /// Pricing branch taken
    pub method: CostMethod,
}

impl CostedLineItem {
    fn zero(line: &RecipeLineItem, status: LineStatus) -> Self {
        Self {
            ingredient_id: line.ingredient_id.clone(),
            quantity: line.quantity,
            unit: line.unit.clone(),
            cost: 0.0,
            unit_price: None,
            status,
            method: CostMethod::None,
        }
    }

    fn priced(line: &RecipeLineItem, unit_price: f64, cost: f64, method: CostMethod) -> Self {
        Self {
            ingredient_id: line.ingredient_id.clone(),
            quantity: line.quantity,
            unit: line.unit.clone(),
            cost,
            unit_price: Some(unit_price),
            status: LineStatus::Costed,
            method,
        }
    }

    /// Whether this line did not contribute a real cost
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.status != LineStatus::Costed
    }
}

/// Cost of a whole recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCost {
    /// Recipe id
    pub recipe_id: String,
    /// Sum of all line costs
    pub total: f64,
    /// Per-line breakdown, in recipe order
    pub per_line_item: Vec<CostedLineItem>,
}

impl RecipeCost {
    /// Whether every line was priced
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.per_line_item.iter().all(|line| !line.is_incomplete())
    }

    /// Number of lines that were not priced
    #[must_use]
    pub fn incomplete_count(&self) -> usize {
        self.per_line_item
            .iter()
            .filter(|line| line.is_incomplete())
            .count()
    }
}

/// Stock-based cost of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealCost {
    /// Recipe id
    pub recipe_id: String,
    /// Total, or `None` when any line lacks a priced stock item
    pub value: Option<f64>,
    /// Lines without a usable stock item
    pub missing_stock_count: usize,
}

/// Build the cost rule input from theoretical and real costs of one recipe
#[must_use]
pub fn cost_metrics(theoretical: &RecipeCost, real: &RealCost) -> CostMetrics {
    CostMetrics {
        recipe_id: theoretical.recipe_id.clone(),
        theoretical_cost: theoretical.total,
        real_cost: real.value,
        missing_stock_count: real.missing_stock_count,
    }
}

/// Purchase records indexed by ingredient id
///
/// The first record for an id wins; later duplicates are ignored.
#[derive(Debug, Clone, Default)]
pub struct IngredientCatalog<'a> {
    by_id: HashMap<&'a str, &'a PurchaseRecord>,
}

impl<'a> IngredientCatalog<'a> {
    /// Index a slice of purchase records
    #[must_use]
    pub fn new(records: &'a [PurchaseRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for record in records {
            if by_id.contains_key(record.ingredient_id.as_str()) {
                debug!(ingredient_id = %record.ingredient_id, "duplicate purchase record ignored");
                continue;
            }
            by_id.insert(record.ingredient_id.as_str(), record);
        }
        Self { by_id }
    }

    /// Look up a purchase record
    #[must_use]
    pub fn get(&self, ingredient_id: &str) -> Option<&'a PurchaseRecord> {
        self.by_id.get(ingredient_id).copied()
    }

    /// Number of indexed ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Stateless recipe cost calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct CostCalculator;

impl CostCalculator {
    /// Cost a recipe against the catalog
    #[must_use]
    pub fn cost(recipe: &Recipe, catalog: &IngredientCatalog<'_>) -> RecipeCost {
        let per_line_item: Vec<CostedLineItem> = recipe
            .line_items
            .iter()
            .map(|line| Self::cost_line(line, catalog.get(&line.ingredient_id)))
            .collect();
        let total = per_line_item
            .iter()
            .fold(0.0, |total, line| total + line.cost);

        RecipeCost {
            recipe_id: recipe.id.clone(),
            total,
            per_line_item,
        }
    }

    /// Cost many recipes in parallel, preserving input order
    #[must_use]
    pub fn cost_all(recipes: &[Recipe], catalog: &IngredientCatalog<'_>) -> Vec<RecipeCost> {
        recipes
            .par_iter()
            .map(|recipe| Self::cost(recipe, catalog))
            .collect()
    }

    /// Cost a single line against an optional purchase record
    #[must_use]
    pub fn cost_line(line: &RecipeLineItem, record: Option<&PurchaseRecord>) -> CostedLineItem {
        let Some(record) = record else {
            debug!(ingredient_id = %line.ingredient_id, "no purchase record, line costs 0");
            return CostedLineItem::zero(line, LineStatus::MissingIngredient);
        };
        if record.price.is_nan() || record.price <= 0.0 {
            debug!(
                ingredient_id = %line.ingredient_id,
                price = record.price,
                "ingredient not priced, line costs 0"
            );
            return CostedLineItem::zero(line, LineStatus::Unpriced);
        }

        let package = normalize(record.package_quantity, &record.package_unit);
        let usage = normalize(line.quantity, &line.unit);

        let costed = match (package.base, usage.base) {
            (Some(package_base), Some(usage_base)) if package_base == usage_base => {
                Self::per_base_unit(
                    line,
                    record,
                    package.quantity,
                    usage.quantity,
                    CostMethod::SameBase,
                )
            }
            (Some(package_base), Some(usage_base))
                if package_base.is_physical() && usage_base.is_physical() =>
            {
                let usage_quantity = bridge_density(usage.quantity, usage_base, package_base);
                Self::per_base_unit(
                    line,
                    record,
                    package.quantity,
                    usage_quantity,
                    CostMethod::DensityApproximation,
                )
            }
            (Some(BaseUnit::Count), Some(usage_base)) if usage_base.is_physical() => {
                Self::per_container(line, record, &package, &usage)
            }
            (None, None) => Self::literal_unit(line, record, &package, &usage),
            _ => {
                warn!(
                    ingredient_id = %line.ingredient_id,
                    package_unit = %record.package_unit,
                    usage_unit = %line.unit,
                    "unit mismatch between package and usage, line costs 0"
                );
                CostedLineItem::zero(line, LineStatus::UnitMismatch)
            }
        };

        apply_waste(costed, record)
    }

    fn per_base_unit(
        line: &RecipeLineItem,
        record: &PurchaseRecord,
        package_quantity: f64,
        usage_quantity: f64,
        method: CostMethod,
    ) -> CostedLineItem {
        if package_quantity <= 0.0 {
            return invalid_package(line, record);
        }
        let unit_price = record.price / package_quantity;
        CostedLineItem::priced(line, unit_price, usage_quantity * unit_price, method)
    }

    fn per_container(
        line: &RecipeLineItem,
        record: &PurchaseRecord,
        package: &NormalizedQuantity,
        usage: &NormalizedQuantity,
    ) -> CostedLineItem {
        if package.quantity <= 0.0 {
            return invalid_package(line, record);
        }
        let per_container_price = record.price / package.quantity;
        let container_size = container_size(record);
        let unit_price = per_container_price / container_size;
        CostedLineItem::priced(
            line,
            unit_price,
            usage.quantity * unit_price,
            CostMethod::ContainerSize,
        )
    }

    fn literal_unit(
        line: &RecipeLineItem,
        record: &PurchaseRecord,
        package: &NormalizedQuantity,
        usage: &NormalizedQuantity,
    ) -> CostedLineItem {
        if package.unit.symbol() != usage.unit.symbol() {
            warn!(
                ingredient_id = %line.ingredient_id,
                package_unit = %record.package_unit,
                usage_unit = %line.unit,
                "unrecognized units do not match, line costs 0"
            );
            return CostedLineItem::zero(line, LineStatus::UnitMismatch);
        }
        if record.package_quantity <= 0.0 {
            return invalid_package(line, record);
        }
        let unit_price = record.price / record.package_quantity;
        CostedLineItem::priced(
            line,
            unit_price,
            (line.quantity / record.package_quantity) * record.price,
            CostMethod::LiteralUnit,
        )
    }

    /// Stock-based cost: each line priced at its linked stock item's average cost
    ///
    /// A stock item is read as a package of one `unit` priced at
    /// `average_unit_cost`. Lines without a linked stock item, with an
    /// unpriced one, or whose units cannot be reconciled count as missing.
    #[must_use]
    pub fn real_cost(recipe: &Recipe, stock: &[StockItem]) -> RealCost {
        let mut by_ingredient: HashMap<&str, &StockItem> = HashMap::new();
        for item in stock {
            if let Some(ingredient_id) = item.ingredient_id.as_deref() {
                by_ingredient.entry(ingredient_id).or_insert(item);
            }
        }

        let mut total = 0.0;
        let mut missing_stock_count = 0;
        for line in &recipe.line_items {
            let Some(item) = by_ingredient.get(line.ingredient_id.as_str()) else {
                missing_stock_count += 1;
                continue;
            };
            let record = PurchaseRecord::new(
                line.ingredient_id.as_str(),
                item.name.as_str(),
                item.average_unit_cost,
                1.0,
                item.unit.as_str(),
            );
            let costed = Self::cost_line(line, Some(&record));
            if costed.is_incomplete() {
                missing_stock_count += 1;
            } else {
                total += costed.cost;
            }
        }

        RealCost {
            recipe_id: recipe.id.clone(),
            value: (missing_stock_count == 0).then_some(total),
            missing_stock_count,
        }
    }
}

/// Express a usage quantity on the package's axis, assuming 1 g per ml
fn bridge_density(quantity: f64, from: BaseUnit, to: BaseUnit) -> f64 {
    match (from, to) {
        (BaseUnit::Volume, BaseUnit::Mass) => quantity * DENSITY_APPROXIMATION,
        (BaseUnit::Mass, BaseUnit::Volume) => quantity / DENSITY_APPROXIMATION,
        _ => quantity,
    }
}

fn invalid_package(line: &RecipeLineItem, record: &PurchaseRecord) -> CostedLineItem {
    warn!(
        ingredient_id = %line.ingredient_id,
        package_quantity = record.package_quantity,
        "package quantity is not positive, line costs 0"
    );
    CostedLineItem::zero(line, LineStatus::InvalidPackage)
}

fn apply_waste(mut costed: CostedLineItem, record: &PurchaseRecord) -> CostedLineItem {
    let Some(waste_pct) = record.waste_pct else {
        return costed;
    };
    if costed.is_incomplete() {
        return costed;
    }
    if waste_pct <= 0.0 || waste_pct >= 100.0 {
        debug!(
            ingredient_id = %record.ingredient_id,
            waste_pct,
            "waste percentage out of range, ignored"
        );
        return costed;
    }
    let yield_ratio = 1.0 - waste_pct / 100.0;
    costed.cost /= yield_ratio;
    costed.unit_price = costed.unit_price.map(|price| price / yield_ratio);
    costed
}

/// Physical size of one counted container of this ingredient
///
/// An explicit `container_size` wins. Otherwise the name is searched for
/// bottle and can markers (`700`, `750`, `330`, `355`, then gallon
/// spellings that are not part of `galleta`); the first hit wins and
/// nothing matching means 1000.
#[must_use]
pub fn container_size(record: &PurchaseRecord) -> f64 {
    if let Some(size) = record.container_size.filter(|size| *size > 0.0) {
        return size;
    }
    infer_container_size(&record.name)
}

/// Container size inferred from a free-text ingredient name
#[must_use]
pub fn infer_container_size(name: &str) -> f64 {
    let name = name.to_lowercase();
    if let Some((_, size)) = NUMERIC_MARKERS
        .iter()
        .find(|(marker, _)| name.contains(marker))
    {
        return *size;
    }
    if mentions_gallon(&name) {
        return GALLON_SIZE;
    }
    DEFAULT_CONTAINER_SIZE
}

fn mentions_gallon(name: &str) -> bool {
    let mut scrubbed = name.to_owned();
    for false_friend in GALLON_FALSE_FRIENDS {
        scrubbed = scrubbed.replace(false_friend, " ");
    }
    GALLON_MARKERS.iter().any(|marker| scrubbed.contains(marker))
}

/// Cost a recipe against purchase records using the default calculator
#[must_use]
pub fn cost(recipe: &Recipe, catalog: &IngredientCatalog<'_>) -> RecipeCost {
    CostCalculator::cost(recipe, catalog)
}

/// Cost many recipes in parallel, preserving input order
#[must_use]
pub fn cost_recipes(recipes: &[Recipe], catalog: &IngredientCatalog<'_>) -> Vec<RecipeCost> {
    CostCalculator::cost_all(recipes, catalog)
}

/// Stock-based cost of a recipe
#[must_use]
pub fn real_cost(recipe: &Recipe, stock: &[StockItem]) -> RealCost {
    CostCalculator::real_cost(recipe, stock)
}
