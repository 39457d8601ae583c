// ABOUTME: Snapshot of catalog, recipes, stock, and market data fed to the engine
// ABOUTME: Loads and validates a JSON snapshot from disk or a string
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use comanda_core::errors::{AppError, AppResult, ErrorCode};
use comanda_core::models::{ProductMarket, PurchaseRecord, Recipe, StockItem};
use comanda_intelligence::costing::IngredientCatalog;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Everything one evaluation needs, as handed over by the data repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Evaluation instant used by every age-based rule
    pub as_of: DateTime<Utc>,
    /// Ingredient purchase records
    #[serde(default)]
    pub ingredients: Vec<PurchaseRecord>,
    /// Recipes
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Stock items
    #[serde(default)]
    pub stock: Vec<StockItem>,
    /// Supplier offers per product
    #[serde(default)]
    pub market: Vec<ProductMarket>,
}

impl Snapshot {
    /// Empty snapshot at `as_of`
    #[must_use]
    pub const fn new(as_of: DateTime<Utc>) -> Self {
        Self {
            as_of,
            ingredients: Vec::new(),
            recipes: Vec::new(),
            stock: Vec::new(),
            market: Vec::new(),
        }
    }

    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for malformed JSON, `SerializationError` when
    /// the JSON does not match the snapshot shape, and `InvalidInput` when
    /// recipe ids repeat
    pub fn from_json(json: &str) -> AppResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        debug!(
            ingredients = snapshot.ingredients.len(),
            recipes = snapshot.recipes.len(),
            stock = snapshot.stock.len(),
            products = snapshot.market.len(),
            "snapshot parsed"
        );
        Ok(snapshot)
    }

    /// Load a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be read, otherwise the
    /// errors of [`Snapshot::from_json`]
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| {
            AppError::new(
                ErrorCode::StorageError,
                format!("cannot read snapshot {}: {err}", path.display()),
            )
            .with_source(err)
        })?;
        Self::from_json(&json).map_err(|err| {
            let message = format!("{}: {}", path.display(), err.message);
            AppError {
                message,
                ..err
            }
        })
    }

    /// Reject snapshots whose recipe ids repeat; duplicate purchase records only warn
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first repeated recipe id
    pub fn validate(&self) -> AppResult<()> {
        let mut recipe_ids = HashSet::with_capacity(self.recipes.len());
        for recipe in &self.recipes {
            if !recipe_ids.insert(recipe.id.as_str()) {
                return Err(AppError::invalid_input(format!(
                    "duplicate recipe id: {}",
                    recipe.id
                )));
            }
        }

        let mut ingredient_ids = HashSet::with_capacity(self.ingredients.len());
        for record in &self.ingredients {
            if !ingredient_ids.insert(record.ingredient_id.as_str()) {
                warn!(
                    ingredient_id = %record.ingredient_id,
                    "duplicate purchase record, the first one is used"
                );
            }
        }
        Ok(())
    }

    /// Index the purchase records by ingredient id
    #[must_use]
    pub fn catalog(&self) -> IngredientCatalog<'_> {
        IngredientCatalog::new(&self.ingredients)
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }
}
