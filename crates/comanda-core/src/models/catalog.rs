// ABOUTME: Catalog records supplied by the data repository
// ABOUTME: Purchases, recipes, stock items, supplier offers, and cost rule metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ingredient's acquisition data
///
/// `price` is what one package costs; `package_quantity` and `package_unit`
/// describe the package. A bottle bought as "1 und" at 21.00 has
/// `package_quantity = 1.0` and `package_unit = "und"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Master ingredient id
    pub ingredient_id: String,
    /// Free-text ingredient name, also used to infer container sizes
    #[serde(default)]
    pub name: String,
    /// Price paid for one package
    pub price: f64,
    /// Quantity contained in one package
    pub package_quantity: f64,
    /// Unit of `package_quantity`
    pub package_unit: String,
    /// Waste or trim percentage (0-100) lost before use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_pct: Option<f64>,
    /// Physical size of one counted container, in canonical base units (`ml` or `g`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_size: Option<f64>,
}

impl PurchaseRecord {
    /// Create a purchase record without waste or container size
    #[must_use]
    pub fn new(
        ingredient_id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        package_quantity: f64,
        package_unit: impl Into<String>,
    ) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            name: name.into(),
            price,
            package_quantity,
            package_unit: package_unit.into(),
            waste_pct: None,
            container_size: None,
        }
    }

    /// Set the waste percentage
    #[must_use]
    pub fn with_waste_pct(mut self, waste_pct: f64) -> Self {
        self.waste_pct = Some(waste_pct);
        self
    }

    /// Set the explicit container size
    #[must_use]
    pub fn with_container_size(mut self, size: f64) -> Self {
        self.container_size = Some(size);
        self
    }
}

/// One ingredient usage inside a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLineItem {
    /// Referenced master ingredient id
    pub ingredient_id: String,
    /// Quantity used
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: String,
}

impl RecipeLineItem {
    /// Create a line item
    #[must_use]
    pub fn new(ingredient_id: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

/// A recipe: an ordered list of line items
///
/// Cost figures are never stored here; they are recomputed from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Ordered ingredient usages
    #[serde(default)]
    pub line_items: Vec<RecipeLineItem>,
    /// Current menu price, if the recipe is on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
}

impl Recipe {
    /// Create an empty recipe
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            line_items: Vec::new(),
            sale_price: None,
        }
    }

    /// Append a line item
    #[must_use]
    pub fn with_line(mut self, line: RecipeLineItem) -> Self {
        self.line_items.push(line);
        self
    }

    /// Set the current sale price
    #[must_use]
    pub fn with_sale_price(mut self, price: f64) -> Self {
        self.sale_price = Some(price);
        self
    }
}

/// An inventory position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    /// Stock item id
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Unit in which the item is counted and costed
    pub unit: String,
    /// Weighted average cost of one `unit`
    pub average_unit_cost: f64,
    /// Quantity on hand, in `unit`
    #[serde(default)]
    pub quantity_available: f64,
    /// Link to the master ingredient, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_id: Option<String>,
    /// Timestamp of the last purchase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_purchase_at: Option<DateTime<Utc>>,
}

/// One supplier's current offer for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierOffer {
    /// Supplier id
    pub supplier_id: String,
    /// Offered price for `quantity` of `unit`
    pub price: f64,
    /// Offered quantity
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: String,
    /// When the supplier last updated this offer
    pub updated_at: DateTime<Utc>,
}

/// All supplier offers for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMarket {
    /// Product id
    pub product_id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Offers keyed by supplier
    #[serde(default)]
    pub offers: Vec<SupplierOffer>,
    /// Price currently paid per canonical base unit, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_unit_price: Option<f64>,
}

/// Input of the cost rule set for one recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostMetrics {
    /// Recipe id
    pub recipe_id: String,
    /// Cost from catalog purchase prices
    pub theoretical_cost: f64,
    /// Cost from stock average costs; `None` when it could not be computed
    pub real_cost: Option<f64>,
    /// Lines whose stock item is missing or unpriced
    pub missing_stock_count: usize,
}
