// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and catalog, stock, and market builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `comanda`
//!
//! Fixtures mirror a small cocktail bar: a bottled spirit, bulk syrup,
//! citrus bought by the piece, and a couple of recipes using them.

use std::env;
use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};
use comanda::models::{
    ProductMarket, PurchaseRecord, Recipe, RecipeLineItem, StockItem, SupplierOffer,
};
use comanda::snapshot::Snapshot;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG raises the level when debugging a failing test
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed evaluation instant
pub fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// `as_of` minus a number of days
pub fn days_ago(days: i64) -> DateTime<Utc> {
    as_of() - Duration::days(days)
}

/// Approximate float equality
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// 700 ml gin bottle at 21.00
pub fn gin() -> PurchaseRecord {
    PurchaseRecord::new("gin", "Gin London Dry 700ml", 21.0, 700.0, "ml")
}

/// 1 l tonic at 2.00
pub fn tonic() -> PurchaseRecord {
    PurchaseRecord::new("tonic", "Agua tonica", 2.0, 1.0, "litro")
}

/// Lemons bought by the kilo at 3.00
pub fn lemon() -> PurchaseRecord {
    PurchaseRecord::new("lemon", "Limon", 3.0, 1.0, "kg")
}

/// Full ingredient catalog
pub fn catalog() -> Vec<PurchaseRecord> {
    vec![gin(), tonic(), lemon()]
}

/// Gin and tonic: 50 ml gin, 200 ml tonic, 10 g lemon
pub fn gin_tonic() -> Recipe {
    Recipe::new("gin-tonic", "Gin Tonic")
        .with_line(RecipeLineItem::new("gin", 50.0, "ml"))
        .with_line(RecipeLineItem::new("tonic", 200.0, "ml"))
        .with_line(RecipeLineItem::new("lemon", 10.0, "g"))
        .with_sale_price(9.0)
}

/// Single gin shot of 30 ml without a sale price
pub fn gin_shot() -> Recipe {
    Recipe::new("gin-shot", "Gin Shot").with_line(RecipeLineItem::new("gin", 30.0, "ml"))
}

/// Stock item linked to an ingredient, purchased `days` ago
pub fn stock_item(id: &str, ingredient_id: Option<&str>, unit: &str, cost: f64) -> StockItem {
    StockItem {
        id: id.to_owned(),
        name: id.to_owned(),
        unit: unit.to_owned(),
        average_unit_cost: cost,
        quantity_available: 10.0,
        ingredient_id: ingredient_id.map(ToOwned::to_owned),
        last_purchase_at: Some(days_ago(5)),
    }
}

/// Stock for every catalog ingredient, priced like the catalog
pub fn stock() -> Vec<StockItem> {
    vec![
        stock_item("stock-gin", Some("gin"), "ml", 0.03),
        stock_item("stock-tonic", Some("tonic"), "ml", 0.002),
        stock_item("stock-lemon", Some("lemon"), "g", 0.003),
    ]
}

/// Supplier offer updated `days` ago
pub fn offer(supplier_id: &str, price: f64, quantity: f64, unit: &str, days: i64) -> SupplierOffer {
    SupplierOffer {
        supplier_id: supplier_id.to_owned(),
        price,
        quantity,
        unit: unit.to_owned(),
        updated_at: days_ago(days),
    }
}

/// Product with the given offers and no reference price
pub fn market(product_id: &str, offers: Vec<SupplierOffer>) -> ProductMarket {
    ProductMarket {
        product_id: product_id.to_owned(),
        name: product_id.to_owned(),
        offers,
        reference_unit_price: None,
    }
}

/// Snapshot with the full catalog, both recipes and matching stock
pub fn snapshot() -> Snapshot {
    let mut snapshot = Snapshot::new(as_of());
    snapshot.ingredients = catalog();
    snapshot.recipes = vec![gin_tonic(), gin_shot()];
    snapshot.stock = stock();
    snapshot.market = vec![market(
        "gin",
        vec![
            offer("distri-norte", 21.0, 700.0, "ml", 3),
            offer("bodega-sur", 20.0, 700.0, "ml", 10),
        ],
    )];
    snapshot
}
