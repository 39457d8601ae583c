// ABOUTME: Criterion benchmarks for costing, signal evaluation, and full analysis
// ABOUTME: Measures throughput over synthetic menus of increasing size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Criterion benchmarks for the costing and signal engines.
//!
//! Menus are generated deterministically so runs are comparable.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, TimeZone, Utc};
use comanda::intelligence::config::EngineConfig;
use comanda::intelligence::costing::{cost_recipes, IngredientCatalog};
use comanda::intelligence::signals::SignalEngine;
use comanda::models::{
    ProductMarket, PurchaseRecord, Recipe, RecipeLineItem, StockItem, SupplierOffer,
};
use comanda::report::analyze;
use comanda::snapshot::Snapshot;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const MENU_SIZES: [usize; 3] = [10, 100, 1000];
const INGREDIENT_COUNT: usize = 200;
const UNITS: [&str; 4] = ["ml", "g", "und", "oz"];

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_snapshot(recipe_count: usize) -> Snapshot {
    let as_of = Utc
        .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);
    let mut snapshot = Snapshot::new(as_of);

    snapshot.ingredients = (0..INGREDIENT_COUNT)
        .map(|index| {
            let unit = if index % 3 == 0 { "l" } else { "kg" };
            PurchaseRecord::new(
                format!("ing-{index}"),
                format!("Ingredient {index}"),
                5.0 + (index % 17) as f64,
                1.0,
                unit,
            )
        })
        .collect();

    snapshot.recipes = (0..recipe_count)
        .map(|index| {
            (0..6).fold(
                Recipe::new(format!("recipe-{index}"), format!("Recipe {index}")),
                |recipe, line| {
                    let ingredient = (index * 7 + line * 13) % INGREDIENT_COUNT;
                    let unit = if ingredient % 3 == 0 { "ml" } else { "g" };
                    recipe.with_line(RecipeLineItem::new(
                        format!("ing-{ingredient}"),
                        10.0 + line as f64,
                        unit,
                    ))
                },
            )
        })
        .collect();

    snapshot.stock = (0..INGREDIENT_COUNT)
        .map(|index| StockItem {
            id: format!("stock-{index}"),
            name: format!("Stock {index}"),
            unit: if index % 3 == 0 { "ml" } else { "g" }.to_owned(),
            average_unit_cost: if index % 11 == 0 { 0.0 } else { 0.006 },
            quantity_available: 3.0,
            ingredient_id: (index % 13 != 0).then(|| format!("ing-{index}")),
            last_purchase_at: Some(as_of - Duration::days((index % 90) as i64)),
        })
        .collect();

    snapshot.market = (0..INGREDIENT_COUNT)
        .map(|index| ProductMarket {
            product_id: format!("ing-{index}"),
            name: format!("Ingredient {index}"),
            offers: (0..3)
                .map(|supplier| SupplierOffer {
                    supplier_id: format!("supplier-{supplier}"),
                    price: 4.0 + (supplier * (index % 5)) as f64,
                    quantity: 1.0,
                    unit: UNITS[supplier % UNITS.len()].to_owned(),
                    updated_at: as_of - Duration::days(((index + supplier) % 45) as i64),
                })
                .collect(),
            reference_unit_price: Some(0.006),
        })
        .collect();

    snapshot
}

fn bench_cost_recipes(c: &mut Criterion) {
    let mut group = c.benchmark_group("costing");

    for size in MENU_SIZES {
        let snapshot = generate_snapshot(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("cost_recipes", size),
            &snapshot,
            |b, snapshot| {
                let catalog = IngredientCatalog::new(&snapshot.ingredients);
                b.iter(|| cost_recipes(black_box(&snapshot.recipes), black_box(&catalog)));
            },
        );
    }

    group.finish();
}

fn bench_signal_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("signals");
    let snapshot = generate_snapshot(10);
    let engine = SignalEngine::new();

    group.throughput(Throughput::Elements(snapshot.stock.len() as u64));
    group.bench_function("evaluate_stock_batch", |b| {
        b.iter(|| engine.evaluate_stock_batch(black_box(&snapshot.stock), snapshot.as_of));
    });

    group.throughput(Throughput::Elements(snapshot.market.len() as u64));
    group.bench_function("evaluate_market_batch", |b| {
        b.iter(|| engine.evaluate_market_batch(black_box(&snapshot.market), snapshot.as_of));
    });

    group.finish();
}

fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let config = EngineConfig::default();

    for size in MENU_SIZES {
        let snapshot = generate_snapshot(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("analyze", size), &snapshot, |b, snapshot| {
            b.iter(|| analyze(black_box(snapshot), black_box(&config)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_cost_recipes,
    bench_signal_batches,
    bench_full_analysis,
);
criterion_main!(benches);
