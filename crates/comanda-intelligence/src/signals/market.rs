// ABOUTME: Market rule set over supplier offers for one product
// ABOUTME: Flags single-supplier risk, price spread, savings opportunities, and stale prices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Market rules
//!
//! Offers are normalized to a price per canonical base unit before any
//! comparison, and only offers on one shared axis are compared. Offers with
//! an unrecognized unit, a non-positive price or quantity, or another axis
//! are left out of price comparisons but still count towards price freshness.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use comanda_core::models::{ProductMarket, Scope, Severity, Signal, SignalType};
use tracing::debug;

use super::{ids, round_pct, RuleEntry};
use crate::config::SignalThresholds;
use crate::units::{normalize, BaseUnit};

/// One offer reduced to a price per base unit
#[derive(Debug, Clone, PartialEq)]
pub struct UnitOffer<'a> {
    /// Supplier id
    pub supplier_id: &'a str,
    /// Axis the unit price is expressed on
    pub base: BaseUnit,
    /// Price per canonical base unit
    pub unit_price: f64,
}

/// Precomputed view of a product's offers shared by the market rules
#[derive(Debug, Clone)]
pub struct MarketView<'a> {
    /// Product under evaluation
    pub market: &'a ProductMarket,
    /// Evaluation instant
    pub as_of: DateTime<Utc>,
    /// Axis prices are compared on: the one most valid offers use, earliest on ties
    pub axis: Option<BaseUnit>,
    /// Valid offers on `axis`, in input order
    pub offers: Vec<UnitOffer<'a>>,
    /// Distinct suppliers with a comparable offer
    pub supplier_count: usize,
    /// Cheapest comparable offer
    pub cheapest: Option<UnitOffer<'a>>,
    /// Dearest comparable offer
    pub dearest: Option<UnitOffer<'a>>,
    /// Most recent supplier update across all offers
    pub freshest_update: Option<DateTime<Utc>>,
}

impl<'a> MarketView<'a> {
    /// Normalize and summarize a product's offers
    #[must_use]
    pub fn new(market: &'a ProductMarket, as_of: DateTime<Utc>) -> Self {
        let valid: Vec<UnitOffer<'a>> = market
            .offers
            .iter()
            .filter_map(|offer| {
                let normalized = normalize(offer.quantity, &offer.unit);
                let Some(base) = normalized.base else {
                    debug!(
                        product_id = %market.product_id,
                        supplier_id = %offer.supplier_id,
                        unit = %offer.unit,
                        "offer with unrecognized unit left out of price comparison"
                    );
                    return None;
                };
                if offer.price <= 0.0 || normalized.quantity <= 0.0 {
                    debug!(
                        product_id = %market.product_id,
                        supplier_id = %offer.supplier_id,
                        "offer without usable price or quantity skipped"
                    );
                    return None;
                }
                Some(UnitOffer {
                    supplier_id: offer.supplier_id.as_str(),
                    base,
                    unit_price: offer.price / normalized.quantity,
                })
            })
            .collect();

        let axis = comparison_axis(&valid);
        let offers: Vec<UnitOffer<'a>> = valid
            .into_iter()
            .filter(|offer| {
                let comparable = Some(offer.base) == axis;
                if !comparable {
                    debug!(
                        product_id = %market.product_id,
                        supplier_id = %offer.supplier_id,
                        base = %offer.base,
                        "offer on another axis left out of price comparison"
                    );
                }
                comparable
            })
            .collect();

        let supplier_count = offers
            .iter()
            .map(|offer| offer.supplier_id)
            .collect::<BTreeSet<_>>()
            .len();
        let cheapest = offers
            .iter()
            .min_by(|a, b| a.unit_price.total_cmp(&b.unit_price))
            .cloned();
        let dearest = offers
            .iter()
            .max_by(|a, b| a.unit_price.total_cmp(&b.unit_price))
            .cloned();
        let freshest_update = market.offers.iter().map(|offer| offer.updated_at).max();

        Self {
            market,
            as_of,
            axis,
            offers,
            supplier_count,
            cheapest,
            dearest,
            freshest_update,
        }
    }

    fn signal(&self, id: &str, severity: Severity, message: &str) -> Signal {
        Signal::new(id, SignalType::Market, severity, Scope::Product, message)
            .with_subject(self.market.product_id.as_str())
            .with_context("product_id", self.market.product_id.as_str())
            .with_context("supplier_count", self.supplier_count)
    }
}

/// Axis shared by the most offers; the earliest axis wins a tie
fn comparison_axis(offers: &[UnitOffer<'_>]) -> Option<BaseUnit> {
    let mut counts: Vec<(BaseUnit, usize)> = Vec::new();
    for offer in offers {
        match counts.iter_mut().find(|(base, _)| *base == offer.base) {
            Some((_, count)) => *count += 1,
            None => counts.push((offer.base, 1)),
        }
    }
    counts
        .iter()
        .rev()
        .max_by_key(|(_, count)| *count)
        .map(|(base, _)| *base)
}

/// Market rule signature
pub type MarketRule = fn(&MarketView<'_>, &SignalThresholds) -> Option<Signal>;

/// Market rules, in evaluation order
pub const RULES: &[RuleEntry<MarketRule>] = &[
    RuleEntry {
        id: ids::SINGLE_SUPPLIER,
        rule: single_supplier,
    },
    RuleEntry {
        id: ids::PRICE_VARIANCE,
        rule: price_variance,
    },
    RuleEntry {
        id: ids::SAVINGS_OPPORTUNITY,
        rule: savings_opportunity,
    },
    RuleEntry {
        id: ids::STALE_PRICE,
        rule: stale_price,
    },
];

/// Evaluate every market rule against one product
#[must_use]
pub fn evaluate(
    market: &ProductMarket,
    as_of: DateTime<Utc>,
    thresholds: &SignalThresholds,
) -> Vec<Signal> {
    let view = MarketView::new(market, as_of);
    RULES
        .iter()
        .filter_map(|entry| (entry.rule)(&view, thresholds))
        .collect()
}

fn single_supplier(view: &MarketView<'_>, _: &SignalThresholds) -> Option<Signal> {
    if view.supplier_count != 1 {
        return None;
    }
    let only = view.cheapest.as_ref()?;
    Some(
        view.signal(ids::SINGLE_SUPPLIER, Severity::Info, "Single supplier")
            .with_explanation(format!(
                "Only {} offers this product; there is no price to compare against.",
                only.supplier_id
            ))
            .with_context("supplier_id", only.supplier_id),
    )
}

fn price_variance(view: &MarketView<'_>, thresholds: &SignalThresholds) -> Option<Signal> {
    if view.supplier_count < 2 {
        return None;
    }
    let (cheapest, dearest) = (view.cheapest.as_ref()?, view.dearest.as_ref()?);
    let spread = (dearest.unit_price - cheapest.unit_price) / cheapest.unit_price;
    if spread <= thresholds.price_variance_ratio {
        return None;
    }
    Some(
        view.signal(ids::PRICE_VARIANCE, Severity::Warning, "Supplier price variance")
            .with_explanation(format!(
                "{} charges {:.1}% more than {} per unit.",
                dearest.supplier_id,
                spread * 100.0,
                cheapest.supplier_id
            ))
            .with_context("min_unit_price", cheapest.unit_price)
            .with_context("max_unit_price", dearest.unit_price)
            .with_context("cheapest_supplier_id", cheapest.supplier_id)
            .with_context("dearest_supplier_id", dearest.supplier_id)
            .with_context("spread_pct", round_pct(spread * 100.0))
            .with_meta("variance_ratio", thresholds.price_variance_ratio),
    )
}

fn savings_opportunity(view: &MarketView<'_>, thresholds: &SignalThresholds) -> Option<Signal> {
    let reference = view.market.reference_unit_price?;
    let cheapest = view.cheapest.as_ref()?;
    let premium = (reference - cheapest.unit_price) / cheapest.unit_price;
    if premium <= thresholds.savings_ratio {
        return None;
    }
    let savings_pct = premium * 100.0;
    Some(
        view.signal(ids::SAVINGS_OPPORTUNITY, Severity::Info, "Savings opportunity")
            .with_explanation(format!(
                "The current price is {savings_pct:.1}% above the cheapest offer from {}.",
                cheapest.supplier_id
            ))
            .with_context("reference_unit_price", reference)
            .with_context("min_unit_price", cheapest.unit_price)
            .with_context("cheapest_supplier_id", cheapest.supplier_id)
            .with_context("savings_pct", round_pct(savings_pct))
            .with_meta("savings_ratio", thresholds.savings_ratio),
    )
}

fn stale_price(view: &MarketView<'_>, thresholds: &SignalThresholds) -> Option<Signal> {
    let freshest = view.freshest_update?;
    let age = view.as_of - freshest;
    // a window beyond chrono's range never elapses
    let window = Duration::try_days(thresholds.stale_price_days)?;
    if age <= window {
        return None;
    }
    Some(
        view.signal(ids::STALE_PRICE, Severity::Warning, "Stale supplier prices")
            .with_explanation(format!(
                "No supplier has updated prices in {} days.",
                age.num_days()
            ))
            .with_context("freshest_update", freshest.to_rfc3339())
            .with_context("age_days", age.num_days())
            .with_meta("stale_price_days", thresholds.stale_price_days),
    )
}
