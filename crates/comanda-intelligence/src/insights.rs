// ABOUTME: Insight engine turning signals into user-facing insights with suggested actions
// ABOUTME: Template lookup keyed by signal id; confidence values are static per template
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Insight Engine
//!
//! A template-fill step over the signals of one evaluation. Each template
//! names the signal id it reacts to; when at least one matching signal is
//! present the template produces exactly one [`Insight`]. Its impact value is
//! the number of matching signals and it points back at the first of them.

use comanda_core::constants::confidence;
use comanda_core::models::{
    ActionVariant, ImpactDirection, ImpactFormat, Insight, InsightAction, InsightImpact, Scope,
    Severity, Signal,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::signals::ids;

/// Domain context the templates use to fill their summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightContext {
    /// Recipes whose real cost could not be computed
    pub affected_recipes: usize,
    /// Recipes evaluated
    pub total_recipes: usize,
}

/// Static description of a suggested action
#[derive(Debug, Clone, Copy)]
pub struct ActionTemplate {
    /// Button label
    pub label: &'static str,
    /// Dispatch id
    pub action_id: &'static str,
    /// Visual weight
    pub variant: ActionVariant,
}

impl ActionTemplate {
    fn to_action(self) -> InsightAction {
        InsightAction {
            label: self.label.to_owned(),
            action_id: self.action_id.to_owned(),
            variant: self.variant,
        }
    }
}

/// An insight template keyed by the signal id it reacts to
#[derive(Debug, Clone, Copy)]
pub struct InsightTemplate {
    /// Insight id
    pub id: &'static str,
    /// Signal id that triggers the template
    pub signal_id: &'static str,
    /// Insight scope
    pub scope: Scope,
    /// Insight severity
    pub severity: Severity,
    /// Headline
    pub title: &'static str,
    /// Impact metric name
    pub metric: &'static str,
    /// Impact rendering format
    pub format: ImpactFormat,
    /// Impact direction
    pub direction: ImpactDirection,
    /// Static confidence (0-100)
    pub confidence: u8,
    /// Suggested actions
    pub actions: &'static [ActionTemplate],
    /// Summary writer, given the matching signal count
    pub summary: fn(usize, &InsightContext) -> String,
}

/// Insight ids
pub mod insight_ids {
    /// Stock items without a price block recipe costing
    pub const COST_BLOCKAGE: &str = "cost-blockage";
    /// Stock items not linked to ingredients
    pub const UNLINKED_ITEMS: &str = "unlinked-items";
    /// Recipes whose real cost exceeds their catalog cost
    pub const MARGIN_EROSION: &str = "margin-erosion";
    /// Products with a cheaper supplier available
    pub const SUPPLIER_SAVINGS: &str = "supplier-savings";
}

/// Insight templates, in output order
pub const TEMPLATES: &[InsightTemplate] = &[
    InsightTemplate {
        id: insight_ids::COST_BLOCKAGE,
        signal_id: ids::MISSING_PRICE,
        scope: Scope::Stock,
        severity: Severity::Critical,
        title: "Recipe costing is blocked",
        metric: "items_missing_price",
        format: ImpactFormat::Number,
        direction: ImpactDirection::Down,
        confidence: confidence::COST_BLOCKAGE,
        actions: &[ActionTemplate {
            label: "View affected recipes",
            action_id: "view-affected-recipes",
            variant: ActionVariant::Primary,
        }],
        summary: cost_blockage_summary,
    },
    InsightTemplate {
        id: insight_ids::UNLINKED_ITEMS,
        signal_id: ids::UNLINKED_ITEM,
        scope: Scope::Stock,
        severity: Severity::Info,
        title: "Unlinked stock items",
        metric: "unlinked_items",
        format: ImpactFormat::Number,
        direction: ImpactDirection::Neutral,
        confidence: confidence::UNLINKED_ITEMS,
        actions: &[ActionTemplate {
            label: "Link now",
            action_id: "link-stock-items",
            variant: ActionVariant::Primary,
        }],
        summary: unlinked_items_summary,
    },
    InsightTemplate {
        id: insight_ids::MARGIN_EROSION,
        signal_id: ids::REAL_COST_ABOVE_THEORETICAL,
        scope: Scope::Recipe,
        severity: Severity::Warning,
        title: "Margins are eroding",
        metric: "recipes_above_cost",
        format: ImpactFormat::Number,
        direction: ImpactDirection::Down,
        confidence: confidence::MARGIN_EROSION,
        actions: &[ActionTemplate {
            label: "Review recipe costs",
            action_id: "review-recipe-costs",
            variant: ActionVariant::Primary,
        }],
        summary: margin_erosion_summary,
    },
    InsightTemplate {
        id: insight_ids::SUPPLIER_SAVINGS,
        signal_id: ids::SAVINGS_OPPORTUNITY,
        scope: Scope::Product,
        severity: Severity::Info,
        title: "Supplier savings available",
        metric: "products_with_savings",
        format: ImpactFormat::Number,
        direction: ImpactDirection::Up,
        confidence: confidence::SUPPLIER_SAVINGS,
        actions: &[ActionTemplate {
            label: "Compare suppliers",
            action_id: "compare-suppliers",
            variant: ActionVariant::Secondary,
        }],
        summary: supplier_savings_summary,
    },
];

fn cost_blockage_summary(count: usize, context: &InsightContext) -> String {
    if context.affected_recipes > 0 {
        format!(
            "{count} stock item(s) have no average cost, leaving {} of {} recipe(s) without a real cost.",
            context.affected_recipes, context.total_recipes
        )
    } else {
        format!("{count} stock item(s) have no average cost; recipes using them cannot be costed.")
    }
}

fn unlinked_items_summary(count: usize, _: &InsightContext) -> String {
    format!("{count} stock item(s) are not linked to a master ingredient.")
}

fn margin_erosion_summary(count: usize, context: &InsightContext) -> String {
    if context.total_recipes > 0 {
        format!(
            "{count} of {} recipe(s) cost more from stock than their catalog cost.",
            context.total_recipes
        )
    } else {
        format!("{count} recipe(s) cost more from stock than their catalog cost.")
    }
}

fn supplier_savings_summary(count: usize, _: &InsightContext) -> String {
    format!("{count} product(s) can be bought cheaper from another supplier.")
}

impl InsightTemplate {
    /// Fill the template from the signals it matched
    fn fill(&self, matching: &[&Signal], context: &InsightContext) -> Option<Insight> {
        let first = matching.first()?;
        let count = matching.len();
        Some(Insight {
            id: self.id.to_owned(),
            scope: self.scope,
            severity: self.severity,
            title: self.title.to_owned(),
            summary: (self.summary)(count, context),
            impact: InsightImpact {
                metric: self.metric.to_owned(),
                value: count as f64,
                format: self.format,
                direction: self.direction,
            },
            actions: self.actions.iter().map(|a| a.to_action()).collect(),
            confidence: self.confidence,
            source_signal_id: first.id.clone(),
            subject_ids: matching
                .iter()
                .filter_map(|signal| signal.subject_id.clone())
                .collect(),
        })
    }
}

/// Template-driven insight derivation
#[derive(Debug, Clone, Copy)]
pub struct InsightEngine {
    templates: &'static [InsightTemplate],
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine over the built-in template table
    #[must_use]
    pub const fn new() -> Self {
        Self {
            templates: TEMPLATES,
        }
    }

    /// Create an engine over a custom template table
    #[must_use]
    pub const fn with_templates(templates: &'static [InsightTemplate]) -> Self {
        Self { templates }
    }

    /// Derive insights from one evaluation's signals
    #[must_use]
    pub fn derive_insights(&self, signals: &[Signal], context: &InsightContext) -> Vec<Insight> {
        let insights: Vec<Insight> = self
            .templates
            .iter()
            .filter_map(|template| {
                let matching: Vec<&Signal> = signals
                    .iter()
                    .filter(|s| s.id == template.signal_id)
                    .collect();
                template.fill(&matching, context)
            })
            .collect();
        debug!(
            signals = signals.len(),
            insights = insights.len(),
            "insights derived"
        );
        insights
    }
}

/// Derive insights with the built-in templates
#[must_use]
pub fn derive_insights(signals: &[Signal], context: &InsightContext) -> Vec<Insight> {
    InsightEngine::new().derive_insights(signals, context)
}
