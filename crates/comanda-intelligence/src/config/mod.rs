// ABOUTME: Engine configuration for pricing policy and signal rule thresholds
// ABOUTME: Loads defaults, applies COMANDA_* environment overrides, and validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Engine Configuration
//!
//! - `pricing` - sale price multipliers and margin bands
//! - `signals` - cost, market and stock rule cutoffs
//!
//! Defaults reproduce the fixed policy exactly. Environment variables can
//! override individual values; the result is validated before use.

pub mod error;
pub mod pricing;
pub mod signals;

pub use error::ConfigError;
pub use pricing::PricingConfig;
pub use signals::SignalThresholds;

use comanda_core::constants::rule_limits::MAX_STALE_DAYS;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Environment variable names for overrides
pub mod env_vars {
    /// Minimum price multiplier
    pub const MIN_MULTIPLIER: &str = "COMANDA_PRICING_MIN_MULTIPLIER";
    /// Recommended price multiplier
    pub const RECOMMENDED_MULTIPLIER: &str = "COMANDA_PRICING_RECOMMENDED_MULTIPLIER";
    /// Premium price multiplier
    pub const PREMIUM_MULTIPLIER: &str = "COMANDA_PRICING_PREMIUM_MULTIPLIER";
    /// Green margin band
    pub const GREEN_MARGIN_PCT: &str = "COMANDA_MARGIN_GREEN_PCT";
    /// Yellow margin band
    pub const YELLOW_MARGIN_PCT: &str = "COMANDA_MARGIN_YELLOW_PCT";
    /// Upper cost variance factor
    pub const COST_HIGHER_FACTOR: &str = "COMANDA_COST_HIGHER_FACTOR";
    /// Lower cost variance factor
    pub const COST_LOWER_FACTOR: &str = "COMANDA_COST_LOWER_FACTOR";
    /// Supplier spread ratio
    pub const PRICE_VARIANCE_RATIO: &str = "COMANDA_MARKET_VARIANCE_RATIO";
    /// Savings ratio
    pub const SAVINGS_RATIO: &str = "COMANDA_MARKET_SAVINGS_RATIO";
    /// Stale supplier price age in days
    pub const STALE_PRICE_DAYS: &str = "COMANDA_MARKET_STALE_DAYS";
    /// Stale purchase age in days
    pub const STALE_PURCHASE_DAYS: &str = "COMANDA_STOCK_STALE_DAYS";
}

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pricing policy
    pub pricing: PricingConfig,
    /// Rule set thresholds
    pub signals: SignalThresholds,
}

impl EngineConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if multipliers, margin bands, or rule cutoffs are inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.pricing;
        if p.min_multiplier <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("min_multiplier must be > 0"));
        }
        if p.min_multiplier >= p.recommended_multiplier
            || p.recommended_multiplier >= p.premium_multiplier
        {
            return Err(ConfigError::InvalidRange(
                "pricing multipliers must be strictly ascending (min < recommended < premium)",
            ));
        }
        if p.yellow_margin_pct >= p.green_margin_pct {
            return Err(ConfigError::InvalidRange(
                "yellow_margin_pct must be < green_margin_pct",
            ));
        }
        if p.green_margin_pct > 100.0 {
            return Err(ConfigError::ValueOutOfRange("green_margin_pct must be <= 100"));
        }

        let s = &self.signals;
        if s.cost_higher_factor <= 1.0 {
            return Err(ConfigError::ValueOutOfRange("cost_higher_factor must be > 1"));
        }
        if s.cost_lower_factor <= 0.0 || s.cost_lower_factor >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "cost_lower_factor must be between 0 and 1 (exclusive)",
            ));
        }
        if s.price_variance_ratio <= 0.0 || s.savings_ratio <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("market ratios must be > 0"));
        }
        if s.stale_price_days <= 0 || s.stale_purchase_days <= 0 {
            return Err(ConfigError::ValueOutOfRange("stale day counts must be > 0"));
        }
        if s.stale_price_days > MAX_STALE_DAYS || s.stale_purchase_days > MAX_STALE_DAYS {
            return Err(ConfigError::ValueOutOfRange("stale day counts must be <= 36500"));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Pricing overrides
        Self::apply_env_var(env_vars::MIN_MULTIPLIER, &mut self.pricing.min_multiplier)?;
        Self::apply_env_var(
            env_vars::RECOMMENDED_MULTIPLIER,
            &mut self.pricing.recommended_multiplier,
        )?;
        Self::apply_env_var(
            env_vars::PREMIUM_MULTIPLIER,
            &mut self.pricing.premium_multiplier,
        )?;
        Self::apply_env_var(env_vars::GREEN_MARGIN_PCT, &mut self.pricing.green_margin_pct)?;
        Self::apply_env_var(
            env_vars::YELLOW_MARGIN_PCT,
            &mut self.pricing.yellow_margin_pct,
        )?;

        // Rule set overrides
        Self::apply_env_var(
            env_vars::COST_HIGHER_FACTOR,
            &mut self.signals.cost_higher_factor,
        )?;
        Self::apply_env_var(env_vars::COST_LOWER_FACTOR, &mut self.signals.cost_lower_factor)?;
        Self::apply_env_var(
            env_vars::PRICE_VARIANCE_RATIO,
            &mut self.signals.price_variance_ratio,
        )?;
        Self::apply_env_var(env_vars::SAVINGS_RATIO, &mut self.signals.savings_ratio)?;
        Self::apply_env_var(env_vars::STALE_PRICE_DAYS, &mut self.signals.stale_price_days)?;
        Self::apply_env_var(
            env_vars::STALE_PURCHASE_DAYS,
            &mut self.signals.stale_purchase_days,
        )?;

        Ok(self)
    }
}
