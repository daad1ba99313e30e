//! Engine Configuration
//!
//! Thresholds, value-impact multipliers and fallback defaults. Everything here
//! is tunable data rather than logic: `EngineConfig::default()` reproduces the
//! product's current constants, and a JSON file can override any subset.
//!
//! ```json
//! {
//!   "thresholds": { "monitorPercent": 70.0, "soonPercent": 80.0 },
//!   "valueImpact": { "Structural": 0.03, "Climate": 0.02 },
//!   "defaultPropertyValue": 350000.0
//! }
//! ```

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::lifespan::SystemCategory;

/// Insight status threshold: percent of life used at which a system moves to Monitor
pub const MONITOR_PERCENT: f64 = 70.0;

/// Recommendation threshold: percent of life used at which a system becomes Soon
pub const SOON_PERCENT: f64 = 80.0;

/// Recommendation threshold: percent of life used at which a system becomes Urgent
pub const URGENT_PERCENT: f64 = 100.0;

/// Loss investments at or above this ROI get their own badge tier
pub const HIGH_ROI_PERCENT: f64 = 50.0;

/// Losses no larger than this count as neutral
pub const SMALL_LOSS_LIMIT: f64 = 500.0;

/// Assumed annual appreciation for wealth projections
pub const APPRECIATION_RATE: f64 = 0.04;

/// Longest payback, in years, for which a loss-making efficiency upgrade is still shown
pub const EFFICIENCY_PAYBACK_YEARS: f64 = 10.0;

pub const DEFAULT_PROPERTY_VALUE: f64 = 350_000.0;
pub const DEFAULT_REPLACEMENT_COST: f64 = 5_000.0;

/// Multiplier used when the value-impact table has no entry for a category
pub const FALLBACK_VALUE_MULTIPLIER: f64 = 0.01;

/// Percent-of-life thresholds used by the insight generator and the ranker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Thresholds {
    pub monitor_percent: f64,
    pub soon_percent: f64,
    pub urgent_percent: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            monitor_percent: MONITOR_PERCENT,
            soon_percent: SOON_PERCENT,
            urgent_percent: URGENT_PERCENT,
        }
    }
}

/// Value added by a system upgrade, as a fraction of current property value
///
/// A configured map is layered over the defaults, so a file naming only some
/// categories keeps the built-in multipliers for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "FxHashMap<SystemCategory, f64>",
    into = "FxHashMap<SystemCategory, f64>"
)]
pub struct ValueImpactTable {
    multipliers: FxHashMap<SystemCategory, f64>,
}

impl ValueImpactTable {
    pub fn new(multipliers: FxHashMap<SystemCategory, f64>) -> Self {
        Self { multipliers }
    }

    /// Multiplier for a category (fallback if not configured)
    pub fn multiplier(&self, category: SystemCategory) -> f64 {
        self.multipliers
            .get(&category)
            .copied()
            .unwrap_or(FALLBACK_VALUE_MULTIPLIER)
    }

    /// Replace one category's multiplier
    pub fn with(mut self, category: SystemCategory, multiplier: f64) -> Self {
        self.multipliers.insert(category, multiplier);
        self
    }
}

impl From<FxHashMap<SystemCategory, f64>> for ValueImpactTable {
    fn from(overrides: FxHashMap<SystemCategory, f64>) -> Self {
        let mut table = Self::default();
        table.multipliers.extend(overrides);
        table
    }
}

impl From<ValueImpactTable> for FxHashMap<SystemCategory, f64> {
    fn from(table: ValueImpactTable) -> Self {
        table.multipliers
    }
}

impl Default for ValueImpactTable {
    fn default() -> Self {
        let multipliers = [
            (SystemCategory::Structural, 0.03),
            (SystemCategory::Climate, 0.02),
            (SystemCategory::Plumbing, 0.012),
            (SystemCategory::Electrical, 0.015),
            (SystemCategory::Exterior, 0.02),
            (SystemCategory::Other, FALLBACK_VALUE_MULTIPLIER),
        ]
        .into_iter()
        .collect();
        Self { multipliers }
    }
}

/// Badge tier limits for net-gain presentation buckets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeLimits {
    pub small_loss_limit: f64,
    pub high_roi_percent: f64,
}

impl Default for BadgeLimits {
    fn default() -> Self {
        Self {
            small_loss_limit: SMALL_LOSS_LIMIT,
            high_roi_percent: HIGH_ROI_PERCENT,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub thresholds: Thresholds,
    pub value_impact: ValueImpactTable,
    pub badges: BadgeLimits,
    pub appreciation_rate: f64,
    /// Efficiency upgrades without a net gain are kept if savings repay them within this many years
    pub efficiency_payback_years: f64,
    pub default_property_value: f64,
    pub default_replacement_cost: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            value_impact: ValueImpactTable::default(),
            badges: BadgeLimits::default(),
            appreciation_rate: APPRECIATION_RATE,
            efficiency_payback_years: EFFICIENCY_PAYBACK_YEARS,
            default_property_value: DEFAULT_PROPERTY_VALUE,
            default_replacement_cost: DEFAULT_REPLACEMENT_COST,
        }
    }
}

impl EngineConfig {
    /// Parse configuration JSON; omitted fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)
            .with_context(|| "Failed to parse engine config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {:?}", path))?;
        Self::from_json_str(&contents)
    }

    fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if !(t.monitor_percent > 0.0 && t.soon_percent > 0.0 && t.soon_percent <= t.urgent_percent) {
            anyhow::bail!(
                "Invalid thresholds: monitor={}, soon={}, urgent={}",
                t.monitor_percent,
                t.soon_percent,
                t.urgent_percent
            );
        }
        if !self.default_property_value.is_finite() || self.default_property_value < 0.0 {
            anyhow::bail!("Default property value must be a non-negative number");
        }
        if !self.efficiency_payback_years.is_finite() || self.efficiency_payback_years < 0.0 {
            anyhow::bail!("Efficiency payback years must be a non-negative number");
        }
        if !self.default_replacement_cost.is_finite() || self.default_replacement_cost < 0.0 {
            anyhow::bail!("Default replacement cost must be a non-negative number");
        }
        Ok(())
    }
}
