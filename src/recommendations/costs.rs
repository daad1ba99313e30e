//! Replacement Cost Data
//!
//! National base costs per system type, scaled by a regional multiplier.
//! Lookups never fail: a missing multiplier or base cost degrades to the next
//! best estimate and the fallback is recorded as a data-quality warning.
//!
//! Configuration format (JSON):
//! ```json
//! {
//!   "baseCosts": { "Roof": 12000.0 },
//!   "regionMultipliers": { "Northeast": 1.15 },
//!   "annualSavings": { "HVAC": 450.0 }
//! }
//! ```

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use smallvec::SmallVec;
use std::fs;
use std::path::Path;

use crate::error::DataQualityWarning;
use crate::property::DocumentedSystem;

/// Raw JSON layout
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CostTableFile {
    base_costs: FxHashMap<String, f64>,
    region_multipliers: FxHashMap<String, f64>,
    annual_savings: FxHashMap<String, f64>,
}

/// Cost and savings data keyed by system type and region (case-insensitive)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostTable {
    base_costs: FxHashMap<String, f64>,
    region_multipliers: FxHashMap<String, f64>,
    annual_savings: FxHashMap<String, f64>,
}

/// Best available cost for one system
#[derive(Debug, Clone, PartialEq)]
pub struct CostEstimate {
    pub cost: f64,
    pub warnings: SmallVec<[DataQualityWarning; 2]>,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in national averages (USD)
    pub fn national_defaults() -> Self {
        let mut table = Self::new();
        for (system_type, cost) in [
            ("Roof", 12_000.0),
            ("HVAC", 8_500.0),
            ("Water Heater", 1_800.0),
            ("Electrical Panel", 3_000.0),
            ("Plumbing", 9_000.0),
            ("Foundation", 15_000.0),
            ("Windows", 10_000.0),
            ("Siding", 14_000.0),
            ("Gutters", 1_500.0),
            ("Deck", 9_000.0),
        ] {
            table.set_base_cost(system_type, cost);
        }
        for (region, multiplier) in [
            ("Northeast", 1.15),
            ("West", 1.20),
            ("Midwest", 0.95),
            ("South", 0.90),
        ] {
            table.set_region_multiplier(region, multiplier);
        }
        for (system_type, savings) in [("HVAC", 450.0), ("Windows", 300.0), ("Water Heater", 120.0)] {
            table.set_annual_savings(system_type, savings);
        }
        table
    }

    /// Parse a cost table from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CostTableFile =
            serde_json::from_str(json).with_context(|| "Failed to parse cost table JSON")?;

        let mut table = Self::new();
        for (k, v) in file.base_costs {
            table.set_base_cost(&k, v);
        }
        for (k, v) in file.region_multipliers {
            if !(v.is_finite() && v > 0.0) {
                anyhow::bail!("Region multiplier for '{}' must be positive, got {}", k, v);
            }
            table.set_region_multiplier(&k, v);
        }
        for (k, v) in file.annual_savings {
            table.set_annual_savings(&k, v);
        }
        Ok(table)
    }

    /// Load a cost table from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cost table: {:?}", path))?;
        Self::from_json_str(&contents)
    }

    pub fn set_base_cost(&mut self, system_type: &str, cost: f64) {
        self.base_costs.insert(normalize_key(system_type), cost);
    }

    pub fn set_region_multiplier(&mut self, region: &str, multiplier: f64) {
        self.region_multipliers.insert(normalize_key(region), multiplier);
    }

    pub fn set_annual_savings(&mut self, system_type: &str, savings: f64) {
        self.annual_savings.insert(normalize_key(system_type), savings);
    }

    pub fn base_cost(&self, system_type: &str) -> Option<f64> {
        self.base_costs.get(&normalize_key(system_type)).copied()
    }

    pub fn region_multiplier(&self, region: &str) -> Option<f64> {
        self.region_multipliers.get(&normalize_key(region)).copied()
    }

    /// Expected yearly energy savings after upgrading, if known
    pub fn annual_savings(&self, system_type: &str) -> Option<f64> {
        self.annual_savings
            .get(&normalize_key(system_type))
            .copied()
            .filter(|s| s.is_finite() && *s > 0.0)
    }

    /// Best available replacement cost for a documented system
    ///
    /// Order: owner quote, base cost x regional multiplier, national base cost,
    /// `default_cost`.
    pub fn estimate(
        &self,
        system: &DocumentedSystem,
        region: Option<&str>,
        default_cost: f64,
    ) -> CostEstimate {
        let mut warnings = SmallVec::new();

        if let Some(quote) = system.regional_replacement_cost.filter(|q| q.is_finite() && *q > 0.0) {
            return CostEstimate { cost: quote, warnings };
        }

        let base = match self.base_cost(&system.system_type) {
            Some(base) => base,
            None => {
                warnings.push(DataQualityWarning::BaseCostMissing {
                    system_type: system.system_type.clone(),
                });
                default_cost
            }
        };

        let multiplier = match region {
            Some(region) => match self.region_multiplier(region) {
                Some(multiplier) => multiplier,
                None => {
                    warnings.push(DataQualityWarning::RegionalMultiplierMissing {
                        region: region.to_string(),
                    });
                    1.0
                }
            },
            None => {
                if !self.region_multipliers.is_empty() {
                    warnings.push(DataQualityWarning::RegionUnknown);
                }
                1.0
            }
        };

        CostEstimate {
            cost: (base * multiplier).round(),
            warnings,
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}
