//! Property and Documented-System Inputs
//!
//! Records handed to the engine by the host application. Defaults for missing
//! values are resolved here, once, so every generator sees the same
//! normalized numbers and the same data-quality warnings.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::EngineConfig;
use crate::error::{check_plausible_year, home_age, DataQualityWarning, InvalidInputError};
use crate::utils::year_or_now;

/// Facts about a property, as stored by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFacts {
    pub year_built: i32,
    /// Evaluation year; defaults to the current calendar year
    #[serde(default)]
    pub current_year: Option<i32>,
    /// Region key for cost lookups
    #[serde(default)]
    pub region: Option<String>,
    /// Current market value, used for value-impact estimates
    #[serde(default)]
    pub current_value: Option<f64>,
}

impl PropertyFacts {
    pub fn new(year_built: i32) -> Self {
        Self {
            year_built,
            current_year: None,
            region: None,
            current_value: None,
        }
    }

    pub fn evaluated_in(mut self, current_year: i32) -> Self {
        self.current_year = Some(current_year);
        self
    }

    pub fn in_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn valued_at(mut self, current_value: f64) -> Self {
        self.current_value = Some(current_value);
        self
    }

    /// Validate and fill in defaults
    pub fn resolve(&self, config: &EngineConfig) -> Result<ResolvedProperty, InvalidInputError> {
        let current_year = year_or_now(self.current_year);
        let home_age_years = home_age(self.year_built, current_year)?;

        let mut warnings = SmallVec::new();

        let current_value = match self.current_value {
            Some(value) if value.is_finite() && value > 0.0 => value,
            _ => {
                warnings.push(DataQualityWarning::PropertyValueMissing {
                    assumed: config.default_property_value,
                });
                config.default_property_value
            }
        };

        let region = self
            .region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);

        Ok(ResolvedProperty {
            year_built: self.year_built,
            current_year,
            home_age_years,
            region,
            current_value,
            warnings,
        })
    }
}

/// Property facts with every default applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProperty {
    pub year_built: i32,
    pub current_year: i32,
    pub home_age_years: u32,
    /// None means "national average"
    pub region: Option<String>,
    pub current_value: f64,
    /// Defaults applied while resolving
    pub warnings: SmallVec<[DataQualityWarning; 2]>,
}

/// Owner-reported condition of a system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
    Failing,
    #[default]
    Unknown,
}

impl Condition {
    /// Parse owner-entered text; anything unrecognized is Unknown
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "excellent" | "new" | "like new" => Condition::Excellent,
            "good" => Condition::Good,
            "fair" | "average" | "ok" => Condition::Fair,
            "poor" | "bad" | "worn" => Condition::Poor,
            "failing" | "failed" | "broken" | "critical" => Condition::Failing,
            _ => Condition::Unknown,
        }
    }

    /// Owner has flagged the system as needing attention
    pub fn is_flagged(&self) -> bool {
        matches!(self, Condition::Poor | Condition::Failing)
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
            Condition::Failing => "failing",
            Condition::Unknown => "unknown",
        }
    }
}

impl From<String> for Condition {
    fn from(text: String) -> Self {
        Condition::parse(&text)
    }
}

/// What kind of work a documented system is being considered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpgradeKind {
    /// Like-for-like replacement at end of life
    #[default]
    Replacement,
    /// Energy-efficiency upgrade (always discretionary)
    Efficiency,
    /// Cosmetic refresh (always discretionary)
    Cosmetic,
}

impl UpgradeKind {
    pub fn is_discretionary(&self) -> bool {
        !matches!(self, UpgradeKind::Replacement)
    }
}

/// How an effective age was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AgeBasis {
    InstallYear,
    OwnerEstimate,
    HomeAge,
}

/// A system the owner has actually recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentedSystem {
    #[serde(default)]
    pub id: Option<String>,
    pub system_type: String,
    #[serde(default)]
    pub installed_year: Option<i32>,
    #[serde(default)]
    pub estimated_age: Option<u32>,
    #[serde(default)]
    pub condition: Condition,
    /// Quote for this property; overrides the cost table
    #[serde(default)]
    pub regional_replacement_cost: Option<f64>,
    #[serde(default)]
    pub upgrade_kind: UpgradeKind,
}

impl DocumentedSystem {
    pub fn new(system_type: &str) -> Self {
        Self {
            id: None,
            system_type: system_type.to_string(),
            installed_year: None,
            estimated_age: None,
            condition: Condition::Unknown,
            regional_replacement_cost: None,
            upgrade_kind: UpgradeKind::Replacement,
        }
    }

    pub fn installed(mut self, year: i32) -> Self {
        self.installed_year = Some(year);
        self
    }

    pub fn aged(mut self, years: u32) -> Self {
        self.estimated_age = Some(years);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_quote(mut self, cost: f64) -> Self {
        self.regional_replacement_cost = Some(cost);
        self
    }

    pub fn with_kind(mut self, kind: UpgradeKind) -> Self {
        self.upgrade_kind = kind;
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Years since install, else the owner's estimate, else the home's age
    pub fn effective_age(
        &self,
        property: &ResolvedProperty,
    ) -> Result<(u32, AgeBasis), InvalidInputError> {
        if let Some(installed_year) = self.installed_year {
            check_plausible_year("installed_year", installed_year)?;
            if installed_year > property.current_year {
                return Err(InvalidInputError::InstalledInFuture {
                    system_type: self.system_type.clone(),
                    installed_year,
                    current_year: property.current_year,
                });
            }
            return Ok(((property.current_year - installed_year) as u32, AgeBasis::InstallYear));
        }

        if let Some(age) = self.estimated_age {
            return Ok((age, AgeBasis::OwnerEstimate));
        }

        Ok((property.home_age_years, AgeBasis::HomeAge))
    }
}
