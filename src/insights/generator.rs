//! Age-Based Insight Generator
//!
//! Derives an advisory status for every system type in the reference table
//! from nothing but the year the home was built. The output answers "which
//! systems are statistically worth a look", not "which systems are failing".

use serde::Serialize;

use super::status::InsightStatus;
use crate::config::Thresholds;
use crate::error::{home_age, InvalidInputError};
use crate::lifespan::{LifespanTable, SystemCategory, SystemLifespanProfile};
use crate::property::PropertyFacts;
use crate::utils::year_or_now;

/// Advisory insight for one system type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInsight {
    pub system_type: String,
    pub category: SystemCategory,
    pub home_age_years: u32,
    pub average_lifespan_years: u32,
    /// Whole lifespans the home has outlived
    pub expected_replacements: u32,
    /// Years into the current lifespan cycle
    pub years_since_last_expected_replacement: u32,
    /// Percent of the current cycle used (0-100)
    pub percent_of_life_used: f64,
    pub status: InsightStatus,
    /// True while the home is still within the first lifespan
    pub is_original: bool,
    pub message: String,
    #[serde(skip)]
    display_priority: u32,
}

impl SystemInsight {
    /// Compute the insight for one profile
    fn from_profile(
        profile: &SystemLifespanProfile,
        home_age_years: u32,
        thresholds: &Thresholds,
    ) -> Self {
        let lifespan = profile.average_lifespan_years.max(1);
        let expected_replacements = home_age_years / lifespan;
        let years_since = home_age_years % lifespan;
        let percent_of_life_used =
            (years_since as f64 / lifespan as f64 * 100.0).clamp(0.0, 100.0);

        let status = classify_status(home_age_years, lifespan, percent_of_life_used, thresholds);

        Self {
            system_type: profile.system_type.clone(),
            category: profile.category,
            home_age_years,
            average_lifespan_years: lifespan,
            expected_replacements,
            years_since_last_expected_replacement: years_since,
            percent_of_life_used,
            status,
            is_original: expected_replacements == 0,
            message: insight_message(profile, home_age_years, percent_of_life_used, status),
            display_priority: profile.display_priority,
        }
    }

    pub fn display_priority(&self) -> u32 {
        self.display_priority
    }
}

/// Status for a system type at a given home age (first match wins)
pub fn classify_status(
    home_age_years: u32,
    average_lifespan_years: u32,
    percent_of_life_used: f64,
    thresholds: &Thresholds,
) -> InsightStatus {
    if home_age_years > average_lifespan_years {
        InsightStatus::Verify
    } else if percent_of_life_used >= thresholds.monitor_percent {
        InsightStatus::Monitor
    } else {
        InsightStatus::Good
    }
}

fn insight_message(
    profile: &SystemLifespanProfile,
    home_age_years: u32,
    percent_of_life_used: f64,
    status: InsightStatus,
) -> String {
    let system = &profile.system_type;
    let lifespan = profile.average_lifespan_years;

    match status {
        InsightStatus::Verify => format!(
            "This {}-year-old home has outlived the typical {}-year life of a {}. {}.",
            home_age_years,
            lifespan,
            system,
            status.description()
        ),
        InsightStatus::Monitor => format!(
            "A {} typically lasts about {} years and this cycle is roughly {:.0}% through. {}.",
            system,
            lifespan,
            percent_of_life_used,
            status.description()
        ),
        InsightStatus::Good => format!(
            "A {} typically lasts about {} years. {}.",
            system,
            lifespan,
            status.description()
        ),
    }
}

/// Generate advisory insights for every system type in the table
///
/// # Arguments
/// * `table` - Lifespan reference table
/// * `thresholds` - Percent-of-life thresholds (Monitor at 70 by default)
/// * `year_built` - Construction year (4-digit, not after `current_year`)
/// * `current_year` - Evaluation year
///
/// # Returns
/// One insight per profile, sorted by (status rank, display priority).
/// Invalid years return an error and no insights.
pub fn generate_insights(
    table: &LifespanTable,
    thresholds: &Thresholds,
    year_built: i32,
    current_year: i32,
) -> Result<Vec<SystemInsight>, InvalidInputError> {
    let home_age_years = home_age(year_built, current_year)?;

    let mut insights: Vec<SystemInsight> = table
        .iter()
        .map(|profile| SystemInsight::from_profile(profile, home_age_years, thresholds))
        .collect();

    // Stable: ties keep table order
    insights.sort_by_key(|i| (i.status.rank(), i.display_priority));

    tracing::debug!(
        "Generated {} insights for {}-year-old home",
        insights.len(),
        home_age_years
    );

    Ok(insights)
}

/// Generate insights for a property, defaulting the year to now
pub fn generate_insights_for(
    property: &PropertyFacts,
    table: &LifespanTable,
    thresholds: &Thresholds,
) -> Result<Vec<SystemInsight>, InvalidInputError> {
    generate_insights(
        table,
        thresholds,
        property.year_built,
        year_or_now(property.current_year),
    )
}

/// Status counts for dashboard headers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSummary {
    pub verify: usize,
    pub monitor: usize,
    pub good: usize,
}

impl InsightSummary {
    pub fn from_insights(insights: &[SystemInsight]) -> Self {
        let mut summary = Self::default();
        for insight in insights {
            match insight.status {
                InsightStatus::Verify => summary.verify += 1,
                InsightStatus::Monitor => summary.monitor += 1,
                InsightStatus::Good => summary.good += 1,
            }
        }
        summary
    }

    /// Systems worth a human check (Verify + Monitor)
    pub fn needs_attention(&self) -> usize {
        self.verify + self.monitor
    }
}
