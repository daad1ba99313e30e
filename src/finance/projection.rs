//! Portfolio Projections
//!
//! Ten-year wealth and maintenance-ROI figures for portfolio screens. These
//! are closed-form: compound appreciation on the property value and straight
//! linear paydown of the mortgage, evaluated independently for each year.

use serde::{Deserialize, Serialize};

use super::equity::{equity_summary, EquitySummary};
use crate::config::{EngineConfig, APPRECIATION_RATE};
use crate::recommendations::Persona;

/// Horizon used by the portfolio screens
pub const PROJECTION_YEARS: u32 = 10;

/// Owner-supplied financial facts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthInputs {
    pub current_value: f64,
    pub mortgage_balance: f64,
    pub monthly_payment: f64,
    #[serde(default = "default_appreciation_rate")]
    pub appreciation_rate: f64,
}

fn default_appreciation_rate() -> f64 {
    APPRECIATION_RATE
}

impl WealthInputs {
    pub fn new(current_value: f64, mortgage_balance: f64, monthly_payment: f64) -> Self {
        Self {
            current_value,
            mortgage_balance,
            monthly_payment,
            appreciation_rate: APPRECIATION_RATE,
        }
    }

    /// Inputs using the configured appreciation rate
    pub fn from_config(
        current_value: f64,
        mortgage_balance: f64,
        monthly_payment: f64,
        config: &EngineConfig,
    ) -> Self {
        Self::new(current_value, mortgage_balance, monthly_payment)
            .with_appreciation_rate(config.appreciation_rate)
    }

    pub fn with_appreciation_rate(mut self, rate: f64) -> Self {
        self.appreciation_rate = rate;
        self
    }

    /// Property value after `year` years of compound appreciation
    pub fn value_at(&self, year: u32) -> f64 {
        self.current_value * (1.0 + self.appreciation_rate).powi(year as i32)
    }

    /// Mortgage balance after `year` years of linear paydown (never negative)
    pub fn balance_at(&self, year: u32) -> f64 {
        (self.mortgage_balance - self.monthly_payment * 12.0 * year as f64).max(0.0)
    }
}

/// One year of a wealth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: u32,
    pub property_value: f64,
    pub mortgage_balance: f64,
    pub equity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthProjection {
    /// Year 0 (today) through the final year
    pub points: Vec<ProjectionPoint>,
    pub starting_equity: f64,
    pub ending_equity: f64,
    pub equity_gain: f64,
    pub appreciation_gain: f64,
    pub principal_paid: f64,
}

/// Project property value, mortgage balance and equity for `years` years
pub fn project_wealth(inputs: &WealthInputs, years: u32) -> WealthProjection {
    let points: Vec<ProjectionPoint> = (0..=years)
        .map(|year| {
            let property_value = inputs.value_at(year);
            let mortgage_balance = inputs.balance_at(year);
            ProjectionPoint {
                year,
                property_value,
                mortgage_balance,
                equity: property_value - mortgage_balance,
            }
        })
        .collect();

    let start = inputs.current_value - inputs.balance_at(0);
    let end = inputs.value_at(years) - inputs.balance_at(years);

    WealthProjection {
        points,
        starting_equity: start,
        ending_equity: end,
        equity_gain: end - start,
        appreciation_gain: inputs.value_at(years) - inputs.current_value,
        principal_paid: inputs.balance_at(0) - inputs.balance_at(years),
    }
}

/// Ten-year wealth projection
pub fn project_ten_year_wealth(inputs: &WealthInputs) -> WealthProjection {
    project_wealth(inputs, PROJECTION_YEARS)
}

/// Return on routine maintenance over a horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRoiProjection {
    pub years: u32,
    pub total_spent: f64,
    pub total_avoided_cost: f64,
    pub value_preserved: f64,
    /// Investment = total spent, value added = avoided cost + preserved value
    pub summary: EquitySummary,
}

/// Maintenance spend against avoided repairs and preserved value
pub fn project_maintenance_roi(
    annual_spend: f64,
    annual_avoided_cost: f64,
    value_preserved: f64,
    years: u32,
) -> MaintenanceRoiProjection {
    let total_spent = annual_spend * years as f64;
    let total_avoided_cost = annual_avoided_cost * years as f64;

    MaintenanceRoiProjection {
        years,
        total_spent,
        total_avoided_cost,
        value_preserved,
        summary: equity_summary(total_spent, total_avoided_cost + value_preserved, None),
    }
}

/// Fallback projections shown before an owner has entered real figures
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaProjection {
    pub persona: Persona,
    pub wealth: WealthProjection,
    pub maintenance: MaintenanceRoiProjection,
}

/// Canned ten-year projections for a demo persona
///
/// The appreciation rate and the value assumed for a persona without one
/// come from `config`.
pub fn persona_projection(persona: Persona, config: &EngineConfig) -> PersonaProjection {
    let current_value = persona
        .property()
        .current_value
        .unwrap_or(config.default_property_value);

    // (mortgage balance, monthly payment, annual spend, annual avoided, value preserved)
    let (balance, payment, spend, avoided, preserved) = match persona {
        Persona::Investor => (150_000.0, 1_400.0, 3_000.0, 4_200.0, 8_000.0),
        Persona::ExcellentMaintainer => (220_000.0, 2_100.0, 4_500.0, 6_000.0, 15_000.0),
        Persona::FirstTimeBuyer => (270_000.0, 1_900.0, 2_000.0, 3_500.0, 6_000.0),
        Persona::DeferredMaintenance => (0.0, 0.0, 500.0, 300.0, 0.0),
    };

    let inputs = WealthInputs::from_config(current_value, balance, payment, config);

    PersonaProjection {
        persona,
        wealth: project_ten_year_wealth(&inputs),
        maintenance: project_maintenance_roi(spend, avoided, preserved, PROJECTION_YEARS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compound_appreciation() {
        let inputs = WealthInputs::new(100_000.0, 0.0, 0.0);
        assert_relative_eq!(inputs.value_at(10), 148_024.43, epsilon = 0.01);
        assert_eq!(inputs.value_at(0), 100_000.0);
    }

    #[test]
    fn test_linear_amortization_floors_at_zero() {
        let inputs = WealthInputs::new(300_000.0, 30_000.0, 1_000.0);
        assert_eq!(inputs.balance_at(1), 18_000.0);
        assert_eq!(inputs.balance_at(2), 6_000.0);
        assert_eq!(inputs.balance_at(3), 0.0);
    }

    #[test]
    fn test_ten_year_projection_shape() {
        let inputs = WealthInputs::new(400_000.0, 250_000.0, 1_500.0).with_appreciation_rate(0.03);
        let projection = project_ten_year_wealth(&inputs);

        assert_eq!(projection.points.len(), 11);
        assert_eq!(projection.points[0].equity, 150_000.0);
        assert_relative_eq!(projection.principal_paid, 180_000.0, epsilon = 1e-6);
        assert_relative_eq!(
            projection.equity_gain,
            projection.appreciation_gain + projection.principal_paid,
            epsilon = 1e-6
        );
        for pair in projection.points.windows(2) {
            assert!(pair[1].equity >= pair[0].equity);
        }
    }

    #[test]
    fn test_maintenance_roi() {
        let projection = project_maintenance_roi(1_000.0, 1_500.0, 5_000.0, 10);
        assert_eq!(projection.total_spent, 10_000.0);
        assert_eq!(projection.summary.value_added, 20_000.0);
        assert_eq!(projection.summary.net_gain, 10_000.0);
        assert_eq!(projection.summary.roi_percent, 200.0);
    }

    #[test]
    fn test_maintenance_roi_zero_years() {
        let projection = project_maintenance_roi(1_000.0, 1_500.0, 0.0, 0);
        assert_eq!(projection.summary.roi_percent, 0.0);
    }

    #[test]
    fn test_persona_projections() {
        let config = EngineConfig::default();
        for &persona in Persona::all() {
            let projection = persona_projection(persona, &config);
            assert_eq!(projection.wealth.points.len(), PROJECTION_YEARS as usize + 1);
            assert_eq!(
                projection.maintenance.summary.net_gain,
                projection.maintenance.summary.value_added - projection.maintenance.summary.investment
            );
        }
        let deferred = persona_projection(Persona::DeferredMaintenance, &config);
        assert_eq!(deferred.wealth.starting_equity, config.default_property_value);
    }

    #[test]
    fn test_persona_projection_uses_configured_rates() {
        let config =
            EngineConfig::from_json_str(r#"{ "appreciationRate": 0.10, "defaultPropertyValue": 200000.0 }"#)
                .unwrap();
        let projection = persona_projection(Persona::DeferredMaintenance, &config);
        let points = &projection.wealth.points;
        assert_eq!(points[0].property_value, 200_000.0);
        assert_relative_eq!(points[1].property_value, 220_000.0, epsilon = 1e-6);
        assert_relative_eq!(
            projection.wealth.appreciation_gain,
            200_000.0 * (1.1f64.powi(10) - 1.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_inputs_from_config() {
        let config = EngineConfig {
            appreciation_rate: 0.02,
            ..EngineConfig::default()
        };
        let inputs = WealthInputs::from_config(100_000.0, 0.0, 0.0, &config);
        assert_eq!(inputs.appreciation_rate, 0.02);
        assert_eq!(WealthInputs::new(100_000.0, 0.0, 0.0).appreciation_rate, APPRECIATION_RATE);
    }
}
