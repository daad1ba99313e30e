//! Equity Summary
//!
//! Investment vs value added, ROI percent and payback period. All formulas are
//! direct arithmetic; `net_gain` is computed straight from the two inputs so it
//! never picks up rounding from the ROI calculation.

use serde::Serialize;

use crate::recommendations::Recommendation;

/// Derived equity figures for one action or a set of actions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquitySummary {
    pub investment: f64,
    pub value_added: f64,
    pub net_gain: f64,
    /// Whole percent; 0 when there is no investment
    pub roi_percent: f64,
    /// Years for savings to repay the investment, if there are savings
    pub payback_years: Option<f64>,
}

/// ROI as a whole percent, 0 for non-positive investment
pub fn roi_percent(investment: f64, value_added: f64) -> f64 {
    if investment > 0.0 {
        let roi = (value_added / investment * 100.0).round();
        if roi.is_finite() {
            return roi;
        }
    }
    0.0
}

/// Years of savings needed to repay the investment
pub fn payback_years(investment: f64, annual_savings: Option<f64>) -> Option<f64> {
    match annual_savings {
        Some(savings) if savings > 0.0 && savings.is_finite() => Some(investment / savings),
        _ => None,
    }
}

/// Equity summary for an investment
///
/// # Example
/// ```
/// use lifespan_advisor::finance::equity_summary;
///
/// let summary = equity_summary(400.0, 1000.0, Some(100.0));
/// assert_eq!(summary.net_gain, 600.0);
/// assert_eq!(summary.roi_percent, 250.0);
/// assert_eq!(summary.payback_years, Some(4.0));
/// ```
pub fn equity_summary(investment: f64, value_added: f64, annual_savings: Option<f64>) -> EquitySummary {
    EquitySummary {
        investment,
        value_added,
        net_gain: value_added - investment,
        roi_percent: roi_percent(investment, value_added),
        payback_years: payback_years(investment, annual_savings),
    }
}

/// Aggregate summary over a recommendation list
pub fn summarize_recommendations(recs: &[Recommendation]) -> EquitySummary {
    let investment: f64 = recs.iter().map(|r| r.estimated_cost).sum();
    let value_added: f64 = recs.iter().map(|r| r.value_impact).sum();
    let savings: f64 = recs.iter().filter_map(|r| r.annual_savings).sum();

    equity_summary(investment, value_added, Some(savings))
}
