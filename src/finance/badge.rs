//! Net-Gain Badge Tiers
//!
//! Buckets used by the presentation layer to pick a badge style. A loss that
//! still returns at least half its cost is kept apart from a pure expense.

use serde::Serialize;

use crate::config::{BadgeLimits, EngineConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BadgeTier {
    /// Adds more value than it costs
    Positive,
    /// Break-even or a loss within the small-loss limit
    NeutralOrSmallLoss,
    /// Costs money now but returns a large share of it
    LossButHighRoi,
    /// Mostly an expense
    LossLowRoi,
}

impl BadgeTier {
    pub fn display_text(&self) -> &'static str {
        match self {
            BadgeTier::Positive => "Adds value",
            BadgeTier::NeutralOrSmallLoss => "Close to break-even",
            BadgeTier::LossButHighRoi => "Strong return",
            BadgeTier::LossLowRoi => "Mostly an expense",
        }
    }
}

/// Badge tier with the default limits
pub fn net_gain_badge_tier(net_gain: f64, roi_percent: f64) -> BadgeTier {
    net_gain_badge_tier_with(net_gain, roi_percent, &BadgeLimits::default())
}

/// Badge tier with the limits from an engine configuration
pub fn net_gain_badge_tier_for(config: &EngineConfig, net_gain: f64, roi_percent: f64) -> BadgeTier {
    net_gain_badge_tier_with(net_gain, roi_percent, &config.badges)
}

/// Badge tier with explicit limits
pub fn net_gain_badge_tier_with(net_gain: f64, roi_percent: f64, limits: &BadgeLimits) -> BadgeTier {
    if net_gain > 0.0 {
        BadgeTier::Positive
    } else if net_gain >= -limits.small_loss_limit {
        BadgeTier::NeutralOrSmallLoss
    } else if roi_percent >= limits.high_roi_percent {
        BadgeTier::LossButHighRoi
    } else {
        BadgeTier::LossLowRoi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        assert_eq!(net_gain_badge_tier(1.0, 101.0), BadgeTier::Positive);
        assert_eq!(net_gain_badge_tier(0.0, 100.0), BadgeTier::NeutralOrSmallLoss);
        assert_eq!(net_gain_badge_tier(-500.0, 95.0), BadgeTier::NeutralOrSmallLoss);
        assert_eq!(net_gain_badge_tier(-4_000.0, 50.0), BadgeTier::LossButHighRoi);
        assert_eq!(net_gain_badge_tier(-4_000.0, 49.0), BadgeTier::LossLowRoi);
    }

    #[test]
    fn test_custom_limits() {
        let limits = BadgeLimits {
            small_loss_limit: 0.0,
            high_roi_percent: 80.0,
        };
        assert_eq!(net_gain_badge_tier_with(-1.0, 70.0, &limits), BadgeTier::LossLowRoi);
        assert_eq!(net_gain_badge_tier_with(0.0, 70.0, &limits), BadgeTier::NeutralOrSmallLoss);
    }

    #[test]
    fn test_configured_limits() {
        let config = EngineConfig::from_json_str(r#"{ "badges": { "smallLossLimit": 0.0 } }"#).unwrap();
        assert_eq!(net_gain_badge_tier(-100.0, 10.0), BadgeTier::NeutralOrSmallLoss);
        assert_eq!(net_gain_badge_tier_for(&config, -100.0, 10.0), BadgeTier::LossLowRoi);
        assert_eq!(net_gain_badge_tier_for(&config, -100.0, 60.0), BadgeTier::LossButHighRoi);
    }
}
