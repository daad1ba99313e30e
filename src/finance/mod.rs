//! Financial projection helpers
//!
//! - `equity.rs` - EquitySummary, ROI percent, payback years
//! - `badge.rs` - Net-gain badge tiers
//! - `projection.rs` - Ten-year wealth, maintenance ROI, persona fallbacks

pub mod equity;
pub mod badge;
pub mod projection;

pub use equity::{equity_summary, payback_years, roi_percent, summarize_recommendations, EquitySummary};
pub use badge::{net_gain_badge_tier, net_gain_badge_tier_for, net_gain_badge_tier_with, BadgeTier};
pub use projection::{
    persona_projection, project_maintenance_roi, project_ten_year_wealth, project_wealth,
    MaintenanceRoiProjection, PersonaProjection, ProjectionPoint, WealthInputs, WealthProjection,
    PROJECTION_YEARS,
};
