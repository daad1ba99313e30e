//! Property System Lifespan Advisor
//!
//! Estimates which building systems of a property are due for attention,
//! ranks them, and produces cost/value/equity projections.
//!
//! Module layout:
//! - `lifespan/`: Reference table of expected service lives
//! - `insights/`: Advisory, age-based status for every system type
//! - `recommendations/`: Ranked, costed recommendations for documented systems
//! - `finance/`: Equity summary, badge tiers and ten-year projections
//! - `property`, `config`, `error`: Inputs, tunable constants, error taxonomy
//!
//! Every function is a pure computation over its arguments. Reference data and
//! configuration are values passed in by the caller, not globals.

pub mod utils;
pub mod error;
pub mod config;
pub mod property;
pub mod lifespan;
pub mod insights;
pub mod recommendations;
pub mod finance;

// Re-export commonly used types
pub use error::{DataQualityWarning, InvalidInputError};
pub use config::{EngineConfig, Thresholds, ValueImpactTable};
pub use property::{Condition, DocumentedSystem, PropertyFacts, UpgradeKind};
pub use lifespan::{LifespanOverrides, LifespanTable, SystemCategory, SystemLifespanProfile};
pub use insights::{generate_insights, generate_insights_for, InsightStatus, SystemInsight};
pub use recommendations::{
    generate_demo_recommendations, generate_recommendations, CostTable, DemoDataSource, Persona,
    Priority, RealDataSource, Recommendation, RecommendationSource,
};
pub use finance::{equity_summary, net_gain_badge_tier, BadgeTier, EquitySummary};
