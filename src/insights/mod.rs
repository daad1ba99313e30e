//! Age-based insight generation
//!
//! - `status.rs` - Advisory status vocabulary (Verify / Monitor / Good)
//! - `generator.rs` - Per-system insights from the home's construction year

pub mod status;
pub mod generator;

pub use status::InsightStatus;
pub use generator::{
    classify_status, generate_insights, generate_insights_for, InsightSummary, SystemInsight,
};
