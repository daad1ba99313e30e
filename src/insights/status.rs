//! Insight Status
//!
//! Advisory vocabulary for age-based insights. These statuses describe the
//! *statistical* age of a system type, never whether the actual system is
//! failing.

use serde::{Deserialize, Serialize};

/// Advisory status for one system type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InsightStatus {
    /// Home has outlived the expected life; the original may have been replaced
    Verify,
    /// Late in the expected life cycle
    Monitor,
    /// Early or mid life cycle
    Good,
}

impl InsightStatus {
    /// Sort rank: most worth a human check first
    pub fn rank(&self) -> u8 {
        match self {
            InsightStatus::Verify => 0,
            InsightStatus::Monitor => 1,
            InsightStatus::Good => 2,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            InsightStatus::Verify => "Verify",
            InsightStatus::Monitor => "Monitor",
            InsightStatus::Good => "Good",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InsightStatus::Verify => "Worth documenting - may have been updated",
            InsightStatus::Monitor => "Good to track for future planning",
            InsightStatus::Good => "Likely in good shape if maintained",
        }
    }

    /// Get all statuses in rank order
    pub fn all() -> &'static [InsightStatus] {
        &[InsightStatus::Verify, InsightStatus::Monitor, InsightStatus::Good]
    }
}
