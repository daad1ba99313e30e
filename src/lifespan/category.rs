//! System Categories
//!
//! Broad grouping of building systems. Categories drive the value-impact
//! multiplier and are shown alongside insights and recommendations.

use serde::{Deserialize, Serialize};

/// Category of a building system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SystemCategory {
    /// Roof, foundation, framing
    Structural,
    /// Heating, cooling, ventilation
    Climate,
    /// Supply/drain lines, water heating
    Plumbing,
    /// Panel, wiring
    Electrical,
    /// Siding, windows, decks, gutters
    Exterior,
    /// Anything not in the reference table
    Other,
}

impl SystemCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            SystemCategory::Structural => "Structural",
            SystemCategory::Climate => "Climate",
            SystemCategory::Plumbing => "Plumbing",
            SystemCategory::Electrical => "Electrical",
            SystemCategory::Exterior => "Exterior",
            SystemCategory::Other => "Other",
        }
    }

    /// Get all categories
    pub fn all() -> &'static [SystemCategory] {
        &[
            SystemCategory::Structural,
            SystemCategory::Climate,
            SystemCategory::Plumbing,
            SystemCategory::Electrical,
            SystemCategory::Exterior,
            SystemCategory::Other,
        ]
    }
}

impl std::fmt::Display for SystemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
