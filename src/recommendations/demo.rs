//! Demo Personas
//!
//! Canned properties and documented systems for product demos. Each persona is
//! run through the real ranker at a fixed evaluation year, so demo output is
//! deterministic and satisfies exactly the same invariants as real output.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::costs::CostTable;
use super::ranker::generate_recommendations;
use super::types::Recommendation;
use crate::config::EngineConfig;
use crate::error::InvalidInputError;
use crate::lifespan::LifespanTable;
use crate::property::{Condition, DocumentedSystem, PropertyFacts, UpgradeKind};

/// Evaluation year for all demo data
pub const DEMO_YEAR: i32 = 2025;

/// Demo persona
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    /// Rental owner focused on returns
    Investor,
    /// Owner who keeps everything up to date
    ExcellentMaintainer,
    /// Recently bought an older home
    FirstTimeBuyer,
    /// Years of postponed upkeep
    DeferredMaintenance,
}

impl Persona {
    pub fn all() -> &'static [Persona] {
        &[
            Persona::Investor,
            Persona::ExcellentMaintainer,
            Persona::FirstTimeBuyer,
            Persona::DeferredMaintenance,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Persona::Investor => "investor",
            Persona::ExcellentMaintainer => "excellent-maintainer",
            Persona::FirstTimeBuyer => "first-time-buyer",
            Persona::DeferredMaintenance => "deferred-maintenance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::Investor => "Investor",
            Persona::ExcellentMaintainer => "Excellent Maintainer",
            Persona::FirstTimeBuyer => "First-Time Buyer",
            Persona::DeferredMaintenance => "Deferred Maintenance",
        }
    }

    /// Canned property facts
    pub fn property(&self) -> PropertyFacts {
        match self {
            Persona::Investor => PropertyFacts::new(1985)
                .evaluated_in(DEMO_YEAR)
                .in_region("South")
                .valued_at(280_000.0),
            Persona::ExcellentMaintainer => PropertyFacts::new(1995)
                .evaluated_in(DEMO_YEAR)
                .in_region("Northeast")
                .valued_at(520_000.0),
            Persona::FirstTimeBuyer => PropertyFacts::new(1972)
                .evaluated_in(DEMO_YEAR)
                .in_region("Midwest")
                .valued_at(310_000.0),
            // Region and value left incomplete so demos show fallback notes
            Persona::DeferredMaintenance => PropertyFacts::new(1960)
                .evaluated_in(DEMO_YEAR)
                .in_region("Pacific"),
        }
    }

    /// Canned documented systems
    pub fn documented_systems(&self) -> Vec<DocumentedSystem> {
        match self {
            Persona::Investor => vec![
                DocumentedSystem::new("HVAC").installed(2008).with_condition(Condition::Fair),
                DocumentedSystem::new("Roof").installed(2003),
                DocumentedSystem::new("Water Heater").installed(2016),
                DocumentedSystem::new("Windows").installed(1985).with_kind(UpgradeKind::Efficiency),
                DocumentedSystem::new("Gutters").installed(2020),
            ],
            Persona::ExcellentMaintainer => vec![
                DocumentedSystem::new("Roof").installed(2018).with_condition(Condition::Excellent),
                DocumentedSystem::new("HVAC").installed(2020).with_condition(Condition::Excellent),
                DocumentedSystem::new("Water Heater").installed(2021).with_condition(Condition::Good),
                DocumentedSystem::new("Electrical Panel").installed(2015),
                DocumentedSystem::new("Deck").installed(2012).with_kind(UpgradeKind::Cosmetic),
            ],
            Persona::FirstTimeBuyer => vec![
                DocumentedSystem::new("Roof").aged(20),
                DocumentedSystem::new("HVAC"),
                DocumentedSystem::new("Electrical Panel").installed(1972),
                DocumentedSystem::new("Water Heater").installed(2019).with_condition(Condition::Poor),
                DocumentedSystem::new("Siding").installed(2010),
            ],
            Persona::DeferredMaintenance => vec![
                DocumentedSystem::new("Roof").installed(1994).with_condition(Condition::Failing),
                DocumentedSystem::new("Siding").installed(1990),
                DocumentedSystem::new("Plumbing"),
                DocumentedSystem::new("Foundation"),
                DocumentedSystem::new("Septic System").aged(30),
            ],
        }
    }
}

impl FromStr for Persona {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Persona::all()
            .iter()
            .copied()
            .find(|p| p.key() == key)
            .ok_or_else(|| anyhow::anyhow!("Unknown demo persona: '{}'", s))
    }
}

/// Canned, ranked recommendations for a demo persona
pub fn generate_demo_recommendations(
    persona: Persona,
) -> Result<Vec<Recommendation>, InvalidInputError> {
    rank_canned(&persona.documented_systems(), &persona.property()).map_err(|e| {
        tracing::error!("Demo data for {} is invalid: {}", persona.key(), e);
        e
    })
}

/// Rank canned records with the built-in reference data
fn rank_canned(
    systems: &[DocumentedSystem],
    property: &PropertyFacts,
) -> Result<Vec<Recommendation>, InvalidInputError> {
    generate_recommendations(
        systems,
        property,
        &LifespanTable::standard(),
        &EngineConfig::default(),
        Some(&CostTable::national_defaults()),
        None,
    )
}
