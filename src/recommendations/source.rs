//! Recommendation Sources
//!
//! Screens ask a `RecommendationSource` for recommendations instead of
//! checking a demo flag. `RealDataSource` ranks the owner's documented
//! systems; `DemoDataSource` serves a canned persona.

use super::costs::CostTable;
use super::demo::{generate_demo_recommendations, Persona};
use super::ranker::generate_recommendations;
use super::types::Recommendation;
use crate::config::EngineConfig;
use crate::error::InvalidInputError;
use crate::finance::{summarize_recommendations, EquitySummary};
use crate::lifespan::{LifespanOverrides, LifespanTable};
use crate::property::{DocumentedSystem, PropertyFacts};

/// Something that can produce a ranked recommendation list
pub trait RecommendationSource {
    fn recommendations(&self) -> Result<Vec<Recommendation>, InvalidInputError>;

    /// True for canned demonstration data
    fn is_demo(&self) -> bool {
        false
    }

    /// Aggregate equity figures over the full ranked list
    fn equity_summary(&self) -> Result<EquitySummary, InvalidInputError> {
        Ok(summarize_recommendations(&self.recommendations()?))
    }
}

/// Recommendations from the owner's documented systems
#[derive(Debug, Clone, Copy)]
pub struct RealDataSource<'a> {
    systems: &'a [DocumentedSystem],
    property: &'a PropertyFacts,
    table: &'a LifespanTable,
    config: &'a EngineConfig,
    costs: Option<&'a CostTable>,
    lifespan_data: Option<&'a LifespanOverrides>,
}

impl<'a> RealDataSource<'a> {
    pub fn new(
        systems: &'a [DocumentedSystem],
        property: &'a PropertyFacts,
        table: &'a LifespanTable,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            systems,
            property,
            table,
            config,
            costs: None,
            lifespan_data: None,
        }
    }

    pub fn with_costs(mut self, costs: &'a CostTable) -> Self {
        self.costs = Some(costs);
        self
    }

    pub fn with_lifespan_overrides(mut self, overrides: &'a LifespanOverrides) -> Self {
        self.lifespan_data = Some(overrides);
        self
    }
}

impl RecommendationSource for RealDataSource<'_> {
    fn recommendations(&self) -> Result<Vec<Recommendation>, InvalidInputError> {
        generate_recommendations(
            self.systems,
            self.property,
            self.table,
            self.config,
            self.costs,
            self.lifespan_data,
        )
    }
}

/// Canned recommendations for a demo persona
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoDataSource {
    pub persona: Persona,
}

impl DemoDataSource {
    pub fn new(persona: Persona) -> Self {
        Self { persona }
    }
}

impl RecommendationSource for DemoDataSource {
    fn recommendations(&self) -> Result<Vec<Recommendation>, InvalidInputError> {
        generate_demo_recommendations(self.persona)
    }

    fn is_demo(&self) -> bool {
        true
    }
}
