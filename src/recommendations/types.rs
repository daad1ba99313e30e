//! Recommendation Types
//!
//! Output records of the ranker. `net_gain` is never stored: it is derived
//! from `value_impact` and `estimated_cost` on every access, including when
//! the record is serialized.

use serde::Serialize;
use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::error::DataQualityWarning;
use crate::lifespan::SystemCategory;
use crate::property::{AgeBasis, UpgradeKind};

/// Priority tier of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Priority {
    /// At or past expected life, or flagged poor/failing by the owner
    Urgent,
    /// Late in expected life
    Soon,
    /// Value-adding, not failure-driven
    Consider,
}

impl Priority {
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgent => 0,
            Priority::Soon => 1,
            Priority::Consider => 2,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::Soon => "Soon",
            Priority::Consider => "Consider",
        }
    }
}

/// Ranked, costed suggestion for one documented system
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "RecommendationRecord")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub system_type: String,
    pub category: SystemCategory,
    pub upgrade_kind: UpgradeKind,
    pub why_text: String,
    pub estimated_cost: f64,
    /// Estimated property-value add
    pub value_impact: f64,
    pub annual_savings: Option<f64>,
    pub priority: Priority,
    /// Sort key within a tier; not shown to users
    pub urgency_score: f64,
    pub effective_age_years: u32,
    pub age_basis: AgeBasis,
    /// Effective age over average lifespan (may exceed 100)
    pub percent_of_life_used: f64,
    pub display_priority: u32,
    pub warnings: SmallVec<[DataQualityWarning; 2]>,
}

impl Recommendation {
    /// Value impact minus estimated cost
    pub fn net_gain(&self) -> f64 {
        self.value_impact - self.estimated_cost
    }

    /// A documented fallback replaced missing data somewhere in this record
    pub fn used_fallback(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Serialized form, with the derived fields filled in
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    pub id: String,
    pub title: String,
    pub system_type: String,
    pub category: SystemCategory,
    pub upgrade_kind: UpgradeKind,
    pub why_text: String,
    pub estimated_cost: f64,
    pub value_impact: f64,
    pub annual_savings: Option<f64>,
    pub net_gain: f64,
    pub priority: Priority,
    pub urgency_score: f64,
    pub effective_age_years: u32,
    pub age_basis: AgeBasis,
    pub percent_of_life_used: f64,
    pub used_fallback: bool,
    pub warnings: Vec<DataQualityWarning>,
}

impl From<Recommendation> for RecommendationRecord {
    fn from(rec: Recommendation) -> Self {
        let net_gain = rec.net_gain();
        let used_fallback = rec.used_fallback();
        Self {
            id: rec.id,
            title: rec.title,
            system_type: rec.system_type,
            category: rec.category,
            upgrade_kind: rec.upgrade_kind,
            why_text: rec.why_text,
            estimated_cost: rec.estimated_cost,
            value_impact: rec.value_impact,
            annual_savings: rec.annual_savings,
            net_gain,
            priority: rec.priority,
            urgency_score: rec.urgency_score,
            effective_age_years: rec.effective_age_years,
            age_basis: rec.age_basis,
            percent_of_life_used: rec.percent_of_life_used,
            used_fallback,
            warnings: rec.warnings.into_vec(),
        }
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Ranking order: tier, then urgency (desc), then net gain (desc)
///
/// Display priority and id break any remaining ties so output is deterministic.
pub fn compare_recommendations(a: &Recommendation, b: &Recommendation) -> Ordering {
    a.priority
        .rank()
        .cmp(&b.priority.rank())
        .then_with(|| b.urgency_score.total_cmp(&a.urgency_score))
        .then_with(|| b.net_gain().total_cmp(&a.net_gain()))
        .then_with(|| a.display_priority.cmp(&b.display_priority))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_recommendations(recs: &mut [Recommendation]) {
    recs.sort_by(compare_recommendations);
}

/// Tiers in order and urgency non-increasing within each tier
pub fn is_ranked(recs: &[Recommendation]) -> bool {
    recs.windows(2).all(|pair| {
        let (a, b) = (&pair[0], &pair[1]);
        match a.priority.rank().cmp(&b.priority.rank()) {
            Ordering::Less => true,
            Ordering::Equal => a.urgency_score >= b.urgency_score,
            Ordering::Greater => false,
        }
    })
}

/// First `n` recommendations (the whole list if shorter)
pub fn top_n(recs: &[Recommendation], n: usize) -> &[Recommendation] {
    &recs[..n.min(recs.len())]
}

/// What a ranked list means for the owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RecommendationOutcome {
    /// Nothing documented yet; show onboarding
    NoSystemsDocumented,
    /// Systems documented, none Urgent or Soon
    NothingPressing { consider: usize },
    NeedsAttention { urgent: usize, soon: usize },
}

impl RecommendationOutcome {
    pub fn classify(documented_count: usize, recs: &[Recommendation]) -> Self {
        if documented_count == 0 {
            return RecommendationOutcome::NoSystemsDocumented;
        }

        let count = |p: Priority| recs.iter().filter(|r| r.priority == p).count();
        let urgent = count(Priority::Urgent);
        let soon = count(Priority::Soon);

        if urgent == 0 && soon == 0 {
            RecommendationOutcome::NothingPressing {
                consider: count(Priority::Consider),
            }
        } else {
            RecommendationOutcome::NeedsAttention { urgent, soon }
        }
    }
}
