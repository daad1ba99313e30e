//! Recommendation Ranker
//!
//! Turns the systems an owner has actually documented into a ranked list of
//! replacement and upgrade recommendations, each with an estimated cost,
//! value impact and (where known) yearly energy savings.
//!
//! Missing data never aborts the run. Each fallback is attached to the
//! affected recommendation as a `DataQualityWarning`. Only malformed dates
//! (`InvalidInputError`) stop the computation.

use smallvec::SmallVec;
use std::borrow::Cow;

use super::costs::CostTable;
use super::types::{sort_recommendations, Priority, Recommendation};
use super::why_text::{recommendation_title, why_text, WhyContext};
use crate::config::{EngineConfig, Thresholds};
use crate::error::{DataQualityWarning, InvalidInputError};
use crate::finance::payback_years;
use crate::lifespan::{LifespanOverrides, LifespanTable, SystemLifespanProfile};
use crate::property::{AgeBasis, Condition, DocumentedSystem, PropertyFacts, ResolvedProperty, UpgradeKind};
use crate::utils::slugify;

/// Urgency bonus for owner-flagged condition
const POOR_CONDITION_BONUS: f64 = 25.0;
const FAILING_CONDITION_BONUS: f64 = 50.0;

/// Priority tier for a documented system
pub fn classify_priority(
    percent_of_life_used: f64,
    condition: Condition,
    kind: UpgradeKind,
    thresholds: &Thresholds,
) -> Priority {
    if kind.is_discretionary() {
        return Priority::Consider;
    }

    if percent_of_life_used >= thresholds.urgent_percent || condition.is_flagged() {
        Priority::Urgent
    } else if percent_of_life_used >= thresholds.soon_percent {
        Priority::Soon
    } else {
        Priority::Consider
    }
}

/// Sort key within a tier: life used plus any condition bonus
pub fn urgency_score(percent_of_life_used: f64, condition: Condition) -> f64 {
    let bonus = match condition {
        Condition::Failing => FAILING_CONDITION_BONUS,
        Condition::Poor => POOR_CONDITION_BONUS,
        _ => 0.0,
    };
    percent_of_life_used + bonus
}

/// Shared, read-only inputs for one ranking run
struct RankingContext<'a> {
    property: ResolvedProperty,
    table: Cow<'a, LifespanTable>,
    config: &'a EngineConfig,
    costs: Cow<'a, CostTable>,
    lifespan_data: Option<&'a LifespanOverrides>,
}

impl<'a> RankingContext<'a> {
    fn profile_for(
        &self,
        system_type: &str,
        warnings: &mut SmallVec<[DataQualityWarning; 2]>,
    ) -> SystemLifespanProfile {
        match self.table.get(system_type) {
            Some(profile) => {
                if let Some(overrides) = self.lifespan_data {
                    match overrides.get(system_type) {
                        None => warnings.push(DataQualityWarning::LifespanOverrideMissing {
                            system_type: system_type.to_string(),
                        }),
                        // Ignored by `with_overrides`
                        Some(0) => warnings.push(DataQualityWarning::LifespanOverrideInvalid {
                            system_type: system_type.to_string(),
                        }),
                        Some(_) => {}
                    }
                }
                profile.clone()
            }
            None => {
                let profile = SystemLifespanProfile::fallback(system_type);
                warnings.push(DataQualityWarning::UnknownSystemType {
                    system_type: system_type.to_string(),
                    lifespan_years: profile.average_lifespan_years,
                });
                profile
            }
        }
    }

    /// Build the recommendation for one system, or None if it is not worth showing
    fn evaluate(
        &self,
        index: usize,
        system: &DocumentedSystem,
    ) -> Result<Option<Recommendation>, InvalidInputError> {
        let mut warnings: SmallVec<[DataQualityWarning; 2]> = self.property.warnings.clone();

        let profile = self.profile_for(&system.system_type, &mut warnings);
        let lifespan = profile.average_lifespan_years.max(1);

        let (effective_age_years, age_basis) = system.effective_age(&self.property)?;
        if age_basis == AgeBasis::HomeAge {
            warnings.push(DataQualityWarning::AgeUnknown {
                system_type: system.system_type.clone(),
            });
        }

        let percent_of_life_used = effective_age_years as f64 / lifespan as f64 * 100.0;

        let estimate = self.costs.estimate(
            system,
            self.property.region.as_deref(),
            self.config.default_replacement_cost,
        );
        warnings.extend(estimate.warnings);
        let estimated_cost = estimate.cost;

        let value_impact = (self.property.current_value
            * self.config.value_impact.multiplier(profile.category))
        .round();
        let annual_savings = self.costs.annual_savings(&system.system_type);

        let priority = classify_priority(
            percent_of_life_used,
            system.condition,
            system.upgrade_kind,
            &self.config.thresholds,
        );

        if priority == Priority::Consider {
            let net_gain = value_impact - estimated_cost;
            let pays_back = system.upgrade_kind == UpgradeKind::Efficiency
                && payback_years(estimated_cost, annual_savings)
                    .map_or(false, |years| years <= self.config.efficiency_payback_years);
            if net_gain <= 0.0 && !pays_back {
                tracing::debug!(
                    "Skipping {}: {:.0}% of life used, no positive net gain or timely payback",
                    system.system_type,
                    percent_of_life_used
                );
                return Ok(None);
            }
        }

        for warning in &warnings {
            tracing::warn!("{}: {}", system.system_type, warning);
        }

        let why = why_text(&WhyContext {
            system,
            priority,
            effective_age_years,
            age_basis,
            average_lifespan_years: lifespan,
            percent_of_life_used,
            estimated_cost,
            value_impact,
            annual_savings,
        });

        let id = match &system.id {
            Some(id) => format!("rec-{}", id),
            None => format!("rec-{}-{}", slugify(&system.system_type), index + 1),
        };

        Ok(Some(Recommendation {
            id,
            title: recommendation_title(&system.system_type, priority, system.upgrade_kind),
            system_type: system.system_type.clone(),
            category: profile.category,
            upgrade_kind: system.upgrade_kind,
            why_text: why,
            estimated_cost,
            value_impact,
            annual_savings,
            priority,
            urgency_score: urgency_score(percent_of_life_used, system.condition),
            effective_age_years,
            age_basis,
            percent_of_life_used,
            display_priority: profile.display_priority,
            warnings,
        }))
    }
}

/// Rank recommendations for a property's documented systems
///
/// # Arguments
/// * `documented_systems` - What the owner has recorded (not modified)
/// * `property` - Property facts; `year_built` must be valid
/// * `table` - Lifespan reference table
/// * `config` - Thresholds, value-impact multipliers, defaults
/// * `regional_costs` - Cost data; built-in national averages if None
/// * `lifespan_data` - Regional lifespan overrides
///
/// # Returns
/// The full ranked list (Urgent, Soon, Consider; urgency descending within a
/// tier). An empty input gives an empty list.
pub fn generate_recommendations(
    documented_systems: &[DocumentedSystem],
    property: &PropertyFacts,
    table: &LifespanTable,
    config: &EngineConfig,
    regional_costs: Option<&CostTable>,
    lifespan_data: Option<&LifespanOverrides>,
) -> Result<Vec<Recommendation>, InvalidInputError> {
    let resolved = property.resolve(config)?;

    if documented_systems.is_empty() {
        tracing::debug!("No documented systems; returning empty recommendation list");
        return Ok(Vec::new());
    }

    let ctx = RankingContext {
        property: resolved,
        table: match lifespan_data {
            Some(overrides) => Cow::Owned(table.with_overrides(overrides)),
            None => Cow::Borrowed(table),
        },
        config,
        costs: match regional_costs {
            Some(costs) => Cow::Borrowed(costs),
            None => Cow::Owned(CostTable::national_defaults()),
        },
        lifespan_data,
    };

    let mut recommendations = Vec::with_capacity(documented_systems.len());
    for (index, system) in documented_systems.iter().enumerate() {
        if let Some(rec) = ctx.evaluate(index, system)? {
            recommendations.push(rec);
        }
    }

    sort_recommendations(&mut recommendations);

    tracing::debug!(
        "Ranked {} recommendations from {} documented systems ({} urgent)",
        recommendations.len(),
        documented_systems.len(),
        recommendations.iter().filter(|r| r.priority == Priority::Urgent).count()
    );

    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn property() -> PropertyFacts {
        PropertyFacts::new(1990)
            .evaluated_in(2025)
            .in_region("Midwest")
            .valued_at(400_000.0)
    }

    fn rank(systems: &[DocumentedSystem]) -> Vec<Recommendation> {
        generate_recommendations(
            systems,
            &property(),
            &LifespanTable::standard(),
            &EngineConfig::default(),
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_classify_priority_thresholds() {
        let t = Thresholds::default();
        let r = UpgradeKind::Replacement;
        assert_eq!(classify_priority(100.0, Condition::Good, r, &t), Priority::Urgent);
        assert_eq!(classify_priority(99.9, Condition::Good, r, &t), Priority::Soon);
        assert_eq!(classify_priority(80.0, Condition::Unknown, r, &t), Priority::Soon);
        assert_eq!(classify_priority(79.9, Condition::Unknown, r, &t), Priority::Consider);
        assert_eq!(classify_priority(10.0, Condition::Poor, r, &t), Priority::Urgent);
        assert_eq!(classify_priority(150.0, Condition::Failing, UpgradeKind::Cosmetic, &t), Priority::Consider);
    }

    #[test]
    fn test_hvac_at_eighty_percent_is_soon() {
        let recs = rank(&[DocumentedSystem::new("HVAC").installed(2013)]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Soon);
        assert_eq!(recs[0].effective_age_years, 12);
        assert_relative_eq!(recs[0].percent_of_life_used, 80.0, epsilon = 1e-9);
        assert_eq!(recs[0].title, "Plan HVAC replacement");
    }

    #[test]
    fn test_cost_and_value_model() {
        let recs = rank(&[DocumentedSystem::new("Roof").installed(1995)]);
        let roof = &recs[0];
        assert_eq!(roof.priority, Priority::Urgent);
        // 12,000 national x 0.95 Midwest
        assert_eq!(roof.estimated_cost, 11_400.0);
        // 400,000 x 0.03 structural
        assert_eq!(roof.value_impact, 12_000.0);
        assert_eq!(roof.net_gain(), 600.0);
        assert!(!roof.used_fallback());
    }

    #[test]
    fn test_young_system_without_gain_is_omitted() {
        // HVAC 5/15 years, cost 8,075 > value 8,000
        let recs = rank(&[DocumentedSystem::new("HVAC").installed(2020)]);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_young_system_with_gain_is_consider() {
        // Gutters 5/20 years, cost 1,425 < value 8,000
        let recs = rank(&[DocumentedSystem::new("Gutters").installed(2020)]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Consider);
        assert!(recs[0].net_gain() > 0.0);
    }

    #[test]
    fn test_efficiency_upgrade_always_consider() {
        let recs = rank(&[DocumentedSystem::new("HVAC")
            .installed(1990)
            .with_condition(Condition::Failing)
            .with_quote(3_000.0)
            .with_kind(UpgradeKind::Efficiency)]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Consider);
        assert_eq!(recs[0].annual_savings, Some(450.0));
    }

    #[test]
    fn test_loss_making_efficiency_upgrade_needs_timely_payback() {
        // Quote 8,500 against 8,000 value: net -500, payback 8,500 / 450 = 18.9 years
        let hvac = [DocumentedSystem::new("HVAC")
            .installed(2015)
            .with_quote(8_500.0)
            .with_kind(UpgradeKind::Efficiency)];
        assert!(rank(&hvac).is_empty());

        let patient = EngineConfig {
            efficiency_payback_years: 20.0,
            ..EngineConfig::default()
        };
        let recs = generate_recommendations(
            &hvac,
            &property(),
            &LifespanTable::standard(),
            &patient,
            None,
            None,
        )
        .unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].net_gain(), -500.0);
    }

    #[test]
    fn test_cosmetic_upgrade_without_gain_is_omitted() {
        let recs = rank(&[DocumentedSystem::new("HVAC")
            .installed(2015)
            .with_quote(8_500.0)
            .with_kind(UpgradeKind::Cosmetic)]);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_partial_value_impact_config_keeps_other_categories() {
        let config = EngineConfig::from_json_str(r#"{ "valueImpact": { "Climate": 0.05 } }"#).unwrap();
        let recs = generate_recommendations(
            &[
                DocumentedSystem::new("Roof").installed(1995),
                DocumentedSystem::new("HVAC").installed(2005),
            ],
            &property(),
            &LifespanTable::standard(),
            &config,
            None,
            None,
        )
        .unwrap();

        let roof = recs.iter().find(|r| r.system_type == "Roof").unwrap();
        assert_eq!(roof.value_impact, 12_000.0);
        let hvac = recs.iter().find(|r| r.system_type == "HVAC").unwrap();
        assert_eq!(hvac.value_impact, 20_000.0);
    }

    #[test]
    fn test_zero_lifespan_override_is_reported() {
        let overrides = LifespanOverrides::new().with("HVAC", 0);
        let recs = generate_recommendations(
            &[DocumentedSystem::new("HVAC").installed(2013)],
            &property(),
            &LifespanTable::standard(),
            &EngineConfig::default(),
            None,
            Some(&overrides),
        )
        .unwrap();

        let hvac = &recs[0];
        // Reference 15-year lifespan still applies
        assert_eq!(hvac.priority, Priority::Soon);
        assert!(hvac.used_fallback());
        assert!(hvac
            .warnings
            .iter()
            .any(|w| matches!(w, DataQualityWarning::LifespanOverrideInvalid { .. })));
        assert!(!hvac
            .warnings
            .iter()
            .any(|w| matches!(w, DataQualityWarning::LifespanOverrideMissing { .. })));
    }

    #[test]
    fn test_poor_condition_is_urgent() {
        let recs = rank(&[DocumentedSystem::new("Water Heater")
            .installed(2022)
            .with_condition(Condition::Poor)]);
        assert_eq!(recs[0].priority, Priority::Urgent);
        assert_relative_eq!(recs[0].urgency_score, 25.0 + 3.0 / 12.0 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_system_uses_fallback_profile() {
        let recs = rank(&[DocumentedSystem::new("Hot Tub").aged(22)]);
        assert_eq!(recs.len(), 1);
        let rec = &recs[0];
        assert_eq!(rec.priority, Priority::Urgent);
        assert!(rec.used_fallback());
        assert!(rec
            .warnings
            .iter()
            .any(|w| matches!(w, DataQualityWarning::UnknownSystemType { lifespan_years: 20, .. })));
        assert!(rec
            .warnings
            .iter()
            .any(|w| matches!(w, DataQualityWarning::BaseCostMissing { .. })));
    }

    #[test]
    fn test_missing_install_date_uses_home_age() {
        let recs = rank(&[DocumentedSystem::new("Water Heater")]);
        assert_eq!(recs[0].effective_age_years, 35);
        assert_eq!(recs[0].age_basis, AgeBasis::HomeAge);
        assert!(recs[0]
            .warnings
            .iter()
            .any(|w| matches!(w, DataQualityWarning::AgeUnknown { .. })));
    }

    #[test]
    fn test_lifespan_overrides() {
        let overrides = LifespanOverrides::new().with("HVAC", 12);
        let recs = generate_recommendations(
            &[
                DocumentedSystem::new("HVAC").installed(2013),
                DocumentedSystem::new("Roof").installed(2000),
            ],
            &property(),
            &LifespanTable::standard(),
            &EngineConfig::default(),
            None,
            Some(&overrides),
        )
        .unwrap();

        let hvac = recs.iter().find(|r| r.system_type == "HVAC").unwrap();
        assert_eq!(hvac.priority, Priority::Urgent);
        assert!(!hvac.used_fallback());

        let roof = recs.iter().find(|r| r.system_type == "Roof").unwrap();
        assert!(roof
            .warnings
            .iter()
            .any(|w| matches!(w, DataQualityWarning::LifespanOverrideMissing { .. })));
    }

    #[test]
    fn test_future_install_year_is_error() {
        let result = generate_recommendations(
            &[DocumentedSystem::new("Roof").installed(2030)],
            &property(),
            &LifespanTable::standard(),
            &EngineConfig::default(),
            None,
            None,
        );
        assert!(matches!(result, Err(InvalidInputError::InstalledInFuture { .. })));
    }

    #[test]
    fn test_empty_input_gives_empty_list() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn test_callers_records_untouched() {
        let systems = vec![
            DocumentedSystem::new("Roof").installed(1995),
            DocumentedSystem::new("HVAC"),
        ];
        let before = systems.clone();
        let _ = rank(&systems);
        assert_eq!(systems, before);
    }

    #[test]
    fn test_ids_unique_and_stable() {
        let recs = rank(&[
            DocumentedSystem::new("Roof").installed(1995),
            DocumentedSystem::new("Roof").installed(1996).with_id("garage-roof"),
        ]);
        let mut ids: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["rec-garage-roof", "rec-roof-1"]);
    }
}
