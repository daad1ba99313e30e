//! Recommendation Titles and Justification Text
//!
//! Plain-language reasons shown with each recommendation. The wording stays
//! advisory: age-driven items say a system is *at* or *near* its typical
//! service life and suggest an assessment, never that it has failed.

use crate::property::{AgeBasis, Condition, DocumentedSystem, UpgradeKind};
use crate::utils::format_currency;

use super::types::Priority;

/// Inputs the text generator needs for one recommendation
pub struct WhyContext<'a> {
    pub system: &'a DocumentedSystem,
    pub priority: Priority,
    pub effective_age_years: u32,
    pub age_basis: AgeBasis,
    pub average_lifespan_years: u32,
    pub percent_of_life_used: f64,
    pub estimated_cost: f64,
    pub value_impact: f64,
    pub annual_savings: Option<f64>,
}

pub fn recommendation_title(system_type: &str, priority: Priority, kind: UpgradeKind) -> String {
    match kind {
        UpgradeKind::Efficiency => format!("Efficiency upgrade: {}", system_type),
        UpgradeKind::Cosmetic => format!("Refresh {}", system_type),
        UpgradeKind::Replacement => match priority {
            Priority::Urgent => format!("Replace {}", system_type),
            Priority::Soon => format!("Plan {} replacement", system_type),
            Priority::Consider => format!("Upgrade {}", system_type),
        },
    }
}

fn age_phrase(ctx: &WhyContext<'_>) -> String {
    match ctx.age_basis {
        AgeBasis::InstallYear => format!("is about {} years old", ctx.effective_age_years),
        AgeBasis::OwnerEstimate => format!("is roughly {} years old by your estimate", ctx.effective_age_years),
        AgeBasis::HomeAge => format!(
            "may be original to the home ({} years)",
            ctx.effective_age_years
        ),
    }
}

fn value_phrase(ctx: &WhyContext<'_>) -> String {
    let mut text = format!(
        "Estimated cost {} could add about {} in home value",
        format_currency(ctx.estimated_cost),
        format_currency(ctx.value_impact)
    );
    if let Some(savings) = ctx.annual_savings {
        text.push_str(&format!(" and save around {} a year in energy", format_currency(savings)));
    }
    text.push('.');
    text
}

/// Human-readable justification for a recommendation
pub fn why_text(ctx: &WhyContext<'_>) -> String {
    let system = &ctx.system.system_type;

    let reason = match (ctx.system.upgrade_kind, ctx.priority) {
        (UpgradeKind::Efficiency, _) => format!(
            "A more efficient {} is an optional upgrade rather than a repair.",
            system
        ),
        (UpgradeKind::Cosmetic, _) => format!(
            "Refreshing the {} is an optional improvement rather than a repair.",
            system
        ),
        (UpgradeKind::Replacement, Priority::Urgent) if ctx.system.condition.is_flagged() => {
            let condition = match ctx.system.condition {
                Condition::Failing => "failing",
                _ => "in poor condition",
            };
            format!(
                "You noted the {} is {}. Worth getting a professional assessment and budgeting for replacement.",
                system, condition
            )
        }
        (UpgradeKind::Replacement, Priority::Urgent) => format!(
            "Your {} {}, at or past the typical {}-year service life. Worth getting a professional assessment and budgeting for replacement.",
            system,
            age_phrase(ctx),
            ctx.average_lifespan_years
        ),
        (UpgradeKind::Replacement, Priority::Soon) => format!(
            "Your {} {} and has used about {:.0}% of its typical {}-year life. A good time to start planning.",
            system,
            age_phrase(ctx),
            ctx.percent_of_life_used,
            ctx.average_lifespan_years
        ),
        (UpgradeKind::Replacement, Priority::Consider) => format!(
            "Your {} has life left, but upgrading it is likely to pay for itself.",
            system
        ),
    };

    format!("{} {}", reason, value_phrase(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(system: &'a DocumentedSystem, priority: Priority) -> WhyContext<'a> {
        WhyContext {
            system,
            priority,
            effective_age_years: 12,
            age_basis: AgeBasis::InstallYear,
            average_lifespan_years: 15,
            percent_of_life_used: 80.0,
            estimated_cost: 8_500.0,
            value_impact: 7_000.0,
            annual_savings: Some(450.0),
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(recommendation_title("Roof", Priority::Urgent, UpgradeKind::Replacement), "Replace Roof");
        assert_eq!(recommendation_title("HVAC", Priority::Soon, UpgradeKind::Replacement), "Plan HVAC replacement");
        assert_eq!(recommendation_title("Windows", Priority::Consider, UpgradeKind::Efficiency), "Efficiency upgrade: Windows");
    }

    #[test]
    fn test_soon_text_mentions_life_used() {
        let system = DocumentedSystem::new("HVAC").installed(2013);
        let text = why_text(&ctx(&system, Priority::Soon));
        assert!(text.contains("about 12 years old"));
        assert!(text.contains("80%"));
        assert!(text.contains("$8,500"));
        assert!(text.contains("$450 a year"));
    }

    #[test]
    fn test_condition_text() {
        let system = DocumentedSystem::new("Water Heater").with_condition(Condition::Failing);
        let text = why_text(&ctx(&system, Priority::Urgent));
        assert!(text.starts_with("You noted the Water Heater is failing."));
    }

    #[test]
    fn test_age_driven_text_is_advisory() {
        let system = DocumentedSystem::new("Roof").installed(1995);
        let text = why_text(&ctx(&system, Priority::Urgent)).to_lowercase();
        assert!(text.contains("assessment"));
        assert!(!text.contains("has failed"));
    }
}
