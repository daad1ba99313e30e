//! Error and Data-Quality Taxonomy
//!
//! Two kinds of problems come out of the engine:
//! - `InvalidInputError` - malformed property facts. Returned immediately,
//!   nothing is computed.
//! - `DataQualityWarning` - a fallback default was used. Attached to the
//!   affected output record, never returned as an error.

use serde::Serialize;
use thiserror::Error;

/// Earliest and latest years accepted as "plausible 4-digit years"
pub const MIN_PLAUSIBLE_YEAR: i32 = 1000;
pub const MAX_PLAUSIBLE_YEAR: i32 = 9999;

/// Malformed input that would produce confidently-wrong advice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("we need a valid year built to generate insights ({field} = {year} is not a 4-digit year)")]
    ImplausibleYear { field: &'static str, year: i32 },

    #[error("we need a valid year built to generate insights (year built {year_built} is after {current_year})")]
    YearBuiltInFuture { year_built: i32, current_year: i32 },

    #[error("the install year for {system_type} ({installed_year}) is after {current_year}; please check the date")]
    InstalledInFuture {
        system_type: String,
        installed_year: i32,
        current_year: i32,
    },
}

/// Non-fatal note that a best-available estimate replaced missing data
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DataQualityWarning {
    #[error("no cost multiplier for region '{region}', national average used")]
    RegionalMultiplierMissing { region: String },

    #[error("property region unknown, national average used")]
    RegionUnknown,

    #[error("no replacement cost data for {system_type}, default estimate used")]
    BaseCostMissing { system_type: String },

    #[error("property value unknown, default value of {assumed:.0} assumed")]
    PropertyValueMissing { assumed: f64 },

    #[error("no regional lifespan override for {system_type}, reference lifespan used")]
    LifespanOverrideMissing { system_type: String },

    #[error("regional lifespan override for {system_type} is zero, reference lifespan used")]
    LifespanOverrideInvalid { system_type: String },

    #[error("{system_type} is not in the lifespan reference table, generic {lifespan_years}-year lifespan used")]
    UnknownSystemType { system_type: String, lifespan_years: u32 },

    #[error("install date for {system_type} unknown, age of the home used")]
    AgeUnknown { system_type: String },
}

/// Check that a year is a plausible 4-digit calendar year
pub fn check_plausible_year(field: &'static str, year: i32) -> Result<i32, InvalidInputError> {
    if (MIN_PLAUSIBLE_YEAR..=MAX_PLAUSIBLE_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(InvalidInputError::ImplausibleYear { field, year })
    }
}

/// Validate `year_built` against `current_year` and return the home age
pub fn home_age(year_built: i32, current_year: i32) -> Result<u32, InvalidInputError> {
    check_plausible_year("year_built", year_built)?;
    check_plausible_year("current_year", current_year)?;

    if year_built > current_year {
        return Err(InvalidInputError::YearBuiltInFuture {
            year_built,
            current_year,
        });
    }

    Ok((current_year - year_built) as u32)
}
