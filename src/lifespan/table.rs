//! Lifespan Reference Table
//!
//! How long a building system usually lasts, what category it belongs to and
//! where it sorts on ties. The table is advisory: unknown system types get a
//! generic profile instead of an error.
//!
//! Configuration format (JSON):
//! ```json
//! { "Roof": { "averageLifespanYears": 25, "category": "Structural", "displayPriority": 1 } }
//! ```

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::category::SystemCategory;

/// Lifespan used for system types missing from the table
pub const FALLBACK_LIFESPAN_YEARS: u32 = 20;

/// Display priority used for system types missing from the table (sorts last)
pub const FALLBACK_DISPLAY_PRIORITY: u32 = 999;

/// Expected service life of one system type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemLifespanProfile {
    pub system_type: String,
    pub average_lifespan_years: u32,
    pub category: SystemCategory,
    /// Lower = shown first on ties
    pub display_priority: u32,
}

impl SystemLifespanProfile {
    pub fn new(
        system_type: &str,
        average_lifespan_years: u32,
        category: SystemCategory,
        display_priority: u32,
    ) -> Self {
        Self {
            system_type: system_type.to_string(),
            average_lifespan_years,
            category,
            display_priority,
        }
    }

    /// Generic profile for a system type the table does not know
    pub fn fallback(system_type: &str) -> Self {
        Self::new(
            system_type,
            FALLBACK_LIFESPAN_YEARS,
            SystemCategory::Other,
            FALLBACK_DISPLAY_PRIORITY,
        )
    }
}

/// Entry in the JSON configuration (system type is the map key)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileEntry {
    average_lifespan_years: u32,
    category: SystemCategory,
    display_priority: u32,
}

// ============================================================================
// STANDARD RESIDENTIAL REFERENCE DATA
// ============================================================================

static STANDARD_PROFILES: &[(&str, u32, SystemCategory, u32)] = &[
    ("Roof", 25, SystemCategory::Structural, 1),
    ("HVAC", 15, SystemCategory::Climate, 2),
    ("Water Heater", 12, SystemCategory::Plumbing, 3),
    ("Electrical Panel", 40, SystemCategory::Electrical, 4),
    ("Plumbing", 50, SystemCategory::Plumbing, 5),
    ("Foundation", 100, SystemCategory::Structural, 6),
    ("Windows", 25, SystemCategory::Exterior, 7),
    ("Siding", 30, SystemCategory::Exterior, 8),
    ("Gutters", 20, SystemCategory::Exterior, 9),
    ("Deck", 20, SystemCategory::Exterior, 10),
];

/// Immutable, ordered set of lifespan profiles
#[derive(Debug, Clone)]
pub struct LifespanTable {
    /// Sorted by display priority (stable, so ties keep insertion order)
    profiles: Vec<SystemLifespanProfile>,
    /// Lowercased system type -> index into `profiles`
    index: FxHashMap<String, usize>,
}

impl LifespanTable {
    /// Build a table from explicit profiles
    ///
    /// Rejects zero lifespans and duplicate system types (case-insensitive).
    pub fn new(mut profiles: Vec<SystemLifespanProfile>) -> Result<Self> {
        for profile in &profiles {
            if profile.average_lifespan_years == 0 {
                anyhow::bail!(
                    "Lifespan for '{}' must be a positive number of years",
                    profile.system_type
                );
            }
        }

        profiles.sort_by_key(|p| p.display_priority);

        let mut index = FxHashMap::default();
        for (i, profile) in profiles.iter().enumerate() {
            let key = normalize_key(&profile.system_type);
            if index.insert(key, i).is_some() {
                anyhow::bail!("Duplicate system type in lifespan table: '{}'", profile.system_type);
            }
        }

        Ok(Self { profiles, index })
    }

    /// Built-in residential reference data
    pub fn standard() -> Self {
        let profiles: Vec<SystemLifespanProfile> = STANDARD_PROFILES
            .iter()
            .map(|&(name, years, category, priority)| {
                SystemLifespanProfile::new(name, years, category, priority)
            })
            .collect();

        let index = profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (normalize_key(&p.system_type), i))
            .collect();

        Self { profiles, index }
    }

    /// Parse a table from its JSON configuration form
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, ProfileEntry> = serde_json::from_str(json)
            .with_context(|| "Failed to parse lifespan table JSON")?;

        let profiles = entries
            .into_iter()
            .map(|(system_type, entry)| SystemLifespanProfile {
                system_type,
                average_lifespan_years: entry.average_lifespan_years,
                category: entry.category,
                display_priority: entry.display_priority,
            })
            .collect();

        Self::new(profiles)
    }

    /// Load a table from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lifespan table: {:?}", path))?;
        Self::from_json_str(&contents)
    }

    /// Case-insensitive lookup
    pub fn get(&self, system_type: &str) -> Option<&SystemLifespanProfile> {
        self.index
            .get(&normalize_key(system_type))
            .map(|&i| &self.profiles[i])
    }

    /// Lookup that never fails: unknown types get the generic profile
    pub fn lookup_or_default(&self, system_type: &str) -> Cow<'_, SystemLifespanProfile> {
        match self.get(system_type) {
            Some(profile) => Cow::Borrowed(profile),
            None => Cow::Owned(SystemLifespanProfile::fallback(system_type)),
        }
    }

    /// All profiles in display order
    pub fn iter(&self) -> impl Iterator<Item = &SystemLifespanProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// New table with regional lifespan years applied
    ///
    /// Overrides for system types not in the table are ignored, as are zero
    /// values. `self` is left untouched.
    pub fn with_overrides(&self, overrides: &LifespanOverrides) -> Self {
        let mut table = self.clone();
        for profile in &mut table.profiles {
            match overrides.get(&profile.system_type) {
                Some(0) => {
                    tracing::warn!(
                        "Ignoring zero lifespan override for {}",
                        profile.system_type
                    );
                }
                Some(years) => profile.average_lifespan_years = years,
                None => {}
            }
        }
        table
    }
}

impl Default for LifespanTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Per-region lifespan years keyed by system type (case-insensitive)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "FxHashMap<String, u32>")]
pub struct LifespanOverrides {
    years: FxHashMap<String, u32>,
}

impl LifespanOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, system_type: &str, years: u32) {
        self.years.insert(normalize_key(system_type), years);
    }

    pub fn with(mut self, system_type: &str, years: u32) -> Self {
        self.insert(system_type, years);
        self
    }

    pub fn get(&self, system_type: &str) -> Option<u32> {
        self.years.get(&normalize_key(system_type)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

impl From<FxHashMap<String, u32>> for LifespanOverrides {
    fn from(raw: FxHashMap<String, u32>) -> Self {
        let years = raw
            .into_iter()
            .map(|(k, v)| (normalize_key(&k), v))
            .collect();
        Self { years }
    }
}

fn normalize_key(system_type: &str) -> String {
    system_type.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_order() {
        let table = LifespanTable::standard();
        let priorities: Vec<u32> = table.iter().map(|p| p.display_priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);
        assert_eq!(table.iter().next().map(|p| p.system_type.as_str()), Some("Roof"));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let table = LifespanTable::standard();
        let profile = table.get("water heater").unwrap();
        assert_eq!(profile.average_lifespan_years, 12);
        assert_eq!(profile.category, SystemCategory::Plumbing);
        assert!(table.get(" hvac ").is_some());
    }

    #[test]
    fn test_unknown_system_falls_back() {
        let table = LifespanTable::standard();
        let profile = table.lookup_or_default("Hot Tub");
        assert_eq!(profile.average_lifespan_years, FALLBACK_LIFESPAN_YEARS);
        assert_eq!(profile.category, SystemCategory::Other);
        assert_eq!(profile.system_type, "Hot Tub");
        assert!(matches!(profile, Cow::Owned(_)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "Roof": { "averageLifespanYears": 30, "category": "Structural", "displayPriority": 2 },
            "Boiler": { "averageLifespanYears": 20, "category": "Climate", "displayPriority": 1 }
        }"#;
        let table = LifespanTable::from_json_str(json).unwrap();
        assert_eq!(table.len(), 2);
        let names: Vec<&str> = table.iter().map(|p| p.system_type.as_str()).collect();
        assert_eq!(names, vec!["Boiler", "Roof"]);
        assert_eq!(table.get("roof").unwrap().average_lifespan_years, 30);
    }

    #[test]
    fn test_rejects_zero_lifespan() {
        let result = LifespanTable::new(vec![SystemLifespanProfile::new(
            "Roof",
            0,
            SystemCategory::Structural,
            1,
        )]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = LifespanTable::new(vec![
            SystemLifespanProfile::new("Roof", 25, SystemCategory::Structural, 1),
            SystemLifespanProfile::new("roof", 30, SystemCategory::Structural, 2),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_do_not_mutate_original() {
        let table = LifespanTable::standard();
        let overrides = LifespanOverrides::new().with("roof", 18).with("Sauna", 10);
        let regional = table.with_overrides(&overrides);

        assert_eq!(regional.get("Roof").unwrap().average_lifespan_years, 18);
        assert_eq!(table.get("Roof").unwrap().average_lifespan_years, 25);
        assert!(regional.get("Sauna").is_none());
    }

    #[test]
    fn test_overrides_from_json() {
        let overrides: LifespanOverrides =
            serde_json::from_str(r#"{ "Water Heater": 10 }"#).unwrap();
        assert_eq!(overrides.get("WATER HEATER"), Some(10));
    }
}
