use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One document from the external ingredient catalog. The document id
/// doubles as the display name ("Bread").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDefinition {
    pub id: String,
    pub base_unit: String,
    /// How many base units one of each named unit equals.
    #[serde(default)]
    pub conversions: HashMap<String, f64>,
    /// Carried through from the catalog; not consulted by the converter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub package_sizes: Vec<f64>,
}

impl IngredientDefinition {
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.conversions.get(unit).copied()
    }

    /// Defined units, largest base factor first. Units with equal factors
    /// order by name so the result never varies between runs.
    pub fn units_by_size(&self) -> Vec<(&str, f64)> {
        let mut units: Vec<(&str, f64)> = self
            .conversions
            .iter()
            .map(|(unit, factor)| (unit.as_str(), *factor))
            .collect();
        units.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(b.0))
        });
        units
    }

    /// Ingredients with a single conversion unit display as a bare count
    /// ("3 Bread"), so callers need to detect them.
    pub fn single_unit(&self) -> Option<(&str, f64)> {
        if self.conversions.len() == 1 {
            self.conversions
                .iter()
                .next()
                .map(|(unit, factor)| (unit.as_str(), *factor))
        } else {
            None
        }
    }
}
