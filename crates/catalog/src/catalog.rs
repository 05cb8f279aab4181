use std::collections::HashMap;

use crate::definition::IngredientDefinition;

/// In-memory snapshot of the ingredient catalog. The catalog itself is
/// owned and mutated out of band; one snapshot is held for the duration of
/// a computation so no partial update is observed mid-sum.
#[derive(Debug, Clone, Default)]
pub struct IngredientCatalog {
    items: HashMap<String, IngredientDefinition>,
}

impl IngredientCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(defs: impl IntoIterator<Item = IngredientDefinition>) -> Self {
        let items = defs.into_iter().map(|def| (def.id.clone(), def)).collect();
        Self { items }
    }

    pub fn insert(&mut self, def: IngredientDefinition) {
        self.items.insert(def.id.clone(), def);
    }

    pub fn get(&self, id: &str) -> Option<&IngredientDefinition> {
        self.items.get(id)
    }

    /// Case-insensitive substring match over ingredient ids, backing the
    /// add-ingredient autocomplete. Results sort by id.
    pub fn search(&self, query: &str) -> Vec<&IngredientDefinition> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<&IngredientDefinition> = self
            .items
            .values()
            .filter(|def| def.id.to_lowercase().contains(&needle))
            .collect();
        hits.sort_by(|a, b| a.id.cmp(&b.id));
        hits
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> IngredientCatalog {
        IngredientCatalog::from_definitions(["Bread", "Basil", "Butter"].map(|id| {
            IngredientDefinition {
                id: id.to_string(),
                base_unit: "unit".to_string(),
                conversions: HashMap::from([("unit".to_string(), 1.0)]),
                package_sizes: vec![],
            }
        }))
    }

    #[test]
    fn test_get_by_id() {
        let catalog = catalog();
        assert!(catalog.get("Bread").is_some());
        assert!(catalog.get("bread").is_none());
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let catalog = catalog();
        let hits: Vec<&str> = catalog.search("b").iter().map(|d| d.id.as_str()).collect();
        assert_eq!(hits, vec!["Basil", "Bread", "Butter"]);

        let hits: Vec<&str> = catalog.search("REA").iter().map(|d| d.id.as_str()).collect();
        assert_eq!(hits, vec!["Bread"]);
    }

    #[test]
    fn test_search_empty_query_matches_nothing() {
        assert!(catalog().search("  ").is_empty());
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut catalog = catalog();
        catalog.insert(IngredientDefinition {
            id: "Bread".to_string(),
            base_unit: "slice".to_string(),
            conversions: HashMap::from([("slice".to_string(), 1.0), ("loaf".to_string(), 8.0)]),
            package_sizes: vec![],
        });
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("Bread").map(|d| d.conversions.len()), Some(2));
    }
}
