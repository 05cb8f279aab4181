use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::entry::{PantryEntry, PantryItem};

/// Legacy free-text rows carry their owned count as "<text> x <count>".
static OWNED_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) x (\d+)$").expect("owned count pattern"));

/// Full pantry document as held by the external store. Reads return whole
/// snapshots and writes replace the list wholesale; merge semantics belong
/// to the store, not to this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PantryDocument {
    #[serde(default)]
    pub ingredients: Vec<PantryItem>,
    #[serde(
        rename = "lastUpdated",
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub last_updated: Option<OffsetDateTime>,
}

impl PantryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a structured entry. An existing row for the same ingredient and
    /// unit merges by incrementing both quantity and normalized amount;
    /// rows in other units stay separate for the display layer to combine.
    pub fn add_entry(&mut self, entry: PantryEntry) {
        let merged = self.ingredients.iter_mut().any(|item| {
            if let PantryItem::Entry(existing) = item
                && existing.ingredient_id == entry.ingredient_id
                && existing.unit == entry.unit
            {
                existing.quantity += entry.quantity;
                existing.normalized += entry.normalized;
                true
            } else {
                false
            }
        });
        if !merged {
            self.ingredients.push(PantryItem::Entry(entry));
        }
        self.touch();
    }

    /// Remove every structured row for an ingredient. The pantry view
    /// shows one row per ingredient, so removal covers all its units.
    /// Returns how many rows went away.
    pub fn remove_ingredient(&mut self, ingredient_id: &str) -> usize {
        let before = self.ingredients.len();
        self.ingredients
            .retain(|item| !matches!(item, PantryItem::Entry(e) if e.ingredient_id == ingredient_id));
        let removed = before - self.ingredients.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    /// Structured entries grouped by ingredient id in first-seen order.
    pub fn grouped(&self) -> Vec<(&str, Vec<&PantryEntry>)> {
        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<&PantryEntry>> = HashMap::new();
        for item in &self.ingredients {
            if let PantryItem::Entry(entry) = item {
                let id = entry.ingredient_id.as_str();
                if !groups.contains_key(id) {
                    order.push(id);
                }
                groups.entry(id).or_default().push(entry);
            }
        }
        order
            .into_iter()
            .map(|id| (id, groups.remove(id).unwrap_or_default()))
            .collect()
    }

    pub fn free_texts(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().filter_map(|item| match item {
            PantryItem::FreeText(text) => Some(text.as_str()),
            PantryItem::Entry(_) => None,
        })
    }

    /// Whether a "<text> x <count>" row exists whose text equals the given
    /// display string. Matching is exact string equality; the grocery list
    /// produces the canonical form on both sides.
    pub fn contains_owned(&self, display_text: &str) -> bool {
        self.free_texts().any(|line| {
            OWNED_COUNT
                .captures(line)
                .is_some_and(|caps| &caps[1] == display_text)
        })
    }

    /// Record one more owned unit of a grocery line: bump the matching
    /// "<text> x <count>" row or append "<text> x 1".
    pub fn record_owned(&mut self, display_text: &str) {
        let bumped = self.ingredients.iter_mut().any(|item| {
            if let PantryItem::FreeText(line) = item
                && let Some(count) = OWNED_COUNT
                    .captures(line)
                    .filter(|caps| &caps[1] == display_text)
                    .and_then(|caps| caps[2].parse::<u64>().ok())
            {
                *line = format!("{display_text} x {}", count + 1);
                true
            } else {
                false
            }
        });
        if !bumped {
            self.ingredients
                .push(PantryItem::FreeText(format!("{display_text} x 1")));
        }
        self.touch();
    }

    pub fn touch(&mut self) {
        self.last_updated = Some(OffsetDateTime::now_utc());
    }
}
