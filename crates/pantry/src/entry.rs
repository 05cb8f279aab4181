use serde::{Deserialize, Serialize};

/// A structured pantry row: what the user owns, in the unit they added it
/// with. `normalized` caches quantity times the unit's conversion factor
/// at add time so display never needs a catalog round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryEntry {
    pub ingredient_id: String,
    pub quantity: f64,
    pub unit: String,
    pub normalized: f64,
}

/// Pantry documents accumulated entries across schema generations: newer
/// structured rows sit alongside legacy free-text lines such as
/// "2 slices of bread x 3". Neither form is migrated destructively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PantryItem {
    Entry(PantryEntry),
    FreeText(String),
}
