use std::collections::BTreeMap;

use pantryswipe_recipe::{Course, Recipe};
use serde::{Deserialize, Serialize};

use crate::slot::{Day, Meal};

/// The weekly grid, mirrored from the external meal-plan document:
/// day -> meal -> assigned recipe. The UI session owns the mutable copy;
/// core computations receive immutable snapshots of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    slots: BTreeMap<Day, BTreeMap<Meal, Recipe>>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, day: Day, meal: Meal, recipe: Recipe) {
        self.slots.entry(day).or_default().insert(meal, recipe);
    }

    /// Remove one slot; a day with no remaining meals drops out entirely.
    pub fn remove(&mut self, day: Day, meal: Meal) -> Option<Recipe> {
        let meals = self.slots.get_mut(&day)?;
        let removed = meals.remove(&meal);
        if meals.is_empty() {
            self.slots.remove(&day);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn get(&self, day: Day, meal: Meal) -> Option<&Recipe> {
        self.slots.get(&day).and_then(|meals| meals.get(&meal))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Every planned recipe in day-then-meal order.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.slots.values().flat_map(|meals| meals.values())
    }
}

/// Liked recipes eligible for a slot: the recipe's course bucket must match
/// the meal being filled.
pub fn candidates<'a>(liked: &'a [Recipe], meal: Meal) -> Vec<&'a Recipe> {
    let wanted = match meal {
        Meal::Breakfast => Course::Breakfast,
        Meal::Lunch => Course::Lunch,
        Meal::Dinner => Course::Dinner,
    };
    liked
        .iter()
        .filter(|recipe| recipe.course_group() == wanted)
        .collect()
}
