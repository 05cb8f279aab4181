use pantryswipe_mealplan::MealPlan;
use pantryswipe_pantry::PantryDocument;
use pantryswipe_shared::is_whole;
use serde::Serialize;

use crate::parse::{ParsedIngredient, parse_ingredient_line};

/// One line of the derived shopping list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroceryItem {
    pub display_text: String,
    pub already_owned: bool,
}

struct Group {
    amount: f64,
    unit: String,
    name: String,
}

/// Net shopping list for a meal plan: every recipe ingredient grouped by
/// (unit, name) in first-seen order and summed, each group rendered as a
/// canonical display string and flagged when the pantry already holds an
/// identical "<text> x <count>" line.
pub fn compute_grocery_list(plan: &MealPlan, pantry: &PantryDocument) -> Vec<GroceryItem> {
    let mut groups: Vec<Group> = Vec::new();

    for recipe in plan.recipes() {
        for line in &recipe.ingredients {
            let ParsedIngredient { amount, unit, name } = parse_ingredient_line(line);
            if name.is_empty() {
                tracing::warn!(recipe = %recipe.title, "dropping ingredient line with no name");
                continue;
            }
            if amount <= 0.0 {
                tracing::warn!(
                    recipe = %recipe.title,
                    ingredient = %name,
                    amount,
                    "dropping non-positive amount"
                );
                continue;
            }
            match groups
                .iter_mut()
                .find(|group| group.unit == unit && group.name == name)
            {
                Some(group) => group.amount += amount,
                None => groups.push(Group { amount, unit, name }),
            }
        }
    }

    groups
        .iter()
        .map(|group| {
            let display_text = canonical_display(group.amount, &group.unit, &group.name);
            let already_owned = pantry.contains_owned(&display_text);
            GroceryItem {
                display_text,
                already_owned,
            }
        })
        .collect()
}

/// Canonical display string for a grocery group:
/// "<amount>[ <unit>] of <name>", with a leading unit word (singular or
/// plural) and a leading "of " stripped from the name in case the parse
/// left them there. Whole amounts print bare, fractional ones with two
/// decimals.
pub fn canonical_display(amount: f64, unit: &str, name: &str) -> String {
    let mut clean = name.trim();
    if !unit.is_empty() {
        if let Some(rest) = strip_prefix_ci(clean, &format!("{unit} "))
            .or_else(|| strip_prefix_ci(clean, &format!("{unit}s ")))
        {
            clean = rest.trim_start();
        }
    }
    if let Some(rest) = strip_prefix_ci(clean, "of ") {
        clean = rest.trim_start();
    }

    let amount_text = if is_whole(amount) {
        format!("{}", amount.round() as i64)
    } else {
        format!("{amount:.2}")
    };

    if unit.is_empty() {
        format!("{amount_text} of {clean}")
    } else {
        format!("{amount_text} {unit} of {clean}")
    }
}

fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}
