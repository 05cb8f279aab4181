use pantryswipe_catalog::IngredientDefinition;
use pantryswipe_pantry::PantryEntry;
use pantryswipe_shared::format_amount;

use crate::convert::{UnitAmount, distribute};

/// Units whose plural is not a bare "s".
const IRREGULAR_PLURALS: &[(&str, &str)] = &[("loaf", "loaves"), ("box", "boxes"), ("bunch", "bunches")];

fn pluralize(unit: &str) -> String {
    for (singular, plural) in IRREGULAR_PLURALS {
        if unit == *singular {
            return (*plural).to_string();
        }
    }
    format!("{unit}s")
}

/// Unit word as shown to the user: pluralized past one, with "half_loaf"
/// style names spelled out as "half loaf" / "half loaves".
pub fn unit_label(unit: &str, quantity: f64) -> String {
    if let Some(rest) = unit.strip_prefix("half_") {
        return if quantity > 1.0 {
            format!("half {}", pluralize(rest))
        } else {
            format!("half {rest}")
        };
    }
    if quantity > 1.0 {
        pluralize(unit)
    } else {
        unit.to_string()
    }
}

fn join_parts(parts: &[String], ingredient_id: &str) -> String {
    match parts {
        [] => ingredient_id.to_string(),
        [only] => format!("{only} of {ingredient_id}"),
        _ => {
            let head = parts[..parts.len() - 1].join(", ");
            let last = &parts[parts.len() - 1];
            format!("{head} and {last} of {ingredient_id}")
        }
    }
}

/// Render a distribution as one human-readable phrase.
///
/// Ingredients with a single conversion unit read as a bare count
/// ("3 Bread"); an empty distribution falls back to the ingredient name
/// alone.
pub fn format_quantity(def: &IngredientDefinition, parts: &[UnitAmount]) -> String {
    if def.single_unit().is_some() {
        let total: f64 = parts.iter().map(|part| part.quantity).sum();
        return if total > 0.0 {
            format!("{} {}", format_amount(total), def.id)
        } else {
            def.id.clone()
        };
    }

    let rendered: Vec<String> = parts
        .iter()
        .filter(|part| part.quantity > 0.0)
        .map(|part| {
            format!(
                "{} {}",
                format_amount(part.quantity),
                unit_label(&part.unit, part.quantity)
            )
        })
        .collect();
    join_parts(&rendered, &def.id)
}

/// The pantry row for one ingredient: every entry aggregated into the most
/// efficient unit mix. Without catalog conversion data the row degrades to
/// the entries as the user entered them.
pub fn pantry_display_line<'a>(
    def: Option<&IngredientDefinition>,
    ingredient_id: &str,
    entries: impl IntoIterator<Item = &'a PantryEntry>,
) -> String {
    let entries: Vec<&PantryEntry> = entries.into_iter().collect();

    let Some(def) = def.filter(|d| !d.conversions.is_empty()) else {
        tracing::warn!(
            ingredient = ingredient_id,
            "no conversion data, displaying pantry entries as entered"
        );
        let parts: Vec<String> = entries
            .iter()
            .filter(|entry| entry.quantity > 0.0)
            .map(|entry| {
                format!(
                    "{} {}",
                    format_amount(entry.quantity),
                    unit_label(&entry.unit, entry.quantity)
                )
            })
            .collect();
        return if parts.is_empty() {
            ingredient_id.to_string()
        } else {
            format!("{} of {ingredient_id}", parts.join(" and "))
        };
    };

    let total: f64 = entries.iter().map(|entry| entry.normalized.max(0.0)).sum();
    format_quantity(def, &distribute(def, total))
}
