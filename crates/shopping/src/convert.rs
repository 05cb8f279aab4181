use pantryswipe_catalog::IngredientDefinition;
use pantryswipe_shared::{ConversionError, ConversionResult, round_tenth};

/// Residue below this counts as a zero remainder rather than a
/// floating-point artifact.
const REMAINDER_EPSILON: f64 = 1e-9;

/// A quantity in one of an ingredient's defined units.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitAmount {
    pub unit: String,
    pub quantity: f64,
}

impl UnitAmount {
    pub fn new(unit: impl Into<String>, quantity: f64) -> Self {
        Self {
            unit: unit.into(),
            quantity,
        }
    }
}

/// Convert a unit-qualified quantity to the ingredient's base unit.
///
/// A unit missing from a non-empty conversion table is a caller error and
/// is rejected. The factor-1 fallback for ingredients the catalog cannot
/// resolve lives in [`to_base_lenient`]; this strict form never assumes.
pub fn to_base(def: &IngredientDefinition, quantity: f64, unit: &str) -> ConversionResult<f64> {
    if quantity <= 0.0 {
        return Err(ConversionError::ZeroOrNegativeAmount(quantity));
    }
    if def.conversions.is_empty() {
        return Err(ConversionError::UnknownIngredient(def.id.clone()));
    }
    match def.factor(unit) {
        Some(factor) => Ok(quantity * factor),
        None => Err(ConversionError::UnknownUnit {
            ingredient: def.id.clone(),
            unit: unit.to_string(),
        }),
    }
}

/// [`to_base`] with the degradation policy applied: an ingredient the
/// catalog does not know, or one without conversion data, is assumed to
/// already be expressed in base units. The assumption is logged so
/// data-quality problems stay visible without interrupting the user.
pub fn to_base_lenient(
    def: Option<&IngredientDefinition>,
    ingredient_id: &str,
    quantity: f64,
    unit: &str,
) -> ConversionResult<f64> {
    if quantity <= 0.0 {
        return Err(ConversionError::ZeroOrNegativeAmount(quantity));
    }
    match def {
        Some(def) if !def.conversions.is_empty() => to_base(def, quantity, unit),
        _ => {
            tracing::warn!(
                ingredient = ingredient_id,
                unit,
                "no conversion data, treating quantity as base units"
            );
            Ok(quantity)
        }
    }
}

/// Sum a set of contributions in base units. Zero and negative amounts
/// drop out, and an unknown unit skips its entry with a warning instead of
/// failing the whole sum. Entry order does not affect the result beyond
/// float rounding.
pub fn aggregate(def: &IngredientDefinition, entries: &[UnitAmount]) -> f64 {
    let mut total = 0.0;
    for entry in entries {
        if entry.quantity <= 0.0 {
            continue;
        }
        match to_base(def, entry.quantity, &entry.unit) {
            Ok(base) => total += base,
            Err(err) => tracing::warn!(
                ingredient = %def.id,
                unit = %entry.unit,
                %err,
                "skipping entry during aggregation"
            ),
        }
    }
    total
}

/// Greedy largest-unit-first decomposition of a base amount into the
/// ingredient's defined units.
///
/// Units named with a `half_` prefix are display aliases (nobody shops in
/// half loaves) and are never selected here, though they convert and
/// format normally. After the whole-unit pass any remainder lands on the
/// smallest selectable unit, rounded to one decimal place and merged into
/// that unit's bucket when the pass already produced one. Zero buckets are
/// omitted; a zero total yields an empty result.
pub fn distribute(def: &IngredientDefinition, total_base: f64) -> Vec<UnitAmount> {
    let all = def.units_by_size();
    let selectable: Vec<(&str, f64)> = all
        .iter()
        .copied()
        .filter(|(unit, _)| !unit.starts_with("half_"))
        .collect();
    let units = if selectable.is_empty() { all } else { selectable };

    let mut quantities = vec![0.0; units.len()];
    let mut remaining = total_base.max(0.0);

    for (i, (_, factor)) in units.iter().enumerate() {
        if *factor <= 0.0 {
            continue;
        }
        let whole = (remaining / factor).floor();
        if whole >= 1.0 {
            quantities[i] += whole;
            remaining -= whole * factor;
        }
    }

    if remaining > REMAINDER_EPSILON
        && let Some((i, (_, factor))) = units.iter().enumerate().next_back()
        && *factor > 0.0
    {
        let fractional = round_tenth(remaining / factor);
        if fractional > 0.0 {
            quantities[i] += fractional;
        }
    }

    units
        .into_iter()
        .zip(quantities)
        .filter(|(_, quantity)| *quantity > 0.0)
        .map(|((unit, _), quantity)| UnitAmount::new(unit, quantity))
        .collect()
}
