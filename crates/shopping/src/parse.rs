use pantryswipe_recipe::IngredientLine;
use pantryswipe_shared::{ConversionError, ConversionResult};

/// An ingredient line reduced to numbers and lowercase text. Parsing is
/// best effort: recipe data is unreliable, so unparseable text becomes
/// amount 1 with the whole string as the name and the line still shows up.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIngredient {
    pub amount: f64,
    pub unit: String,
    pub name: String,
}

pub fn parse_ingredient_line(line: &IngredientLine) -> ParsedIngredient {
    match line {
        IngredientLine::Text(text) => parse_free_text(text).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to whole text as ingredient name");
            ParsedIngredient {
                amount: 1.0,
                unit: String::new(),
                name: text.trim().to_lowercase(),
            }
        }),
        IngredientLine::Structured { amount, unit, name } => ParsedIngredient {
            amount: amount.as_ref().and_then(amount_as_f64).unwrap_or(1.0),
            unit: unit.as_deref().unwrap_or("").trim().to_string(),
            name: name.as_deref().unwrap_or("").trim().to_lowercase(),
        },
    }
}

/// Structured amounts arrive as numbers or numeric strings.
fn amount_as_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Free text follows "<number> [<unit>] [of] <name>". A unit token only
/// counts as a unit when a name still follows it, so "3 eggs" is three
/// eggs rather than three "egg" of "s".
fn parse_free_text(text: &str) -> ConversionResult<ParsedIngredient> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [first, rest @ ..] = tokens.as_slice() else {
        return Err(ConversionError::MalformedQuantityText(text.to_string()));
    };
    let Ok(amount) = first.parse::<f64>() else {
        return Err(ConversionError::MalformedQuantityText(text.to_string()));
    };

    let mut rest = rest;
    let mut unit = "";
    if rest.len() >= 2
        && !rest[0].eq_ignore_ascii_case("of")
        && rest[0].chars().all(|c| c.is_ascii_alphabetic())
    {
        let after = if rest[1].eq_ignore_ascii_case("of") {
            &rest[2..]
        } else {
            &rest[1..]
        };
        if !after.is_empty() {
            unit = rest[0];
            rest = after;
        }
    }
    if rest.first().is_some_and(|token| token.eq_ignore_ascii_case("of")) {
        rest = &rest[1..];
    }
    if rest.is_empty() {
        return Err(ConversionError::MalformedQuantityText(text.to_string()));
    }

    Ok(ParsedIngredient {
        amount,
        unit: unit.to_string(),
        name: rest.join(" ").to_lowercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &str) -> ParsedIngredient {
        parse_ingredient_line(&IngredientLine::Text(line.to_string()))
    }

    #[test]
    fn test_number_unit_of_name() {
        assert_eq!(
            text("2 slices of bread"),
            ParsedIngredient {
                amount: 2.0,
                unit: "slices".to_string(),
                name: "bread".to_string(),
            }
        );
    }

    #[test]
    fn test_number_unit_name_without_of() {
        assert_eq!(
            text("2 cups flour"),
            ParsedIngredient {
                amount: 2.0,
                unit: "cups".to_string(),
                name: "flour".to_string(),
            }
        );
    }

    #[test]
    fn test_bare_count_keeps_name_whole() {
        // "3 eggs" is three eggs, not three "egg" of "s"
        assert_eq!(
            text("3 eggs"),
            ParsedIngredient {
                amount: 3.0,
                unit: String::new(),
                name: "eggs".to_string(),
            }
        );
    }

    #[test]
    fn test_number_of_name_has_no_unit() {
        assert_eq!(
            text("2 of bread"),
            ParsedIngredient {
                amount: 2.0,
                unit: String::new(),
                name: "bread".to_string(),
            }
        );
    }

    #[test]
    fn test_no_number_defaults_to_one() {
        assert_eq!(
            text("eggs"),
            ParsedIngredient {
                amount: 1.0,
                unit: String::new(),
                name: "eggs".to_string(),
            }
        );
    }

    #[test]
    fn test_fractional_amount_and_case_folding() {
        assert_eq!(
            text("1.5 Cups of Whole Milk"),
            ParsedIngredient {
                amount: 1.5,
                unit: "Cups".to_string(),
                name: "whole milk".to_string(),
            }
        );
    }

    #[test]
    fn test_structured_line() {
        let line = IngredientLine::Structured {
            amount: Some(serde_json::json!(3)),
            unit: Some(" cup ".to_string()),
            name: Some(" Milk ".to_string()),
        };
        assert_eq!(
            parse_ingredient_line(&line),
            ParsedIngredient {
                amount: 3.0,
                unit: "cup".to_string(),
                name: "milk".to_string(),
            }
        );
    }

    #[test]
    fn test_structured_line_string_amount_and_defaults() {
        let line = IngredientLine::Structured {
            amount: Some(serde_json::json!("2.5")),
            unit: None,
            name: Some("sugar".to_string()),
        };
        let parsed = parse_ingredient_line(&line);
        assert_eq!(parsed.amount, 2.5);
        assert_eq!(parsed.unit, "");

        let line = IngredientLine::Structured {
            amount: None,
            unit: None,
            name: Some("salt".to_string()),
        };
        assert_eq!(parse_ingredient_line(&line).amount, 1.0);
    }
}
