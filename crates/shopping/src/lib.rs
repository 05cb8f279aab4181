pub mod convert;
pub mod display;
pub mod grocery;
pub mod parse;

pub use convert::{UnitAmount, aggregate, distribute, to_base, to_base_lenient};
pub use display::{format_quantity, pantry_display_line, unit_label};
pub use grocery::{GroceryItem, canonical_display, compute_grocery_list};
pub use parse::{ParsedIngredient, parse_ingredient_line};
