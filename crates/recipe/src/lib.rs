pub mod course;
pub mod recipe;

pub use course::{Course, group_by_course};
pub use recipe::{IngredientLine, Instructions, Recipe};
