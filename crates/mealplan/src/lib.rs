pub mod plan;
pub mod slot;

pub use plan::{MealPlan, candidates};
pub use slot::{Day, Meal};
