pub mod catalog;
pub mod definition;

pub use catalog::IngredientCatalog;
pub use definition::IngredientDefinition;
