pub mod config;
pub mod error;
pub mod observability;
pub mod store;

pub use config::Config;
pub use error::AppError;

// Re-export the domain crates so the binary and tests address one facade.
pub use pantryswipe_catalog as catalog;
pub use pantryswipe_mealplan as mealplan;
pub use pantryswipe_pantry as pantry;
pub use pantryswipe_recipe as recipe;
pub use pantryswipe_shared as shared;
pub use pantryswipe_shopping as shopping;
