use pantryswipe_shared::ConversionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),
}
