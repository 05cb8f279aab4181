use thiserror::Error;

pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion failures are never fatal: callers degrade (skip the line,
/// assume base units) and surface the condition through tracing instead of
/// blanking the whole computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("unknown unit '{unit}' for ingredient '{ingredient}'")]
    UnknownUnit { ingredient: String, unit: String },

    #[error("malformed quantity text: '{0}'")]
    MalformedQuantityText(String),

    #[error("amount must be positive, got {0}")]
    ZeroOrNegativeAmount(f64),
}
