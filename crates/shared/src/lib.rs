pub mod amount;
pub mod error;

pub use amount::{format_amount, is_whole, round_tenth};
pub use error::{ConversionError, ConversionResult};
