pub mod document;
pub mod entry;

pub use document::PantryDocument;
pub use entry::{PantryEntry, PantryItem};
