pub mod document;
pub mod settings;

pub use document::{Document, DocumentType, LineItem, Totals};
pub use settings::Settings;
