//! Resume text extraction, structured field parsing, and improvement tips.

pub mod documents;
pub mod extractor;
pub mod handlers;
pub mod sections;
pub mod suggestions;

pub use extractor::extract;
pub use suggestions::{suggest, Suggestions};
