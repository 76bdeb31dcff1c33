//! Document formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use crate::types::Document;

/// Trait for change-log document formatters
pub trait DocumentFormatter: Send + Sync {
    /// Format a document to string
    fn format(&self, document: &Document) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
