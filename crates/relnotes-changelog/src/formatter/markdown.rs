//! Markdown document formatter

use tracing::{debug, instrument};

use super::DocumentFormatter;
use crate::types::Document;

/// Marker line opening and closing the front-matter block
pub const FRONT_MATTER_MARKER: &str = "---";

/// Markdown formatter with a front-matter header
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }
}

impl DocumentFormatter for MarkdownFormatter {
    #[instrument(skip(self, document), fields(title = %document.title, section_count = document.sections.len()))]
    fn format(&self, document: &Document) -> String {
        let mut output = String::new();

        output.push_str(FRONT_MATTER_MARKER);
        output.push('\n');
        output.push_str(&format!("title: \"{}\"\n", escape_quoted(&document.title)));
        output.push_str(&format!(
            "publishdate: {}\n",
            document.publish_date.format("%Y-%m-%d")
        ));
        output.push_str(FRONT_MATTER_MARKER);
        output.push_str("\n\n");

        output.push_str(&format!("Date: {}\n\n", document.raw_date));

        for section in &document.sections {
            let hashes = "#".repeat(usize::from(section.level));
            output.push_str(&format!("{} {}\n", hashes, section.heading));
            for bullet in &section.bullets {
                output.push_str(bullet);
                output.push('\n');
            }
            output.push('\n');
        }

        debug!(output_len = output.len(), "markdown document formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

fn escape_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
