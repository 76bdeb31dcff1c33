//! File-level conversion: read, convert, write

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use relnotes_core::{Config, RelnotesError, Result};
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use crate::formatter::{DocumentFormatter, MarkdownFormatter};
use crate::generator::DocumentGenerator;
use crate::labels::Labeler;
use crate::parser::parse_release_note;
use crate::types::Shape;

/// Report of a single conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Input record path
    pub input: PathBuf,
    /// Output document path
    pub output: PathBuf,
    /// Document title
    pub title: String,
    /// Parsed publish date
    pub publish_date: NaiveDate,
    /// Shape of the input record
    pub shape: Shape,
    /// Section headings in emission order
    pub sections: Vec<String>,
    /// Whether the document was written
    pub written: bool,
}

/// A fully rendered document that has not been written yet
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Conversion report
    pub conversion: Conversion,
    /// Document text
    pub contents: String,
}

/// Converts release notes files into change-log documents
pub struct Converter {
    generator: DocumentGenerator,
    formatter: Box<dyn DocumentFormatter>,
    extension: Option<String>,
}

impl Converter {
    /// Create a converter with built-in labels and the markdown formatter
    pub fn new() -> Self {
        Self {
            generator: DocumentGenerator::new(),
            formatter: Box::new(MarkdownFormatter::new()),
            extension: None,
        }
    }

    /// Create a converter from configuration
    pub fn from_config(config: &Config) -> Self {
        let labeler = Labeler::new().with_overrides(config.labels.clone());
        Self {
            generator: DocumentGenerator::new().with_labeler(labeler),
            formatter: Box::new(MarkdownFormatter::new()),
            extension: config.output.extension.clone(),
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: DocumentFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Extension of produced documents
    pub fn extension(&self) -> &str {
        self.extension
            .as_deref()
            .unwrap_or_else(|| self.formatter.extension())
    }

    /// Render the document for `input` without writing anything
    #[instrument(skip(self, input, out_dir), fields(input = %input.display(), out_dir = %out_dir.display()))]
    pub fn render_file(&self, input: &Path, out_dir: &Path) -> Result<Rendered> {
        let content =
            std::fs::read_to_string(input).map_err(|e| RelnotesError::io(input, e))?;
        let note = parse_release_note(&content, &input.display().to_string())?;

        let title = title_for(input);
        let document = self.generator.generate(&note, &title);
        let contents = self.formatter.format(&document);

        let conversion = Conversion {
            input: input.to_path_buf(),
            output: output_path(out_dir, &title, self.extension()),
            title,
            publish_date: document.publish_date,
            shape: note.shape(),
            sections: document.headings(),
            written: false,
        };
        debug!(output = %conversion.output.display(), bytes = contents.len(), "document rendered");

        Ok(Rendered {
            conversion,
            contents,
        })
    }

    /// Convert `input` and write the document into `out_dir`
    pub fn convert_file(&self, input: &Path, out_dir: &Path) -> Result<Conversion> {
        let Rendered {
            mut conversion,
            contents,
        } = self.render_file(input, out_dir)?;

        write_atomic(&conversion.output, &contents)?;
        conversion.written = true;

        info!(output = %conversion.output.display(), "release notes document generated");
        Ok(conversion)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Document title for an input path: its file name without extension
pub fn title_for(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `<out_dir>/<title>.<extension>`
pub fn output_path(out_dir: &Path, title: &str, extension: &str) -> PathBuf {
    out_dir.join(format!("{}.{}", title, extension))
}

/// Write `contents` to `path` through a temporary file in the same directory,
/// so the target is either absent, the old file, or the complete new file.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let io_err = |source: std::io::Error| RelnotesError::io(path, source);

    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;
    file.as_file().sync_all().map_err(io_err)?;
    file.persist(path).map_err(|e| io_err(e.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "file written");
    Ok(())
}
