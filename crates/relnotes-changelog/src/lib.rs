//! relnotes changelog - release notes record conversion
//!
//! This crate reads a structured release notes record, validates its date,
//! normalizes area labels and renders a change-log document with a
//! front-matter header.

pub mod converter;
pub mod date;
pub mod formatter;
pub mod generator;
pub mod labels;
pub mod parser;
pub mod render;
pub mod types;

pub use converter::{output_path, title_for, write_atomic, Conversion, Converter, Rendered};
pub use date::parse_date;
pub use formatter::{DocumentFormatter, MarkdownFormatter};
pub use generator::DocumentGenerator;
pub use labels::{label_for, Labeler};
pub use parser::parse_release_note;
pub use render::render_block;
pub use types::{AreaChange, CurrentSection, Document, NoteBody, ReleaseNote, Section, Shape};
