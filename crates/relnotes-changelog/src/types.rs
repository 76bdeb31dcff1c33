//! Release note and document types

use chrono::NaiveDate;
use serde::Serialize;

/// A validated release notes record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNote {
    /// Date text exactly as written in the record
    pub raw_date: String,
    /// Parsed release date
    pub date: NaiveDate,
    /// Record body, legacy or current shape
    pub body: NoteBody,
}

impl ReleaseNote {
    /// Shape of the record body
    pub fn shape(&self) -> Shape {
        match self.body {
            NoteBody::Legacy(_) => Shape::Legacy,
            NoteBody::Current(_) => Shape::Current,
        }
    }
}

/// Body of a release notes record.
///
/// The variant is decided once when the record is parsed, from the presence
/// of the `changes` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteBody {
    /// Per-area change entries, in record order
    Legacy(Vec<AreaChange>),
    /// Named top-level sections present in the record, in fixed emission order
    Current(Vec<(CurrentSection, String)>),
}

/// Record shape tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Legacy,
    Current,
}

/// One entry of a legacy-shape record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaChange {
    /// Subsystem identifier (e.g. `api`, `xds`)
    pub area: String,
    /// General changes block
    pub change: Option<String>,
    /// Breaking changes block
    pub breaking_change: Option<String>,
    /// Deprecations block
    pub deprecation: Option<String>,
}

/// Top-level sections of a current-shape record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CurrentSection {
    BreakingChanges,
    SecurityUpdates,
    NewFeatures,
    BugFixes,
    PerformanceImprovements,
    Deprecations,
    OtherChanges,
}

impl CurrentSection {
    /// All sections, in emission order
    pub const ALL: [CurrentSection; 7] = [
        Self::BreakingChanges,
        Self::SecurityUpdates,
        Self::NewFeatures,
        Self::BugFixes,
        Self::PerformanceImprovements,
        Self::Deprecations,
        Self::OtherChanges,
    ];

    /// Key of this section in the record
    pub fn key(&self) -> &'static str {
        match self {
            Self::BreakingChanges => "breaking changes",
            Self::SecurityUpdates => "security updates",
            Self::NewFeatures => "new features",
            Self::BugFixes => "bug fixes",
            Self::PerformanceImprovements => "performance improvements",
            Self::Deprecations => "deprecations",
            Self::OtherChanges => "other changes",
        }
    }
}

/// A rendered section of the output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading level (2 for sections, 3 for nested subsections)
    pub level: u8,
    /// Heading text
    pub heading: String,
    /// Bullet lines, already prefixed
    pub bullets: Vec<String>,
}

impl Section {
    /// Create a new section
    pub fn new(level: u8, heading: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            level,
            heading: heading.into(),
            bullets,
        }
    }
}

/// An assembled change-log document, ready for formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Document title (input base name)
    pub title: String,
    /// Publish date
    pub publish_date: NaiveDate,
    /// Original date text
    pub raw_date: String,
    /// Sections in emission order
    pub sections: Vec<Section>,
}

impl Document {
    /// Headings of all sections, in order
    pub fn headings(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.heading.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_section_order() {
        let keys: Vec<&str> = CurrentSection::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            vec![
                "breaking changes",
                "security updates",
                "new features",
                "bug fixes",
                "performance improvements",
                "deprecations",
                "other changes",
            ]
        );
    }

    #[test]
    fn test_shape() {
        let note = ReleaseNote {
            raw_date: "Jan 5, 2023".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
            body: NoteBody::Current(Vec::new()),
        };
        assert_eq!(note.shape(), Shape::Current);
    }
}
