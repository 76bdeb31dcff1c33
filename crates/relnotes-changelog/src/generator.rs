//! Document assembly from a release notes record

use tracing::{debug, info, instrument};

use crate::labels::Labeler;
use crate::render::render_block;
use crate::types::{AreaChange, Document, NoteBody, ReleaseNote, Section};

/// Heading of the nested breaking changes subsection
pub const BREAKING_CHANGES_HEADING: &str = "Breaking Changes";

/// Heading of the nested deprecations subsection
pub const DEPRECATIONS_HEADING: &str = "Deprecations";

/// Builds a [`Document`] from a [`ReleaseNote`]
#[derive(Debug, Clone, Default)]
pub struct DocumentGenerator {
    labeler: Labeler,
}

impl DocumentGenerator {
    /// Create a generator with the built-in labels
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom labeler
    pub fn with_labeler(mut self, labeler: Labeler) -> Self {
        self.labeler = labeler;
        self
    }

    /// Assemble the document for a record titled `title`
    #[instrument(skip(self, note), fields(shape = ?note.shape()))]
    pub fn generate(&self, note: &ReleaseNote, title: &str) -> Document {
        info!(title, date = %note.date, "generating release notes document");

        let sections: Vec<Section> = match &note.body {
            NoteBody::Legacy(changes) => changes
                .iter()
                .flat_map(|change| self.area_sections(change))
                .collect(),
            NoteBody::Current(blocks) => blocks
                .iter()
                .map(|(section, text)| {
                    Section::new(2, self.labeler.label(section.key()), render_block(text))
                })
                .collect(),
        };

        debug!(section_count = sections.len(), "document assembled");
        Document {
            title: title.to_string(),
            publish_date: note.date,
            raw_date: note.raw_date.clone(),
            sections,
        }
    }

    fn area_sections(&self, change: &AreaChange) -> Vec<Section> {
        let mut sections = vec![Section::new(
            2,
            self.labeler.label(&change.area),
            change.change.as_deref().map(render_block).unwrap_or_default(),
        )];

        if let Some(text) = &change.breaking_change {
            sections.push(Section::new(3, BREAKING_CHANGES_HEADING, render_block(text)));
        }

        if let Some(text) = &change.deprecation {
            sections.push(Section::new(3, DEPRECATIONS_HEADING, render_block(text)));
        }

        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CurrentSection;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn note(body: NoteBody) -> ReleaseNote {
        ReleaseNote {
            raw_date: "Jan 5, 2023".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 1, 5).unwrap(),
            body,
        }
    }

    fn area(name: &str, change: Option<&str>) -> AreaChange {
        AreaChange {
            area: name.to_string(),
            change: change.map(str::to_string),
            breaking_change: None,
            deprecation: None,
        }
    }

    #[test]
    fn test_legacy_area_without_subsections() {
        let doc = DocumentGenerator::new().generate(
            &note(NoteBody::Legacy(vec![area("api", Some("fix X"))])),
            "v0.2.0",
        );

        assert_eq!(doc.title, "v0.2.0");
        assert_eq!(
            doc.sections,
            vec![Section::new(2, "API", vec!["- fix X".to_string()])]
        );
    }

    #[test]
    fn test_legacy_subsections_follow_area() {
        let mut xds = area("xds", None);
        xds.breaking_change = Some("drop v2\n".to_string());
        xds.deprecation = Some("old field\nother field\n".to_string());

        let doc = DocumentGenerator::new().generate(
            &note(NoteBody::Legacy(vec![xds, area("routing", Some("a\nb"))])),
            "v0.3.0",
        );

        assert_eq!(
            doc.headings(),
            vec!["xDS", BREAKING_CHANGES_HEADING, DEPRECATIONS_HEADING, "Routing"]
        );
        assert_eq!(doc.sections[0].level, 2);
        assert!(doc.sections[0].bullets.is_empty());
        assert_eq!(doc.sections[1].level, 3);
        assert_eq!(doc.sections[2].bullets.len(), 2);
    }

    #[test]
    fn test_current_sections_labelled_by_key() {
        let doc = DocumentGenerator::new().generate(
            &note(NoteBody::Current(vec![
                (CurrentSection::NewFeatures, "feature A".to_string()),
                (CurrentSection::BugFixes, "fix Y".to_string()),
            ])),
            "v1.0.0",
        );

        assert_eq!(doc.headings(), vec!["New features", "Bug fixes"]);
        assert_eq!(doc.sections[1].bullets, vec!["- fix Y"]);
    }

    #[test]
    fn test_custom_labeler() {
        let labeler = Labeler::new()
            .with_overrides(BTreeMap::from([("grpc".to_string(), "gRPC".to_string())]));
        let doc = DocumentGenerator::new()
            .with_labeler(labeler)
            .generate(&note(NoteBody::Legacy(vec![area("grpc", None)])), "v0.4.0");

        assert_eq!(doc.headings(), vec!["gRPC"]);
    }
}
