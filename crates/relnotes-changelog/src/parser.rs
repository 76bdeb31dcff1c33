//! Release notes record parsing

use relnotes_core::{NoteError, Result};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::date::parse_date;
use crate::types::{AreaChange, CurrentSection, NoteBody, ReleaseNote};

/// Record as it appears in YAML, before shape and date validation
#[derive(Debug, Deserialize)]
struct RawReleaseNote {
    date: Option<String>,
    changes: Option<Vec<RawAreaChange>>,
    #[serde(rename = "breaking changes")]
    breaking_changes: Option<String>,
    #[serde(rename = "security updates")]
    security_updates: Option<String>,
    #[serde(rename = "new features")]
    new_features: Option<String>,
    #[serde(rename = "bug fixes")]
    bug_fixes: Option<String>,
    #[serde(rename = "performance improvements")]
    performance_improvements: Option<String>,
    deprecations: Option<String>,
    #[serde(rename = "other changes")]
    other_changes: Option<String>,
}

impl RawReleaseNote {
    fn section(&self, section: CurrentSection) -> Option<&String> {
        match section {
            CurrentSection::BreakingChanges => self.breaking_changes.as_ref(),
            CurrentSection::SecurityUpdates => self.security_updates.as_ref(),
            CurrentSection::NewFeatures => self.new_features.as_ref(),
            CurrentSection::BugFixes => self.bug_fixes.as_ref(),
            CurrentSection::PerformanceImprovements => self.performance_improvements.as_ref(),
            CurrentSection::Deprecations => self.deprecations.as_ref(),
            CurrentSection::OtherChanges => self.other_changes.as_ref(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawAreaChange {
    area: Option<String>,
    change: Option<String>,
    #[serde(rename = "breaking-change")]
    breaking_change: Option<String>,
    deprecation: Option<String>,
}

impl RawAreaChange {
    fn into_area_change(self, index: usize) -> Result<AreaChange> {
        let area = self
            .area
            .ok_or_else(|| NoteError::MissingField(format!("changes[{}].area", index)))?;
        Ok(AreaChange {
            area,
            change: self.change,
            breaking_change: self.breaking_change,
            deprecation: self.deprecation,
        })
    }
}

/// Parse and validate a release notes record.
///
/// `origin` names the source in error messages (usually the file path).
#[instrument(skip(content), fields(len = content.len()))]
pub fn parse_release_note(content: &str, origin: &str) -> Result<ReleaseNote> {
    if content.trim().is_empty() {
        return Err(NoteError::MissingField("date".to_string()).into());
    }

    let mut raw: RawReleaseNote =
        serde_yaml::from_str(content).map_err(|source| NoteError::MalformedInput {
            origin: origin.to_string(),
            source,
        })?;

    let raw_date = raw
        .date
        .take()
        .ok_or_else(|| NoteError::MissingField("date".to_string()))?;
    let date = parse_date(&raw_date)?;

    let body = match raw.changes.take() {
        Some(changes) => NoteBody::Legacy(
            changes
                .into_iter()
                .enumerate()
                .map(|(i, change)| change.into_area_change(i))
                .collect::<Result<Vec<_>>>()?,
        ),
        None => NoteBody::Current(
            CurrentSection::ALL
                .iter()
                .filter_map(|section| raw.section(*section).map(|text| (*section, text.clone())))
                .collect(),
        ),
    };

    let note = ReleaseNote {
        raw_date,
        date,
        body,
    };
    debug!(%date, shape = ?note.shape(), "release notes record parsed");
    Ok(note)
}
