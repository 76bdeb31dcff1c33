//! Release date parsing

use chrono::NaiveDate;
use relnotes_core::{NoteError, Result};
use tracing::debug;

/// Supported date formats, tried in order
pub const DATE_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y"];

/// Parse a release date such as `Jan 5, 2023` or `January 5, 2023`
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            debug!(text, format, %date, "parsed release date");
            return Ok(date);
        }
    }

    Err(NoteError::UnsupportedDateFormat(text.to_string()).into())
}
