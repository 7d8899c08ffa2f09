//! Finds a date embedded in free-form text using a configured template.
//!
//! Extraction is total: text with no date, an unrecognized template, or a
//! capture that resolves to an impossible date all yield `None`. Misses are
//! common and expected, so they are debug-level diagnostics, never errors.

use crate::CalendarDate;
use crate::consts::{MONTH_ABBREVS, MONTH_NAMES};
use crate::format::DateFormat;

/// Extracts the first date in `content` written in `preferred_format`.
///
/// Without a template there is no way to know what a date looks like, so
/// `None` in means `None` out; there is no default-format fallback.
pub fn parse_date(content: &str, preferred_format: Option<&str>) -> Option<CalendarDate> {
    let template = preferred_format?;
    let Some(format) = DateFormat::from_template(template) else {
        tracing::debug!(template = %template, "date format not handled");
        return None;
    };

    let Some(captures) = format.pattern().captures(content) else {
        tracing::debug!(template = %template, "could not parse content with date format");
        return None;
    };

    let year: u16 = captures.name("year")?.as_str().parse().ok()?;
    let month = resolve_month(captures.name("month")?.as_str())?;
    let day: u8 = captures.name("day")?.as_str().parse().ok()?;

    CalendarDate::new(year, month, day).ok()
}

/// A captured month is either a name ("January", "jan") or a decimal number.
fn resolve_month(captured: &str) -> Option<u8> {
    let lowered = captured.to_lowercase();
    month_from_name(&lowered).or_else(|| lowered.parse().ok())
}

/// Maps a lowercase English month name or 3-letter abbreviation to its
/// 1-based number. The name tables are 1-indexed, so the array position is
/// the month number itself.
fn month_from_name(name: &str) -> Option<u8> {
    if name.is_empty() {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|&candidate| candidate == name)
        .or_else(|| MONTH_ABBREVS.iter().position(|&candidate| candidate == name))
        .map(|position| position as u8)
}
