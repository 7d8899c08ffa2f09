//! Renders the distance between two calendar dates as a short phrase.
//!
//! Comparison is day-precision: both dates are plain (year, month, day)
//! triples, so "normalized to midnight" is inherent in the type. The unit
//! ladder is days below a 26-day gap, then whole calendar months, then whole
//! years once the month distance reaches twelve. Month and year counts come
//! from calendar-unit differences, not day-count division, which is what
//! makes an 11-year-2-month gap read "11 years" while a 12-year-1-month gap
//! reads "12 years".

use crate::CalendarDate;
use crate::consts::{DAY_GRANULARITY_LIMIT, MONTHS_PER_YEAR};
use crate::locale::Locale;

/// Phrases the distance from `reference` to `subject`.
///
/// Pure function of its inputs; `reference` is normally "now" but is explicit
/// so callers can pin it. A subject before the reference phrases as past
/// ("2 days ago"), after it as future ("in 2 days"), same day as the locale's
/// "today" label.
pub fn between(subject: CalendarDate, reference: CalendarDate, locale: &Locale) -> String {
    let day_diff = subject.day_number() - reference.day_number();
    if day_diff == 0 {
        return locale.today.to_owned();
    }

    let magnitude = day_diff.unsigned_abs();
    let span = if magnitude < DAY_GRANULARITY_LIMIT {
        locale.days(magnitude)
    } else {
        // Whole-calendar-unit distance; a short gap that still crosses into
        // the month range counts as one month
        let months = subject
            .month_index()
            .abs_diff(reference.month_index())
            .max(1);
        if months < MONTHS_PER_YEAR {
            locale.months(months)
        } else {
            locale.years(months / MONTHS_PER_YEAR)
        }
    };

    if day_diff < 0 {
        locale.ago(&span)
    } else {
        locale.within(&span)
    }
}
