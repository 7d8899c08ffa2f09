//! Extracts calendar dates embedded in free-form text according to a
//! configured date-format template, and renders the distance between two
//! dates as a short relative-time phrase ("today", "in 2 days", "a month
//! ago").
//!
//! The host application supplies raw text and its configured template and
//! language once per session; everything here is pure and synchronous.
//!
//! ```
//! use date_between::{CalendarDate, Locale, date_between};
//!
//! let today = CalendarDate::new(2023, 2, 7).unwrap();
//! let phrase = date_between(
//!     "shipped on 2023-02-05, see notes",
//!     Some("yyyy-MM-dd"),
//!     today,
//!     &Locale::english(),
//! );
//! assert_eq!(phrase.as_deref(), Some("2 days ago"));
//! ```

mod consts;
mod extract;
mod format;
mod locale;
mod prelude;
mod relative;
mod types;

pub use consts::*;
pub use extract::parse_date;
pub use format::DateFormat;
pub use locale::Locale;
pub use relative::between;
pub use types::{Day, Month, Year};

use crate::prelude::*;
use std::str::FromStr;

/// A calendar date: a (year, month, day) triple with no time-of-day or
/// timezone component. Immutable once built; every component is validated
/// at construction, so a value of this type is always a real date.
/// Field order gives lexicographic date ordering for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date, validating every component (including day-of-month
    /// against the year's calendar).
    ///
    /// # Errors
    /// Returns the component-specific `ParseError` for anything out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_checked = Year::new(year)?;
        let month_checked = Month::new(month)?;
        let day_checked = Day::new(day, year, month)?;
        Ok(Self {
            year: year_checked,
            month: month_checked,
            day: day_checked,
        })
    }

    /// Returns the year (1..=9999)
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    /// Returns the 1-based month (1..=12)
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month (1..=31)
    pub const fn day(self) -> u8 {
        self.day.get()
    }

    /// Days since 1970-01-01; the difference of two day numbers is the
    /// signed whole-day distance between the dates.
    pub const fn day_number(self) -> i64 {
        types::civil_day_number(self.year(), self.month(), self.day())
    }

    /// Full English weekday name ("Tuesday")
    pub const fn weekday_name(self) -> &'static str {
        WEEKDAY_NAMES[types::weekday_index(self.day_number())]
    }

    /// Three-letter English weekday abbreviation ("Tue")
    pub const fn weekday_abbrev(self) -> &'static str {
        WEEKDAY_ABBREVS[types::weekday_index(self.day_number())]
    }

    /// Zero-based count of calendar months since year 1, for
    /// whole-calendar-month distance arithmetic.
    pub(crate) const fn month_index(self) -> u64 {
        self.year() as u64 * MONTHS_PER_YEAR + (self.month() as u64 - 1)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses the canonical ISO form, `yyyy-MM-dd`. Free-form extraction by
    /// template lives in [`parse_date`]; this is only the round-trip inverse
    /// of [`Display`](std::fmt::Display).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut parts = trimmed.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let year: u16 = year
            .parse()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let month: u8 = month
            .parse()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let day: u8 = day
            .parse()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The whole pipeline in one call: find a date in `content` written in
/// `preferred_format`, then phrase its distance from `reference`.
///
/// Returns `None` when no date is found, including when no template is
/// configured or the template is unrecognized.
pub fn date_between(
    content: &str,
    preferred_format: Option<&str>,
    reference: CalendarDate,
    locale: &Locale,
) -> Option<String> {
    let date = extract::parse_date(content, preferred_format)?;
    Some(relative::between(date, reference, locale))
}
