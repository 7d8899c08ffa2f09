//! The supported date-format templates and their compiled content patterns.
//!
//! Each template is an enumerated variant, so an unsupported format is a
//! lookup miss rather than a runtime construction fault. A template compiles
//! once into a regex with named `year`/`month`/`day` capture groups that can
//! pull a date out of arbitrary surrounding text.

use crate::CalendarDate;
use crate::consts::{MONTH_ABBREVS, MONTH_NAMES};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// A date-format template, identified by its user-visible template string
/// (e.g. `"yyyy-MM-dd"` or `"MMM do, yyyy"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `do MMM yyyy`
    OrdinalAbbrevYear,
    /// `do MMMM yyyy`
    OrdinalFullYear,
    /// `MMM do, yyyy`
    AbbrevOrdinalYear,
    /// `MMMM do, yyyy`
    FullOrdinalYear,
    /// `E, dd-MM-yyyy`
    WeekdayDmyDash,
    /// `E, dd.MM.yyyy`
    WeekdayDmyDot,
    /// `E, MM/dd/yyyy`
    WeekdayMdySlash,
    /// `E, yyyy/MM/dd`
    WeekdayYmdSlash,
    /// `EEE, dd-MM-yyyy`
    WeekdayAbbrevDmyDash,
    /// `EEE, dd.MM.yyyy`
    WeekdayAbbrevDmyDot,
    /// `EEE, MM/dd/yyyy`
    WeekdayAbbrevMdySlash,
    /// `EEE, yyyy/MM/dd`
    WeekdayAbbrevYmdSlash,
    /// `EEEE, dd-MM-yyyy`
    WeekdayFullDmyDash,
    /// `EEEE, dd.MM.yyyy`
    WeekdayFullDmyDot,
    /// `EEEE, MM/dd/yyyy`
    WeekdayFullMdySlash,
    /// `EEEE, yyyy/MM/dd`
    WeekdayFullYmdSlash,
    /// `dd-MM-yyyy`
    DmyDash,
    /// `MM/dd/yyyy`
    MdySlash,
    /// `MM-dd-yyyy`
    MdyDash,
    /// `MM_dd_yyyy`
    MdyUnderscore,
    /// `yyyy/MM/dd`
    YmdSlash,
    /// `yyyy-MM-dd`
    YmdDash,
    /// `yyyy-MM-dd EEEE`
    YmdDashWeekday,
    /// `yyyy_MM_dd`
    YmdUnderscore,
    /// `yyyyMMdd`
    YmdCompact,
    /// `yyyy年MM月dd日`
    YmdCjk,
}

impl DateFormat {
    /// Every supported template, in registry order.
    pub const ALL: [Self; 26] = [
        Self::OrdinalAbbrevYear,
        Self::OrdinalFullYear,
        Self::AbbrevOrdinalYear,
        Self::FullOrdinalYear,
        Self::WeekdayDmyDash,
        Self::WeekdayDmyDot,
        Self::WeekdayMdySlash,
        Self::WeekdayYmdSlash,
        Self::WeekdayAbbrevDmyDash,
        Self::WeekdayAbbrevDmyDot,
        Self::WeekdayAbbrevMdySlash,
        Self::WeekdayAbbrevYmdSlash,
        Self::WeekdayFullDmyDash,
        Self::WeekdayFullDmyDot,
        Self::WeekdayFullMdySlash,
        Self::WeekdayFullYmdSlash,
        Self::DmyDash,
        Self::MdySlash,
        Self::MdyDash,
        Self::MdyUnderscore,
        Self::YmdSlash,
        Self::YmdDash,
        Self::YmdDashWeekday,
        Self::YmdUnderscore,
        Self::YmdCompact,
        Self::YmdCjk,
    ];

    /// The user-visible template string this variant stands for.
    pub const fn template(self) -> &'static str {
        match self {
            Self::OrdinalAbbrevYear => "do MMM yyyy",
            Self::OrdinalFullYear => "do MMMM yyyy",
            Self::AbbrevOrdinalYear => "MMM do, yyyy",
            Self::FullOrdinalYear => "MMMM do, yyyy",
            Self::WeekdayDmyDash => "E, dd-MM-yyyy",
            Self::WeekdayDmyDot => "E, dd.MM.yyyy",
            Self::WeekdayMdySlash => "E, MM/dd/yyyy",
            Self::WeekdayYmdSlash => "E, yyyy/MM/dd",
            Self::WeekdayAbbrevDmyDash => "EEE, dd-MM-yyyy",
            Self::WeekdayAbbrevDmyDot => "EEE, dd.MM.yyyy",
            Self::WeekdayAbbrevMdySlash => "EEE, MM/dd/yyyy",
            Self::WeekdayAbbrevYmdSlash => "EEE, yyyy/MM/dd",
            Self::WeekdayFullDmyDash => "EEEE, dd-MM-yyyy",
            Self::WeekdayFullDmyDot => "EEEE, dd.MM.yyyy",
            Self::WeekdayFullMdySlash => "EEEE, MM/dd/yyyy",
            Self::WeekdayFullYmdSlash => "EEEE, yyyy/MM/dd",
            Self::DmyDash => "dd-MM-yyyy",
            Self::MdySlash => "MM/dd/yyyy",
            Self::MdyDash => "MM-dd-yyyy",
            Self::MdyUnderscore => "MM_dd_yyyy",
            Self::YmdSlash => "yyyy/MM/dd",
            Self::YmdDash => "yyyy-MM-dd",
            Self::YmdDashWeekday => "yyyy-MM-dd EEEE",
            Self::YmdUnderscore => "yyyy_MM_dd",
            Self::YmdCompact => "yyyyMMdd",
            Self::YmdCjk => "yyyy年MM月dd日",
        }
    }

    /// Looks a template string up in the registry.
    ///
    /// Returns `None` for anything outside the supported set; an unrecognized
    /// template is an expected configuration state, not a fault.
    pub fn from_template(template: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.template() == template)
    }

    /// The compiled content-matching pattern for this template.
    pub fn pattern(self) -> &'static Regex {
        &PATTERNS[self as usize]
    }

    /// Formats a date in this template, the inverse of extraction.
    ///
    /// Weekday markers render as English weekday names and `do` renders the
    /// day with its ordinal suffix (`1st`, `22nd`, ...).
    pub fn render(self, date: CalendarDate) -> String {
        let mut out = String::new();
        let mut rest = self.template();
        while !rest.is_empty() {
            if let Some(tail) = rest.strip_prefix("yyyy") {
                out.push_str(&format!("{:04}", date.year()));
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("MMMM") {
                out.push_str(&capitalize(MONTH_NAMES[date.month() as usize]));
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("MMM") {
                out.push_str(&capitalize(MONTH_ABBREVS[date.month() as usize]));
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("MM") {
                out.push_str(&format!("{:02}", date.month()));
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("EEEE") {
                out.push_str(date.weekday_name());
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("EEE").or_else(|| rest.strip_prefix('E')) {
                out.push_str(date.weekday_abbrev());
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("do") {
                out.push_str(&format!("{}{}", date.day(), ordinal_suffix(date.day())));
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("dd") {
                out.push_str(&format!("{:02}", date.day()));
                rest = tail;
            } else {
                // Literal character, passed through untouched
                let mut chars = rest.chars();
                if let Some(ch) = chars.next() {
                    out.push(ch);
                }
                rest = chars.as_str();
            }
        }
        out
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

/// Template tokens and their capture sub-patterns, most specific first.
/// Longer tokens must come before their prefixes (`MMMM` > `MMM` > `MM`,
/// `do` before `dd`).
static TOKENS: LazyLock<[(&'static str, String); 6]> = LazyLock::new(|| {
    [
        ("yyyy", String::from(r"(?<year>\d{4})")),
        (
            "MMMM",
            format!("(?<month>{})", MONTH_NAMES[1..].join("|")),
        ),
        (
            "MMM",
            format!("(?<month>{})", MONTH_ABBREVS[1..].join("|")),
        ),
        ("MM", String::from(r"(?<month>\d{1,2})")),
        ("do", String::from(r"(?<day>\d{1,2})(?:st|nd|rd|th)")),
        ("dd", String::from(r"(?<day>\d{1,2})")),
    ]
});

/// Compiled patterns, indexed by variant discriminant (registry order).
/// The supported set is fixed, so compilation cannot fail here.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DateFormat::ALL
        .iter()
        .map(|format| {
            let source = build_pattern(&strip_weekday(format.template()));
            Regex::new(&source).expect("fixed template set always compiles")
        })
        .collect()
});

/// Removes day-of-week marker tokens (`E`, `EEE`, `EEEE`) and whatever
/// comma/space they leave behind. The weekday is display-only noise as far
/// as extraction is concerned.
fn strip_weekday(template: &str) -> String {
    let stripped: String = template.chars().filter(|&ch| ch != 'E').collect();
    let stripped = stripped.strip_prefix(',').unwrap_or(&stripped);
    stripped.trim().to_owned()
}

/// Translates a stripped template into a regex source string, one
/// left-to-right pass: at each position the first matching entry of
/// [`TOKENS`] wins, everything else is an escaped literal.
fn build_pattern(template: &str) -> String {
    let mut pattern = String::from("(?i)");
    let mut rest = template;
    'scan: while !rest.is_empty() {
        for (token, sub_pattern) in TOKENS.iter() {
            if let Some(tail) = rest.strip_prefix(token) {
                pattern.push_str(sub_pattern);
                rest = tail;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            pattern.push_str(&regex::escape(ch.encode_utf8(&mut [0u8; 4])));
        }
        rest = chars.as_str();
    }
    pattern
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

const fn ordinal_suffix(day: u8) -> &'static str {
    if matches!(day, 11..=13) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
