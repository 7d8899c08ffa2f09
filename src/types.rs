use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR,
};
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay {
            month,
            day: value,
            year,
        })?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            return Err(ParseError::InvalidDay {
                month,
                day: value,
                year,
            });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Number of days since 1970-01-01 for a proleptic Gregorian date.
///
/// The era/year-of-era decomposition is Howard Hinnant's `days_from_civil`
/// algorithm; it makes day differences a single subtraction.
pub(crate) const fn civil_day_number(year: u16, month: u8, day: u8) -> i64 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let y = year as i64 - if month <= 2 { 1 } else { 0 };
    let era = y / 400;
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Weekday index for a civil day number, `0` = Monday .. `6` = Sunday.
/// 1970-01-01 was a Thursday.
pub(crate) const fn weekday_index(day_number: i64) -> usize {
    (((day_number + 3) % 7 + 7) % 7) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid() {
        assert!(matches!(Year::new(0), Err(ParseError::InvalidYear(0))));
        assert!(matches!(
            Year::new(10000),
            Err(ParseError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 2024, 1).is_ok());
        assert!(Day::new(31, 2024, 1).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 2023, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(30, 2024, 2).is_err());

        // April - 30 days
        assert!(Day::new(30, 2024, 4).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
    }

    #[test]
    fn test_day_new_invalid_zero() {
        let result = Day::new(0, 2024, 1);
        assert!(matches!(result, Err(ParseError::InvalidDay { .. })));
    }

    #[test]
    fn test_is_leap_year_cases() {
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2021));
        assert!(!is_leap_year(2023));
        // Century years not divisible by 400
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        // Divisible by 400
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn test_days_in_month() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2024, month), 31);
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2024, month), 30);
        }
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_civil_day_number_epoch() {
        assert_eq!(civil_day_number(1970, 1, 1), 0);
        assert_eq!(civil_day_number(1970, 1, 2), 1);
        assert_eq!(civil_day_number(1969, 12, 31), -1);
    }

    #[test]
    fn test_civil_day_number_diffs() {
        // Across a leap day: 2020-02-28 -> 2020-03-01 is 2 days
        let a = civil_day_number(2020, 2, 28);
        let b = civil_day_number(2020, 3, 1);
        assert_eq!(b - a, 2);

        // Non-leap year: 2021-02-28 -> 2021-03-01 is 1 day
        let a = civil_day_number(2021, 2, 28);
        let b = civil_day_number(2021, 3, 1);
        assert_eq!(b - a, 1);

        // A known gap from the formatter's calibration data
        let reference = civil_day_number(2023, 2, 7);
        assert_eq!(reference - civil_day_number(2023, 1, 13), 25);
        assert_eq!(reference - civil_day_number(2023, 1, 11), 27);
    }

    #[test]
    fn test_weekday_index() {
        // 1970-01-01 was a Thursday
        assert_eq!(weekday_index(civil_day_number(1970, 1, 1)), 3);
        // 2023-02-07 was a Tuesday
        assert_eq!(weekday_index(civil_day_number(2023, 2, 7)), 1);
        // 2000-01-01 was a Saturday
        assert_eq!(weekday_index(civil_day_number(2000, 1, 1)), 5);
    }
}
