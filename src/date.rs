//! Civil calendar date with a fractional day.

use crate::julian::JulianDate;

/// A civil calendar date in astronomical year numbering.
///
/// The year may be negative or zero: year 0 is 1 BC, year -1 is 2 BC, and
/// so on. The integer part of `day` is the day of the month and the
/// fractional part is the time of day as a fraction of 24 hours, so
/// `4.81` means the 4th at 19:26:24.
///
/// No range validation is performed. Out-of-range components are carried
/// arithmetically: month 13 behaves as January of the following year, day 0
/// as the last day of the preceding month.
///
/// The derived ordering compares `(year, month, day)` lexicographically,
/// which is chronological order for dates written in calendar convention.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: f64,
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and fractional day.
    pub const fn new(year: i32, month: u8, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Returns the year (astronomical numbering, 0 = 1 BC).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12 by convention).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the month with its time-of-day fraction.
    pub fn day(self) -> f64 {
        self.day
    }

    /// Converts this date to its [`JulianDate`].
    ///
    /// Shorthand for [`JulianDate::from_calendar`].
    pub fn julian_date(self) -> JulianDate {
        JulianDate::from_calendar(self)
    }
}
