//! Day-of-week computation.

use crate::date::CalendarDate;

/// A day of the week, numbered 0 (Sunday) through 6 (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Returns the weekday number, 0 = Sunday through 6 = Saturday.
    pub fn number(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_number(n: u8) -> Self {
        match n % 7 {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }
}

/// Returns the day of the week for a calendar date.
///
/// The day fraction is truncated first, so any time of day on the same
/// civil date gives the same weekday. The week runs continuously across
/// the 1582 reform: October 4 is a Thursday and October 15 the following
/// Friday.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(day_of_week(CalendarDate::new(1954, 6, 30.0)), Weekday::Wednesday);
/// ```
pub fn day_of_week(date: CalendarDate) -> Weekday {
    let midnight = CalendarDate::new(date.year(), date.month(), date.day().trunc());
    // The Julian Date of a whole day ends in .5, so adding 1.5 gives a
    // whole number and rem_euclid keeps it non-negative before the epoch.
    let n = (midnight.julian_date().value() + 1.5).rem_euclid(7.0).round();
    Weekday::from_number(n as u8)
}
