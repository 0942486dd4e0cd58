//! Differences and offsets between calendar dates.

use crate::date::CalendarDate;
use crate::julian::JulianDate;

/// Returns the number of days from `from` to `to`.
///
/// Positive when `to` is later, negative when earlier, and fractional when
/// the day fractions differ. The count crosses the 1582 reform correctly:
/// October 4 to October 15 of that year is exactly one day.
///
/// # Examples
///
/// ```ignore
/// let mark_twain_born = CalendarDate::new(1835, 11, 16.0);
/// let mark_twain_died = CalendarDate::new(1910, 4, 20.0);
/// assert_eq!(date_difference(mark_twain_born, mark_twain_died), 27_183.0);
/// ```
pub fn date_difference(from: CalendarDate, to: CalendarDate) -> f64 {
    to.julian_date() - from.julian_date()
}

/// Returns the calendar date with the given ordinal day number in `year`.
///
/// Ordinal 1 is January 1. Ordinal 0 steps back to December 31 of the
/// previous year, and fractional or negative ordinals offset accordingly.
///
/// # Examples
///
/// ```ignore
/// let date = date_from_ordinal(2017, 365.0);
/// assert_eq!((date.year(), date.month(), date.day()), (2017, 12, 31.0));
/// ```
pub fn date_from_ordinal(year: i32, ordinal: f64) -> CalendarDate {
    let jan_zero = JulianDate::from_calendar(CalendarDate::new(year, 1, 0.0));
    (jan_zero + ordinal).to_calendar()
}

/// Returns the calendar date `count` days away from `date`.
///
/// `count` may be negative or fractional. Offsets spanning the 1582 reform
/// skip the dropped days, so October 4 plus one day is October 15.
///
/// # Examples
///
/// ```ignore
/// let date = offset_by_days(CalendarDate::new(1954, 6, 30.0), 10_000.0);
/// assert_eq!((date.year(), date.month(), date.day()), (1981, 11, 15.0));
/// ```
pub fn offset_by_days(date: CalendarDate, count: f64) -> CalendarDate {
    (date.julian_date() + count).to_calendar()
}
