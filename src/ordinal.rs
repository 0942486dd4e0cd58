//! Day-of-year computation.

use crate::date::CalendarDate;
use crate::leap::is_leap_year;

/// Returns the ordinal number of a date's day within its year.
///
/// January 1 is day 1 and December 31 is day 365, or 366 in a leap year.
/// The day fraction is truncated. Leap years follow the Gregorian rule of
/// [`is_leap_year`] for every year.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(day_of_year(CalendarDate::new(1978, 11, 14.0)), 318);
/// assert_eq!(day_of_year(CalendarDate::new(2016, 2, 29.0)), 60);
/// ```
pub fn day_of_year(date: CalendarDate) -> i32 {
    let month = i32::from(date.month());
    let a = (month + 9) / 12;
    let mut res = 275 * month / 9 - a + date.day().trunc() as i32 - 30;
    if !is_leap_year(date.year()) {
        res -= a;
    }
    res
}
