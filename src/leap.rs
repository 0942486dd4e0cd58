//! Gregorian leap-year rule.

/// Returns `true` if `year` is a leap year under the Gregorian rule.
///
/// Years divisible by 400 are leap years, other century years are not,
/// and any other year divisible by 4 is. The rule is applied uniformly
/// to all years, including years before the 1582 reform and negative
/// years (year 0 and year -4 are leap years).
pub fn is_leap_year(year: i32) -> bool {
    if year % 400 == 0 {
        return true;
    }
    if year % 100 == 0 {
        return false;
    }
    year % 4 == 0
}
