//! Julian Date newtype and the conversions to and from calendar dates.

use std::ops::{Add, Sub};

use crate::date::CalendarDate;

/// Days between the Julian Date and Modified Julian Date epochs.
///
/// `MJD = JD - MJD_OFFSET`. The MJD epoch is 1858 November 17 at 0h UT.
pub const MJD_OFFSET: f64 = 2_400_000.5;

/// First day of the Gregorian calendar, 1582 October 15.
///
/// Dates on or after this one take the Gregorian century correction;
/// earlier dates follow the Julian calendar. The ten civil dates
/// 1582 October 5 through 14 never existed.
pub const GREGORIAN_REFORM: CalendarDate = CalendarDate::new(1582, 10, 15.0);

/// Smallest integer part of `jd + 0.5` that falls in the Gregorian calendar.
const REFORM_Z: f64 = 2_299_161.0;

/// Continuous count of days and fractions since noon Universal Time on
/// -4712 January 1 (proleptic Julian calendar).
///
/// Conversions follow Meeus, *Astronomical Algorithms*, chapter 7, and are
/// valid for any date on or after the epoch. Subtracting two `JulianDate`s
/// yields the elapsed days as `f64`; adding or subtracting an `f64` shifts
/// a `JulianDate` by that many days.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate(f64);

impl JulianDate {
    /// Creates a `JulianDate` from a raw day count.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw day count.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Converts a calendar date to its Julian Date.
    ///
    /// The Gregorian branch is taken for dates on or after
    /// [`GREGORIAN_REFORM`], compared lexicographically on
    /// (year, month, day), so 1582 October 14.9 still converts under
    /// Julian calendar rules.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Sputnik 1 launch epoch:
    /// let date = CalendarDate::new(1957, 10, 4.81);
    /// assert_eq!(JulianDate::from_calendar(date).value(), 2_436_116.31);
    /// ```
    pub fn from_calendar(date: CalendarDate) -> Self {
        let gregorian = date >= GREGORIAN_REFORM;

        // 1. January and February count as months 13 and 14 of the
        //    previous year.
        let mut y = date.year();
        let mut m = i32::from(date.month());
        if m < 3 {
            y -= 1;
            m += 12;
        }

        // 2. Century correction, Gregorian dates only. Integer division
        //    truncates toward zero, as required for negative years.
        let b = if gregorian {
            let a = y / 100;
            f64::from(2 - a + a / 4)
        } else {
            0.0
        };

        // 3. Day count for whole years. Truncation is toward zero
        //    throughout; the -0.75 term compensates it for negative years.
        let y = f64::from(y);
        let c = if y < 0.0 {
            (365.25 * y - 0.75).trunc()
        } else {
            (365.25 * y).trunc()
        };

        // 4. Day count for whole months, plus the day itself.
        let e = (30.6001 * f64::from(m + 1)).trunc();
        Self(c + e + date.day() + 1_720_994.5 + b)
    }

    /// Converts this Julian Date back to a calendar date.
    ///
    /// The inverse of [`from_calendar`](Self::from_calendar); the returned
    /// day is rounded to 4 decimal places. Julian Dates at or past
    /// 1582 October 15.0 produce Gregorian dates, so the dropped civil
    /// dates 1582 October 5 through 14 are never returned.
    pub fn to_calendar(self) -> CalendarDate {
        let jdm = self.0 + 0.5;
        let z = jdm.trunc();
        let f = jdm - z;

        let a = if z >= REFORM_Z {
            let alpha = ((z - 1_867_216.25) / 36_524.25).trunc();
            z + 1.0 + alpha - (alpha / 4.0).trunc()
        } else {
            z
        };

        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).trunc();
        let d = (365.25 * c).trunc();
        let e = ((b - d) / 30.6001).trunc();

        let day = round4(b - d - (30.6001 * e).trunc() + f);

        let mut month = e - 1.0;
        if month >= 13.0 {
            month -= 12.0;
        }

        let year = if month >= 3.0 { c - 4716.0 } else { c - 4715.0 };

        CalendarDate::new(year as i32, month as u8, day)
    }

    /// Returns the Modified Julian Date, `jd - 2_400_000.5`.
    pub fn modified(self) -> f64 {
        self.0 - MJD_OFFSET
    }

    /// Creates a `JulianDate` from a Modified Julian Date.
    pub fn from_modified(mjd: f64) -> Self {
        Self(mjd + MJD_OFFSET)
    }
}

impl Add<f64> for JulianDate {
    type Output = JulianDate;

    fn add(self, days: f64) -> JulianDate {
        JulianDate(self.0 + days)
    }
}

impl Sub<f64> for JulianDate {
    type Output = JulianDate;

    fn sub(self, days: f64) -> JulianDate {
        JulianDate(self.0 - days)
    }
}

impl Sub for JulianDate {
    type Output = f64;

    fn sub(self, other: JulianDate) -> f64 {
        self.0 - other.0
    }
}

/// Rounds to 4 decimal places, half away from zero.
fn round4(x: f64) -> f64 {
    (x * 1e4).round() / 1e4
}
