//! Calendar and Julian Date conversions in both directions.

use approx::assert_relative_eq;
use hemera::{CalendarDate, JulianDate, GREGORIAN_REFORM, MJD_OFFSET};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reference values from Meeus, *Astronomical Algorithms*, p. 62.
const REFERENCE: &[(i32, u8, f64, f64)] = &[
    (2000, 1, 1.5, 2_451_545.0),
    (1999, 1, 1.0, 2_451_179.5),
    (1987, 1, 27.0, 2_446_822.5),
    (1987, 6, 19.5, 2_446_966.0),
    (1988, 1, 27.0, 2_447_187.5),
    (1988, 6, 19.5, 2_447_332.0),
    (1900, 1, 1.0, 2_415_020.5),
    (1600, 1, 1.0, 2_305_447.5),
    (1600, 12, 31.0, 2_305_812.5),
    (837, 4, 10.3, 2_026_871.8),
    (-123, 12, 31.0, 1_676_496.5),
    (-122, 1, 1.0, 1_676_497.5),
    (-1000, 7, 12.5, 1_356_001.0),
    (-1000, 2, 29.0, 1_355_866.5),
    (-1001, 8, 17.9, 1_355_671.4),
    (-4712, 1, 1.5, 0.0),
];

#[test]
fn julian_date_matches_reference_table() {
    for &(year, month, day, expected) in REFERENCE {
        let jd = CalendarDate::new(year, month, day).julian_date();
        assert_relative_eq!(jd.value(), expected, epsilon = 1e-9);
    }
}

#[test]
fn calendar_date_inverts_reference_table() {
    for &(year, month, day, jd) in REFERENCE {
        let date = JulianDate::new(jd).to_calendar();
        assert_eq!(
            (date.year(), date.month()),
            (year, month),
            "year/month mismatch for jd {jd}"
        );
        assert_relative_eq!(date.day(), day, epsilon = 1e-9);
    }
}

#[test]
fn round_trip_random_dates() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..2000 {
        let year: i32 = rng.random_range(-4000..=3000);
        let month: u8 = rng.random_range(1..=12);
        let whole: u8 = rng.random_range(1..=28);
        // Day fractions are kept to 4 decimal places, the precision
        // to_calendar reports.
        let frac = f64::from(rng.random_range(0..10_000u32)) / 1e4;
        let day = f64::from(whole) + frac;

        // The ten dropped civil dates of October 1582 cannot round-trip.
        if year == 1582 && month == 10 && (5..15).contains(&whole) {
            continue;
        }

        let date = CalendarDate::new(year, month, day);
        let back = date.julian_date().to_calendar();
        assert_eq!(
            (back.year(), back.month()),
            (year, month),
            "year/month mismatch for {year}-{month}-{day}"
        );
        assert_relative_eq!(back.day(), day, epsilon = 1e-9);
    }
}

#[test]
fn reform_gap_is_one_day() {
    let before = CalendarDate::new(1582, 10, 4.0).julian_date();
    let after = CalendarDate::new(1582, 10, 15.0).julian_date();
    assert_relative_eq!(after - before, 1.0, epsilon = 1e-9);
}

#[test]
fn dropped_days_never_produced() {
    let expected: &[(i32, u8, f64)] = &[
        (1582, 9, 30.0),
        (1582, 10, 1.0),
        (1582, 10, 2.0),
        (1582, 10, 3.0),
        (1582, 10, 4.0),
        (1582, 10, 15.0),
        (1582, 10, 16.0),
        (1582, 10, 17.0),
        (1582, 10, 18.0),
        (1582, 10, 19.0),
        (1582, 10, 20.0),
    ];
    for (k, &(year, month, day)) in expected.iter().enumerate() {
        let jd = JulianDate::new(2_299_155.5 + k as f64);
        let date = jd.to_calendar();
        assert_eq!((date.year(), date.month()), (year, month));
        assert_relative_eq!(date.day(), day, epsilon = 1e-9);
        assert!(
            !(date.month() == 10 && (5.0..15.0).contains(&date.day())),
            "jd {} produced a dropped civil date",
            jd.value()
        );
    }
}

#[test]
fn month_thirteen_wraps_to_january() {
    let wrapped = CalendarDate::new(2016, 13, 1.0).julian_date();
    let january = CalendarDate::new(2017, 1, 1.0).julian_date();
    assert_relative_eq!(wrapped.value(), january.value(), epsilon = 1e-9);
    assert_relative_eq!(wrapped.value(), 2_457_754.5, epsilon = 1e-9);
}

#[test]
fn day_zero_is_last_of_previous_month() {
    let jd = CalendarDate::new(2017, 1, 0.0).julian_date();
    assert_relative_eq!(jd.value(), 2_457_753.5, epsilon = 1e-9);
    let date = jd.to_calendar();
    assert_eq!((date.year(), date.month()), (2016, 12));
    assert_relative_eq!(date.day(), 31.0, epsilon = 1e-9);
}

#[test]
fn day_overflow_carries_into_next_month() {
    let overflow = CalendarDate::new(2017, 1, 45.0).julian_date();
    let february = CalendarDate::new(2017, 2, 14.0).julian_date();
    assert_relative_eq!(overflow.value(), february.value(), epsilon = 1e-9);
}

#[test]
fn julian_date_is_monotonic() {
    let mut previous = f64::NEG_INFINITY;
    for year in 1999..=2001 {
        for month in 1..=12u8 {
            for day in 1..=28u8 {
                let jd = CalendarDate::new(year, month, f64::from(day)).julian_date();
                assert!(
                    jd.value() > previous,
                    "jd not increasing at {year}-{month}-{day}"
                );
                previous = jd.value();
            }
        }
    }
}

#[test]
fn julian_date_increases_with_year() {
    let mut previous = f64::NEG_INFINITY;
    for year in -4712..=2400 {
        let jd = CalendarDate::new(year, 6, 15.0).julian_date();
        assert!(jd.value() > previous, "jd not increasing at year {year}");
        previous = jd.value();
    }
}

#[test]
fn modified_julian_date_round_trip() {
    let jd = JulianDate::new(2_451_545.0);
    assert_relative_eq!(jd.modified(), 51_544.5, epsilon = 1e-9);
    let back = JulianDate::from_modified(jd.modified());
    assert_relative_eq!(back.value(), jd.value(), epsilon = 1e-9);
    assert_relative_eq!(JulianDate::new(MJD_OFFSET).modified(), 0.0, epsilon = 1e-9);
}

#[test]
fn gregorian_reform_boundary() {
    assert_eq!(GREGORIAN_REFORM, CalendarDate::new(1582, 10, 15.0));
    assert!(CalendarDate::new(1582, 10, 14.9) < GREGORIAN_REFORM);
    assert_relative_eq!(
        GREGORIAN_REFORM.julian_date().value(),
        2_299_160.5,
        epsilon = 1e-9
    );
}
