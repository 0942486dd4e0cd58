//! # hemera
//!
//! Julian Date and civil calendar conversions.
//!
//! A Julian Date is a continuous count of days and fractions since noon
//! Universal Time on -4712 January 1. Conversions implement the algorithms
//! of Meeus, *Astronomical Algorithms*, chapter 7: they switch between
//! Julian and Gregorian calendar rules at the 1582 October 15 reform and
//! accept negative years in astronomical numbering (year 0 is 1 BC).
//! The derived computations (weekday, ordinal day, date arithmetic) build
//! on the conversion and cross the reform and the BC boundary with it.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarDate"] -->|"JulianDate::from_calendar()"| B["JulianDate"]
//!     B -->|".to_calendar()"| A
//!     B -->|".modified()"| C["Modified Julian Date"]
//!     A -->|"day_of_week()"| D["Weekday"]
//!     A -->|"day_of_year()"| E["ordinal day"]
//!     A -->|"date_difference()"| F["days apart"]
//!     A -->|"offset_by_days()"| A
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use hemera::{day_of_week, day_of_year, is_leap_year, CalendarDate, Weekday};
//!
//! // Sputnik 1 launched 1957 October 4 at 19:26 UT
//! let launch = CalendarDate::new(1957, 10, 4.81);
//! let jd = launch.julian_date();
//! assert_eq!(jd.value(), 2_436_116.31);
//!
//! // Back again
//! let date = jd.to_calendar();
//! assert_eq!((date.year(), date.month(), date.day()), (1957, 10, 4.81));
//!
//! // Calendar facts
//! assert_eq!(day_of_week(launch), Weekday::Friday);
//! assert_eq!(day_of_year(launch), 277);
//! assert!(!is_leap_year(1957));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `julian` | Julian Date newtype and both conversion directions |
//! | `date` | Calendar date with year, month, and fractional day |
//! | `leap` | Gregorian leap-year rule |
//! | `week` | Weekday enum and day-of-week computation |
//! | `ordinal` | Day-of-year computation |
//! | `arith` | Date differences and offsets |

mod arith;
mod date;
mod julian;
mod leap;
mod ordinal;
mod week;

pub use arith::{date_difference, date_from_ordinal, offset_by_days};
pub use date::CalendarDate;
pub use julian::{JulianDate, GREGORIAN_REFORM, MJD_OFFSET};
pub use leap::is_leap_year;
pub use ordinal::day_of_year;
pub use week::{day_of_week, Weekday};
