//! Calendar helpers for the numeric (non-chrono) API.
//!
//! Dates are proleptic Gregorian, matching chrono's `NaiveDate`, so both APIs agree on the
//! day-of-year for every date.

use crate::{Error, Result};

/// Cumulative days before the first of each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Returns true if `year` is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month.
///
/// # Errors
/// Returns `InvalidDateTime` if `month` is not between 1 and 12.
pub const fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => return Err(Error::invalid_datetime("month must be between 1 and 12")),
    };
    Ok(days)
}

/// Converts a calendar date to its day of the year (1 to 366).
///
/// # Errors
/// Returns `InvalidDateTime` for an invalid month, or a day outside the month.
///
/// # Example
/// ```
/// # use solar_almanac::time::day_of_year;
/// assert_eq!(day_of_year(2014, 6, 12).unwrap(), 163);
/// assert_eq!(day_of_year(2024, 12, 31).unwrap(), 366);
/// assert!(day_of_year(2023, 2, 29).is_err());
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    let month_length = days_in_month(year, month)?;
    if day == 0 || day > month_length {
        return Err(Error::invalid_datetime("day is out of range for month"));
    }

    let leap_day = u32::from(month > 2 && is_leap_year(year));
    Ok(DAYS_BEFORE_MONTH[(month - 1) as usize] + leap_day + day)
}
