//! Calendar conversion and arithmetic.
//!
//! Stateless functions over [`GregorianDate`] and [`JalaliDate`]. Both
//! calendars are mapped onto a shared day number (days since 1970-01-01), so
//! every conversion is a pair of exact integer computations with no lookup
//! tables and no global configuration.

use std::cmp::Ordering;

use crate::consts::{DAYS_IN_WEEK, EPOCH_WEEKDAY_SLOT, MAX_JALALI_YEAR, MIN_JALALI_YEAR};
use crate::jalali::month_start_day_number;
use crate::{GregorianDate, JalaliDate, Month, ParseError, Weekday};

pub use crate::jalali::{days_in_month, is_leap_year};

/// Gregorian to Jalali. Total over every valid [`GregorianDate`].
pub fn to_jalali(date: GregorianDate) -> JalaliDate {
    JalaliDate::from_day_number_in_span(date.to_day_number())
}

/// Jalali to Gregorian. Inverse of [`to_jalali`].
pub fn to_gregorian(date: JalaliDate) -> GregorianDate {
    GregorianDate::from_day_number_in_span(date.to_day_number())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn weekday_of_day_number(days: i32) -> Weekday {
    // rem_euclid keeps the slot in 0..7
    Weekday::from_slot((days + EPOCH_WEEKDAY_SLOT).rem_euclid(i32::from(DAYS_IN_WEEK)) as u8)
}

pub fn weekday(date: JalaliDate) -> Weekday {
    weekday_of_day_number(date.to_day_number())
}

/// Number of blank cells before the first of the month in a Saturday-first grid (0..=6).
///
/// # Errors
/// Returns `ParseError::InvalidYear` for years outside the supported span.
pub fn first_weekday_offset(year: i32, month: Month) -> Result<u8, ParseError> {
    if !(MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year) {
        return Err(ParseError::InvalidYear(year));
    }
    Ok(weekday_of_day_number(month_start_day_number(year, month)).slot())
}

/// Friday is the Persian weekend.
pub fn is_weekend(date: JalaliDate) -> bool {
    weekday(date).is_weekend()
}

pub fn compare(a: JalaliDate, b: JalaliDate) -> Ordering {
    a.cmp(&b)
}

/// Whether `date` lies between `lo` and `hi`, including both ends when
/// `inclusive` is set. The bounds are taken as given, never swapped.
pub fn is_between(date: JalaliDate, lo: JalaliDate, hi: JalaliDate, inclusive: bool) -> bool {
    if inclusive {
        lo <= date && date <= hi
    } else {
        lo < date && date < hi
    }
}
