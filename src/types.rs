use crate::consts::{DAYS_IN_WEEK, DECEMBER, JANUARY, MAX_MONTH, PERSIAN_MONTHS, PERSIAN_WEEKDAYS};
use crate::prelude::*;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12).
///
/// Both calendars number their months 1..=12, so the same type carries a
/// Gregorian month inside [`GregorianDate`](crate::GregorianDate) and a Jalali
/// month (1 = Farvardin) inside [`JalaliDate`](crate::JalaliDate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// First month of the year (January / Farvardin)
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Following month, wrapping Esfand to Farvardin. The flag is set on wrap.
    pub fn succ(self) -> (Self, bool) {
        match self.get() {
            DECEMBER => (Self::FIRST, true),
            m => (Self::from_valid(m + 1), false),
        }
    }

    /// Preceding month, wrapping Farvardin to Esfand. The flag is set on wrap.
    pub fn pred(self) -> (Self, bool) {
        match self.get() {
            JANUARY => (Self::from_valid(DECEMBER), true),
            m => (Self::from_valid(m - 1), false),
        }
    }

    /// Persian name of this month in the Jalali calendar
    pub const fn persian_name(self) -> &'static str {
        PERSIAN_MONTHS[(self.get() - 1) as usize]
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Self> {
        (JANUARY..=MAX_MONTH).map(Self::from_valid)
    }

    // Callers guarantee 1..=12.
    pub(crate) fn from_valid(value: u8) -> Self {
        debug_assert!((JANUARY..=MAX_MONTH).contains(&value));
        NonZeroU8::new(value).map_or(Self::FIRST, Self)
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week in Persian order: the week starts on Saturday and the
/// weekend is Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[display(fmt = "Saturday")]
    Saturday,
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
}

impl Weekday {
    /// Saturday first, in grid column order.
    pub const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Weekday for a Saturday-based slot; the slot is reduced modulo 7.
    pub const fn from_slot(slot: u8) -> Self {
        Self::ALL[(slot % DAYS_IN_WEEK) as usize]
    }

    /// Offset from Saturday: Saturday = 0 ... Friday = 6
    pub const fn slot(self) -> u8 {
        self as u8
    }

    /// One-letter Persian label used in the weekday header row
    pub const fn persian_label(self) -> &'static str {
        PERSIAN_WEEKDAYS[self as usize]
    }

    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Friday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(ParseError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_try_from_and_into_u8() {
        let month: Month = 8.try_into().expect("8 is a valid month");
        assert_eq!(month.get(), 8);
        let value: u8 = month.into();
        assert_eq!(value, 8);

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_succ_pred_wrap() {
        let esfand = Month::new(12).expect("valid month");
        let farvardin = Month::new(1).expect("valid month");
        let mehr = Month::new(7).expect("valid month");

        assert_eq!(esfand.succ(), (farvardin, true));
        assert_eq!(farvardin.pred(), (esfand, true));
        assert_eq!(mehr.succ(), (Month::new(8).expect("valid month"), false));
        assert_eq!(mehr.pred(), (Month::new(6).expect("valid month"), false));
    }

    #[test]
    fn test_month_persian_names() {
        assert_eq!(Month::FIRST.persian_name(), "فروردین");
        assert_eq!(Month::new(12).expect("valid month").persian_name(), "اسفند");
        assert_eq!(Month::all().count(), 12);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "contains")]
    fn test_from_valid_rejects_month_thirteen() {
        let _ = Month::from_valid(13);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).expect("valid month");
        let json = serde_json::to_string(&month).expect("serialize month");
        assert_eq!(json, "8");
        let parsed: Month = serde_json::from_str(&json).expect("deserialize month");
        assert_eq!(month, parsed);
        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_weekday_slots() {
        for slot in 0..7 {
            assert_eq!(Weekday::from_slot(slot).slot(), slot);
        }
        assert_eq!(Weekday::from_slot(0), Weekday::Saturday);
        assert_eq!(Weekday::from_slot(6), Weekday::Friday);
        assert_eq!(Weekday::from_slot(7), Weekday::Saturday);
    }

    #[test]
    fn test_weekday_weekend_and_labels() {
        assert!(Weekday::Friday.is_weekend());
        assert!(!Weekday::Saturday.is_weekend());
        assert!(!Weekday::Thursday.is_weekend());
        assert_eq!(Weekday::Saturday.persian_label(), "ش");
        assert_eq!(Weekday::Friday.persian_label(), "ج");
        assert_eq!(Weekday::Friday.to_string(), "Friday");
    }
}
