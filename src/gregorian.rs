use crate::consts::{DATE_SEPARATOR, MAX_DAY_NUMBER, MAX_YEAR, MIN_DAY_NUMBER, UNIX_EPOCH_DAYS_FROM_CE};
use crate::{Month, ParseError};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A Gregorian calendar date in the range 0001-01-01 ..= 9999-12-31.
///
/// This is the only date representation the picker exposes to its owner:
/// values come in and go out as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate(NaiveDate);

impl GregorianDate {
    /// Creates a validated Gregorian date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` for year 0 or years past `MAX_YEAR`,
    /// `ParseError::InvalidMonth` or `ParseError::InvalidDay` for components
    /// that do not exist in the calendar.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if year == 0 || year > MAX_YEAR {
            return Err(ParseError::InvalidYear(i32::from(year)));
        }
        Month::new(month)?;
        NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(ParseError::InvalidDay {
                year: i32::from(year),
                month,
                day,
            })
    }

    // Components are bounded by construction: year 1..=9999, month 1..=12, day 1..=31.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn year(&self) -> u16 {
        self.0.year() as u16
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    /// Today's date on the local clock.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the clock reports a year outside `1..=MAX_YEAR`.
    pub fn today() -> Result<Self, ParseError> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    /// Days since 1970-01-01 (negative before).
    pub fn to_day_number(self) -> i32 {
        self.0.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
    }

    /// Inverse of [`Self::to_day_number`].
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` when the day falls outside
    /// 0001-01-01 ..= 9999-12-31, or `ParseError::InvalidFormat` when it
    /// lies beyond any representable date.
    pub fn from_day_number(days: i32) -> Result<Self, ParseError> {
        let naive = days
            .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| ParseError::InvalidFormat(format!("Day number {days} is not a calendar date")))?;
        if (MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&days) {
            Ok(Self(naive))
        } else {
            Err(out_of_range(naive))
        }
    }

    /// Builds the date for a day number already known to be inside the span.
    pub(crate) fn from_day_number_in_span(days: i32) -> Self {
        debug_assert!((MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&days));
        Self::from_day_number(days).unwrap_or(Self(NaiveDate::default()))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn out_of_range(naive: NaiveDate) -> ParseError {
    ParseError::OutOfRange {
        year:  naive.year(),
        month: naive.month() as u8,
        day:   naive.day() as u8,
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses the strict `YYYY-MM-DD` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {} separators",
                parts.len() - 1,
                DATE_SEPARATOR
            )));
        };

        let year = year
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*month).to_owned()))?;
        let day = day
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat((*day).to_owned()))?;

        Self::new(year, month, day)
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = ParseError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        if !(1..=i32::from(MAX_YEAR)).contains(&value.year()) {
            return Err(ParseError::InvalidYear(value.year()));
        }
        Ok(Self(value))
    }
}

impl From<GregorianDate> for NaiveDate {
    fn from(value: GregorianDate) -> Self {
        value.0
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
