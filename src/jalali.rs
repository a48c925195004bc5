use crate::consts::{
    ESFAND_DAYS_COMMON, JALALI_CYCLE_DAYS, JALALI_CYCLE_YEARS, JALALI_EPOCH_OFFSET,
    JALALI_FIRST_HALF_DAYS, JALALI_FIRST_HALF_MONTHS, JALALI_FIRST_HALF_ORDINALS,
    JALALI_LEAP_RESIDUES, JALALI_LEAPS_PER_CYCLE, JALALI_SECOND_HALF_DAYS, JALALI_SEPARATOR, MAX_DAY_NUMBER,
    MAX_JALALI_YEAR, MAX_MONTH, MIN_DAY, MIN_DAY_NUMBER, MIN_JALALI_YEAR,
};
use crate::prelude::*;
use crate::{Month, ParseError};
use std::str::FromStr;

/// A day in the Jalali (Persian solar) calendar.
///
/// Always a real calendar day (Esfand 30 only in leap years) and always
/// inside the span covered by [`GregorianDate`](crate::GregorianDate), so
/// converting in either direction cannot fail. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", year, "month.get()", day)]
pub struct JalaliDate {
    year: i32,
    month: Month,
    day: u8,
}

impl JalaliDate {
    /// Creates a validated Jalali date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `ParseError::InvalidMonth` or
    /// `ParseError::InvalidDay` for components that do not exist, and
    /// `ParseError::OutOfRange` for days before 0001-01-01 or after
    /// 9999-12-31 in the Gregorian calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        if !(MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year) {
            return Err(ParseError::InvalidYear(year));
        }
        let month_typed = Month::new(month)?;
        if day < MIN_DAY || day > days_in_month(year, month_typed) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        let date = Self {
            year,
            month: month_typed,
            day,
        };
        if !(MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&date.to_day_number()) {
            return Err(ParseError::OutOfRange { year, month, day });
        }
        Ok(date)
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// The month as the shared validated type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Zero-based day of the year (0 = 1 Farvardin).
    pub fn ordinal(self) -> i32 {
        days_before_month(self.month) + i32::from(self.day) - 1
    }

    /// Days since 1970-01-01 (negative before).
    pub fn to_day_number(self) -> i32 {
        days_before_year(self.year) + self.ordinal() - JALALI_EPOCH_OFFSET
    }

    /// Builds the date for a day number already known to be inside the span.
    pub(crate) fn from_day_number_in_span(days: i32) -> Self {
        debug_assert!((MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&days));
        let (year, month, day) = ymd_from_day_number(days);
        Self {
            year,
            month: Month::from_valid(month),
            day,
        }
    }

    /// Inverse of [`Self::to_day_number`].
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` when the day falls outside the
    /// supported span.
    pub fn from_day_number(days: i32) -> Result<Self, ParseError> {
        let (year, month, day) = ymd_from_day_number(days);
        if !(MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&days) {
            return Err(ParseError::OutOfRange { year, month, day });
        }
        Self::new(year, month, day)
    }
}

// --- 33-year arithmetic cycle ---

/// Leap years among the first `position` years of a cycle (`position` in 0..33).
fn leaps_in_cycle_prefix(position: i32) -> i32 {
    let count = JALALI_LEAP_RESIDUES
        .iter()
        .filter(|&&residue| residue <= position)
        .count();
    // at most 8
    i32::try_from(count).unwrap_or(0)
}

/// Days in the year before the first of `month`.
fn days_before_month(month: Month) -> i32 {
    let month = i32::from(month.get());
    if month <= i32::from(JALALI_FIRST_HALF_MONTHS) {
        (month - 1) * i32::from(JALALI_FIRST_HALF_DAYS)
    } else {
        JALALI_FIRST_HALF_ORDINALS
            + (month - 1 - i32::from(JALALI_FIRST_HALF_MONTHS)) * i32::from(JALALI_SECOND_HALF_DAYS)
    }
}

/// Day number of the first of a month, without span validation.
///
/// Used for grid layout where the cursor may sit on a partially supported month.
pub(crate) fn month_start_day_number(year: i32, month: Month) -> i32 {
    days_before_year(year) + days_before_month(month) - JALALI_EPOCH_OFFSET
}

/// Days from 1 Farvardin 1 to 1 Farvardin of `year`.
fn days_before_year(year: i32) -> i32 {
    let elapsed = year - 1;
    let cycles = elapsed.div_euclid(JALALI_CYCLE_YEARS);
    let position = elapsed.rem_euclid(JALALI_CYCLE_YEARS);
    365 * elapsed + JALALI_LEAPS_PER_CYCLE * cycles + leaps_in_cycle_prefix(position)
}

fn year_length(year: i32) -> i32 {
    if is_leap_year(year) { 366 } else { 365 }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ymd_from_day_number(days: i32) -> (i32, u8, u8) {
    let since_start = days + JALALI_EPOCH_OFFSET;
    let cycles = since_start.div_euclid(JALALI_CYCLE_DAYS);
    let mut remaining = since_start.rem_euclid(JALALI_CYCLE_DAYS);
    let mut year = 1 + JALALI_CYCLE_YEARS * cycles;
    // at most 33 steps: a cycle starts on year 1 of its residues
    while remaining >= year_length(year) {
        remaining -= year_length(year);
        year += 1;
    }

    let first_half_days = i32::from(JALALI_FIRST_HALF_DAYS);
    let second_half_days = i32::from(JALALI_SECOND_HALF_DAYS);
    let (month, day) = if remaining < JALALI_FIRST_HALF_ORDINALS {
        (remaining / first_half_days + 1, remaining % first_half_days + 1)
    } else {
        let rest = remaining - JALALI_FIRST_HALF_ORDINALS;
        (
            rest / second_half_days + 1 + i32::from(JALALI_FIRST_HALF_MONTHS),
            rest % second_half_days + 1,
        )
    };
    (year, month as u8, day as u8)
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    /// Parses `YYYY/MM/DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(JALALI_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{JALALI_SEPARATOR}MM{JALALI_SEPARATOR}DD, found {} {} separators",
                parts.len() - 1,
                JALALI_SEPARATOR
            )));
        };

        let year = year
            .parse::<i32>()
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

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

/// Jalali leap year by the 33-year arithmetic cycle.
pub fn is_leap_year(year: i32) -> bool {
    JALALI_LEAP_RESIDUES.contains(&year.rem_euclid(JALALI_CYCLE_YEARS))
}

pub fn days_in_month(year: i32, month: Month) -> u8 {
    match month.get() {
        m if m <= JALALI_FIRST_HALF_MONTHS => JALALI_FIRST_HALF_DAYS,
        m if m < MAX_MONTH => JALALI_SECOND_HALF_DAYS,
        _ if is_leap_year(year) => JALALI_SECOND_HALF_DAYS,
        _ => ESFAND_DAYS_COMMON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::jalali;

    #[test]
    fn test_new_valid_and_accessors() {
        let date = JalaliDate::new(1403, 1, 15).expect("valid date");
        assert_eq!((date.year(), date.month(), date.day()), (1403, 1, 15));
        assert_eq!(date.month_typed(), Month::FIRST);
    }

    #[test]
    fn test_new_invalid_components() {
        assert!(matches!(
            JalaliDate::new(1403, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            JalaliDate::new(1403, 0, 1),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            JalaliDate::new(1403, 1, 32),
            Err(ParseError::InvalidDay {
                year: 1403,
                month: 1,
                day: 32
            })
        ));
        assert!(matches!(
            JalaliDate::new(1403, 7, 31),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            JalaliDate::new(1403, 1, 0),
            Err(ParseError::InvalidDay { .. })
        ));
        // 1402 is not leap: Esfand has 29 days
        assert!(matches!(
            JalaliDate::new(1402, 12, 30),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(JalaliDate::new(1403, 12, 30).is_ok());
    }

    #[test]
    fn test_new_out_of_span() {
        assert!(matches!(
            JalaliDate::new(9379, 1, 1),
            Err(ParseError::InvalidYear(9379))
        ));
        assert!(matches!(
            JalaliDate::new(-622, 1, 1),
            Err(ParseError::InvalidYear(-622))
        ));
        assert!(matches!(
            JalaliDate::new(9378, 10, 11),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            JalaliDate::new(-621, 10, 10),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(JalaliDate::new(9378, 10, 10).is_ok());
        assert!(JalaliDate::new(-621, 10, 11).is_ok());
    }

    #[test]
    fn test_leap_years_match_published_list() {
        const LEAPS: [i32; 71] = [
            1210, 1214, 1218, 1222, 1226, 1230, 1234, 1238, 1243, 1247, 1251, 1255, 1259, 1263,
            1267, 1271, 1276, 1280, 1284, 1288, 1292, 1296, 1300, 1304, 1309, 1313, 1317, 1321,
            1325, 1329, 1333, 1337, 1342, 1346, 1350, 1354, 1358, 1362, 1366, 1370, 1375, 1379,
            1383, 1387, 1391, 1395, 1399, 1403, 1408, 1412, 1416, 1420, 1424, 1428, 1432, 1436,
            1441, 1445, 1449, 1453, 1457, 1461, 1465, 1469, 1474, 1478, 1482, 1486, 1490, 1494,
            1498,
        ];
        for year in 1210..=1500 {
            assert_eq!(
                is_leap_year(year),
                LEAPS.binary_search(&year).is_ok(),
                "year {year} is miscalculated"
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        struct TestCase {
            year:     i32,
            month:    u8,
            expected: u8,
        }

        let cases = [
            TestCase {
                year:     1403,
                month:    1,
                expected: 31,
            },
            TestCase {
                year:     1403,
                month:    6,
                expected: 31,
            },
            TestCase {
                year:     1403,
                month:    7,
                expected: 30,
            },
            TestCase {
                year:     1403,
                month:    11,
                expected: 30,
            },
            TestCase {
                year:     1403,
                month:    12,
                expected: 30,
            },
            TestCase {
                year:     1402,
                month:    12,
                expected: 29,
            },
        ];

        for case in &cases {
            let month = Month::new(case.month).expect("valid month");
            assert_eq!(
                days_in_month(case.year, month),
                case.expected,
                "{}/{} has the wrong length",
                case.year,
                case.month
            );
        }
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(jalali(1403, 1, 1).ordinal(), 0);
        assert_eq!(jalali(1403, 6, 31).ordinal(), 185);
        assert_eq!(jalali(1403, 7, 1).ordinal(), 186);
        assert_eq!(jalali(1402, 12, 29).ordinal(), 364);
        assert_eq!(jalali(1403, 12, 30).ordinal(), 365);
    }

    #[test]
    fn test_day_number_known_points() {
        // 1348/10/11 is 1970-01-01
        assert_eq!(jalali(1348, 10, 11).to_day_number(), 0);
        // Nowruz 1403 fell on 2024-03-20
        assert_eq!(jalali(1403, 1, 1).to_day_number(), 19_802);
        assert_eq!(JalaliDate::from_day_number(0).expect("in span"), jalali(1348, 10, 11));
        assert_eq!(
            JalaliDate::from_day_number(19_802).expect("in span"),
            jalali(1403, 1, 1)
        );
    }

    #[test]
    fn test_day_number_year_boundaries() {
        let last_of_leap = jalali(1403, 12, 30);
        let next = JalaliDate::from_day_number(last_of_leap.to_day_number() + 1).expect("in span");
        assert_eq!(next, jalali(1404, 1, 1));

        let last_of_common = jalali(1402, 12, 29);
        let next = JalaliDate::from_day_number(last_of_common.to_day_number() + 1).expect("in span");
        assert_eq!(next, jalali(1403, 1, 1));

        let end_of_first_half = jalali(1403, 6, 31);
        let next =
            JalaliDate::from_day_number(end_of_first_half.to_day_number() + 1).expect("in span");
        assert_eq!(next, jalali(1403, 7, 1));
    }

    #[test]
    fn test_from_day_number_out_of_span() {
        assert!(matches!(
            JalaliDate::from_day_number(MIN_DAY_NUMBER - 1),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            JalaliDate::from_day_number(MAX_DAY_NUMBER + 1),
            Err(ParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_and_display() {
        let date = "1403/01/15".parse::<JalaliDate>().expect("valid date");
        assert_eq!(date, jalali(1403, 1, 15));
        assert_eq!(date.to_string(), "1403/01/15");
        assert_eq!(" 1403 / 1 / 5 ".parse::<JalaliDate>().expect("valid date"), jalali(1403, 1, 5));

        assert!(matches!("".parse::<JalaliDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "1403-01-15".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1403/xx/15".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1402/12/30".parse::<JalaliDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let date = jalali(1403, 1, 5);
        let json = serde_json::to_string(&date).expect("serialize");
        assert_eq!(json, r#""1403/01/05""#);
        let parsed: JalaliDate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(jalali(1402, 12, 29) < jalali(1403, 1, 1));
        assert!(jalali(1403, 1, 31) < jalali(1403, 2, 1));
        assert!(jalali(1403, 2, 1) < jalali(1403, 2, 2));
        assert_eq!(jalali(1403, 2, 2), jalali(1403, 2, 2));
    }
}
