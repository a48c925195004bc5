//! Shorthand constructors for tests.

use crate::{GregorianDate, JalaliDate, Month, PickerConfig, SelectionEngine};

pub(crate) fn jalali(year: i32, month: u8, day: u8) -> JalaliDate {
    JalaliDate::new(year, month, day).expect("test jalali date must be valid")
}

pub(crate) fn gregorian(year: u16, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).expect("test gregorian date must be valid")
}

pub(crate) fn month(value: u8) -> Month {
    Month::new(value).expect("test month must be valid")
}

/// Single-mode engine whose "today" is 1403/01/01.
pub(crate) fn single_engine() -> SelectionEngine {
    SelectionEngine::new(PickerConfig::single(), jalali(1403, 1, 1))
}

/// Range-mode engine whose "today" is 1403/01/01.
pub(crate) fn range_engine() -> SelectionEngine {
    SelectionEngine::new(PickerConfig::range(), jalali(1403, 1, 1))
}
