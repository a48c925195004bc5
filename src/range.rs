use crate::{JalaliDate, RANGE_SEPARATOR, prelude::*};

/// An inclusive range between two Jalali dates.
/// The start date is always less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}{}{end}", RANGE_SEPARATOR)]
pub struct DateRange {
    start: JalaliDate,
    end:   JalaliDate,
}

impl DateRange {
    /// Range spanning two dates given in either order.
    pub fn ordered(a: JalaliDate, b: JalaliDate) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// Single-day range.
    pub const fn day(date: JalaliDate) -> Self {
        Self {
            start: date,
            end:   date,
        }
    }

    pub const fn start(&self) -> JalaliDate {
        self.start
    }

    pub const fn end(&self) -> JalaliDate {
        self.end
    }

    /// Whether `date` falls inside the range, endpoints included.
    pub fn contains(&self, date: JalaliDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, endpoints included.
    pub fn len_days(&self) -> u32 {
        self.end.to_day_number().abs_diff(self.start.to_day_number()) + 1
    }
}
