//! Persian (Jalali) date-picker core.
//!
//! Two layers, both pure and synchronous:
//!
//! - [`calendar`]: exact Gregorian ↔ Jalali conversion over a shared day
//!   number, the 33-year leap rule and the weekday arithmetic a month grid
//!   needs.
//! - [`SelectionEngine`]: single and two-click range selection with hover
//!   preview and commit-on-close, plus the month cursor and day/month/year
//!   drill-down. Every operation takes the current state and returns the next
//!   one; [`SelectionEngine::derive_view`] turns a state into render data.
//!
//! The public value contract is Gregorian ([`PickerValue`]), the interaction
//! happens in Jalali.
//!
//! ```
//! use jalali_picker::{JalaliDate, PickerConfig, PickerValue, SelectionEngine};
//!
//! let today = JalaliDate::new(1403, 1, 1)?;
//! let engine = SelectionEngine::new(PickerConfig::single(), today);
//! let transition = engine.select_day(JalaliDate::new(1403, 1, 15)?);
//! assert_eq!(
//!     transition.emitted,
//!     Some(PickerValue::Single(Some("2024-04-03".parse()?)))
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod calendar;
mod config;
mod consts;
mod engine;
mod gregorian;
mod jalali;
mod prelude;
mod range;
mod selection;
mod types;
mod value;
mod view;

#[cfg(test)]
mod test_utils;

pub use config::PickerConfig;
pub use consts::*;
pub use engine::{BoundaryRole, MonthStep, SelectionEngine, Transition, ViewCursor, ViewGranularity};
pub use gregorian::GregorianDate;
pub use jalali::JalaliDate;
pub use range::DateRange;
pub use selection::{CommittedRange, RangeSelection, Selection};
pub use types::{Month, Weekday};
pub use value::{PickerValue, SelectionMode, ValueError};
pub use view::{DayCell, Header, MonthGrid, MonthItem, PickerView, ViewBody, YearItem};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0}")]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Date {year}-{month:02}-{day:02} is outside the supported span")]
    OutOfRange { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
