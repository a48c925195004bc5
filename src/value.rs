//! The Gregorian value contract shared with the caller.

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::{GregorianDate, JalaliDate, calendar};

/// Whether the picker selects one date or a range. Fixed per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    #[display(fmt = "single")]
    Single,
    #[display(fmt = "range")]
    Range,
}

/// Committed value as seen from outside the picker.
///
/// Serializes to `null` / `"YYYY-MM-DD"` for a single date and to a
/// two-element array for a range, either element possibly `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PickerValue {
    Single(Option<GregorianDate>),
    Range(Option<GregorianDate>, Option<GregorianDate>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("Value shape does not match picker mode: expected {expected}, found {found}")]
    ModeMismatch {
        expected: SelectionMode,
        found:    SelectionMode,
    },
}

impl PickerValue {
    /// Value with nothing selected for the given mode.
    pub const fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Range => Self::Range(None, None),
        }
    }

    pub fn single(date: JalaliDate) -> Self {
        Self::Single(Some(calendar::to_gregorian(date)))
    }

    pub fn range(start: JalaliDate, end: JalaliDate) -> Self {
        Self::Range(Some(calendar::to_gregorian(start)), Some(calendar::to_gregorian(end)))
    }

    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Range(..) => SelectionMode::Range,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Single(None) | Self::Range(None, None))
    }

    /// Reshapes the value for `mode`.
    ///
    /// A bare `null` deserializes as `Single(None)`, so an empty single value
    /// is also accepted as an empty range.
    ///
    /// # Errors
    /// Returns `ValueError::ModeMismatch` for any other shape mismatch.
    pub fn for_mode(self, mode: SelectionMode) -> Result<Self, ValueError> {
        match (mode, self) {
            (SelectionMode::Range, Self::Single(None)) => Ok(Self::Range(None, None)),
            (expected, value) if value.mode() == expected => Ok(value),
            (expected, value) => Err(ValueError::ModeMismatch {
                expected,
                found: value.mode(),
            }),
        }
    }
}
