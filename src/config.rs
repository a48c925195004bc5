use serde::{Deserialize, Serialize};

use crate::{GregorianDate, JalaliDate, SelectionMode, calendar};

/// Picker settings the engine consumes. Presentation settings (size, label,
/// style overrides) belong to the caller and are not modelled here.
///
/// Deserializes from e.g. `{"mode": "range", "max_date": "2025-03-20"}`;
/// missing fields fall back to a single-date picker without an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub mode:     SelectionMode,
    /// Last selectable day. Later days are disabled.
    pub max_date: Option<GregorianDate>,
}

impl PickerConfig {
    pub const fn single() -> Self {
        Self {
            mode:     SelectionMode::Single,
            max_date: None,
        }
    }

    pub const fn range() -> Self {
        Self {
            mode:     SelectionMode::Range,
            max_date: None,
        }
    }

    #[must_use]
    pub const fn with_max_date(mut self, max_date: GregorianDate) -> Self {
        self.max_date = Some(max_date);
        self
    }

    /// The upper bound in the calendar the engine compares in.
    pub fn max_jalali(&self) -> Option<JalaliDate> {
        self.max_date.map(calendar::to_jalali)
    }
}
