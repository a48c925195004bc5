//! The picker's selection state machine.
//!
//! [`SelectionEngine`] is a small `Copy` value. Operations never mutate in
//! place; they return the next engine, wrapped in a [`Transition`] when the
//! operation may hand a value back to the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{MAX_JALALI_YEAR, MIN_JALALI_YEAR, YEAR_WINDOW_BEFORE, YEAR_WINDOW_LEN};
use crate::prelude::*;
use crate::selection::{CommittedRange, RangeSelection, Selection};
use crate::{
    DateRange, GregorianDate, JalaliDate, Month, ParseError, PickerConfig, PickerValue, SelectionMode, ValueError,
    calendar,
};

/// The month the day grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}/{:02}", year, "month.get()")]
pub struct ViewCursor {
    pub year:  i32,
    pub month: Month,
}

impl ViewCursor {
    pub const fn of(date: JalaliDate) -> Self {
        Self {
            year:  date.year(),
            month: date.month_typed(),
        }
    }

    /// One month forward or back, rolling the year at Esfand/Farvardin.
    /// Stays put at the edges of the supported years.
    #[must_use]
    pub fn step(self, step: MonthStep) -> Self {
        let (month, wrapped) = match step {
            MonthStep::Next => self.month.succ(),
            MonthStep::Previous => self.month.pred(),
        };
        let year = match (wrapped, step) {
            (false, _) => Some(self.year),
            (true, MonthStep::Next) => self.year.checked_add(1),
            (true, MonthStep::Previous) => self.year.checked_sub(1),
        };
        match year {
            Some(year) if (MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year) => Self { year, month },
            _ => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewGranularity {
    #[default]
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MonthStep {
    #[display(fmt = "next")]
    Next,
    #[display(fmt = "previous")]
    Previous,
}

/// Which end of the active range a day sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryRole {
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "end")]
    End,
}

/// Result of an operation that may produce a value for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Transition {
    pub state:   SelectionEngine,
    /// Set when the caller's value changed and must be stored.
    pub emitted: Option<PickerValue>,
}

impl Transition {
    const fn quiet(state: SelectionEngine) -> Self {
        Self { state, emitted: None }
    }
}

/// Calendar state and selection logic for one picker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionEngine {
    max_date:  Option<JalaliDate>,
    today:     JalaliDate,
    selection: Selection,
    cursor:    ViewCursor,
    view:      ViewGranularity,
}

impl SelectionEngine {
    /// Empty picker showing the month of `today`.
    pub fn new(config: PickerConfig, today: JalaliDate) -> Self {
        let selection = match config.mode {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Range => Selection::Range {
                committed: CommittedRange::EMPTY,
                draft:     RangeSelection::NoSelection,
            },
        };
        Self {
            max_date: config.max_jalali(),
            today,
            selection,
            cursor: ViewCursor::of(today),
            view: ViewGranularity::Day,
        }
    }

    /// Like [`Self::new`], reading today's date from the local clock.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the clock is outside the supported span.
    pub fn from_clock(config: PickerConfig) -> Result<Self, ParseError> {
        let today = calendar::to_jalali(GregorianDate::today()?);
        Ok(Self::new(config, today))
    }

    /// Picker pre-filled with the caller's value; the cursor opens on its month.
    ///
    /// # Errors
    /// Returns `ValueError::ModeMismatch` if `value` has the wrong shape for `config.mode`.
    pub fn with_value(config: PickerConfig, today: JalaliDate, value: PickerValue) -> Result<Self, ValueError> {
        Self::new(config, today).sync(value)
    }

    pub const fn mode(&self) -> SelectionMode {
        match self.selection {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Range { .. } => SelectionMode::Range,
        }
    }

    pub const fn selection(&self) -> Selection {
        self.selection
    }

    pub const fn cursor(&self) -> ViewCursor {
        self.cursor
    }

    pub const fn view(&self) -> ViewGranularity {
        self.view
    }

    pub const fn today(&self) -> JalaliDate {
        self.today
    }

    pub const fn max_date(&self) -> Option<JalaliDate> {
        self.max_date
    }

    /// Selected day in single mode.
    pub const fn selected(&self) -> Option<JalaliDate> {
        match self.selection {
            Selection::Single(selected) => selected,
            Selection::Range { .. } => None,
        }
    }

    /// The in-progress range interaction in range mode.
    pub const fn draft(&self) -> Option<RangeSelection> {
        match self.selection {
            Selection::Range { draft, .. } => Some(draft),
            Selection::Single(_) => None,
        }
    }

    pub const fn committed(&self) -> Option<CommittedRange> {
        match self.selection {
            Selection::Range { committed, .. } => Some(committed),
            Selection::Single(_) => None,
        }
    }

    /// The committed value in the caller's Gregorian shape.
    pub fn value(&self) -> PickerValue {
        match self.selection {
            Selection::Single(selected) => PickerValue::Single(selected.map(calendar::to_gregorian)),
            Selection::Range { committed, .. } => PickerValue::Range(
                committed.start.map(calendar::to_gregorian),
                committed.end.map(calendar::to_gregorian),
            ),
        }
    }

    /// Replaces the selection and re-derives the cursor when the date it
    /// follows has changed.
    fn with_selection(self, selection: Selection) -> Self {
        let previous = self.selection.anchor();
        let anchor = selection.anchor();
        let cursor = if anchor == previous {
            self.cursor
        } else {
            match (anchor, selection) {
                (Some(date), _) => ViewCursor::of(date),
                (None, Selection::Range { .. }) => ViewCursor::of(self.today),
                (None, Selection::Single(_)) => self.cursor,
            }
        };
        Self {
            selection,
            cursor,
            ..self
        }
    }

    /// Mirrors the caller's value into the engine.
    ///
    /// An unchanged value leaves any in-progress range alone. A changed value
    /// wins over it: the draft and hover are rebuilt from the new value.
    ///
    /// # Errors
    /// Returns `ValueError::ModeMismatch` if `value` has the wrong shape for this engine.
    pub fn sync(&self, value: PickerValue) -> Result<Self, ValueError> {
        let value = match value.for_mode(self.mode())? {
            PickerValue::Range(Some(a), Some(b)) if b < a => PickerValue::Range(Some(b), Some(a)),
            other => other,
        };
        if value == self.value() {
            return Ok(*self);
        }

        let selection = match value {
            PickerValue::Single(date) => Selection::Single(date.map(calendar::to_jalali)),
            PickerValue::Range(start, end) => {
                let committed = CommittedRange {
                    start: start.map(calendar::to_jalali),
                    end:   end.map(calendar::to_jalali),
                };
                Selection::Range {
                    committed,
                    draft: committed.to_draft(),
                }
            },
        };
        debug!(mode = %self.mode(), value = ?value, "external value synced");
        Ok(self.with_selection(selection))
    }

    /// Handles a click on a day.
    ///
    /// Single mode selects and emits at once. Range mode starts a new range
    /// or completes the pending one; nothing is emitted until [`Self::commit`].
    /// Disabled days are ignored.
    pub fn select_day(&self, date: JalaliDate) -> Transition {
        if self.is_disabled(date) {
            debug!(%date, "ignored click on disabled day");
            return Transition::quiet(*self);
        }

        match self.selection {
            Selection::Single(_) => {
                let state = self.with_selection(Selection::Single(Some(date)));
                let emitted = PickerValue::single(date);
                debug!(%date, value = ?emitted, "day selected");
                Transition {
                    state,
                    emitted: Some(emitted),
                }
            },
            Selection::Range { committed, draft } => {
                let draft = draft.click(date);
                debug!(%date, draft = ?draft, "range endpoint selected");
                Transition::quiet(self.with_selection(Selection::Range { committed, draft }))
            },
        }
    }

    /// Previews a range ending at `date` while the second click is pending.
    #[must_use]
    pub fn hover(&self, date: JalaliDate) -> Self {
        match self.selection {
            Selection::Range {
                committed,
                draft: draft @ RangeSelection::AwaitingEnd { .. },
            } if !self.is_disabled(date) => {
                trace!(%date, "hover preview");
                self.with_selection(Selection::Range {
                    committed,
                    draft: draft.with_hover(date),
                })
            },
            _ => *self,
        }
    }

    #[must_use]
    pub fn clear_hover(&self) -> Self {
        match self.selection {
            Selection::Range { committed, draft } => self.with_selection(Selection::Range {
                committed,
                draft: draft.without_hover(),
            }),
            Selection::Single(_) => *self,
        }
    }

    /// Closes the interaction.
    ///
    /// A complete draft that differs from the committed pair becomes the new
    /// value and is emitted. A partial draft is dropped silently. Either way
    /// the draft is reset from the committed value and the hover is cleared.
    pub fn commit(&self) -> Transition {
        let Selection::Range { committed, draft } = self.selection else {
            return Transition::quiet(*self);
        };

        let (committed, emitted) = match draft.complete() {
            Some(range) if committed.complete() != Some(range) => {
                (CommittedRange::from(range), Some(PickerValue::range(range.start(), range.end())))
            },
            _ => (committed, None),
        };
        debug!(draft = ?draft, value = ?emitted, "range committed");

        Transition {
            state: self.with_selection(Selection::Range {
                committed,
                draft: committed.to_draft(),
            }),
            emitted,
        }
    }

    /// Drops the in-progress range without emitting.
    #[must_use]
    pub fn cancel(&self) -> Self {
        match self.selection {
            Selection::Range { committed, draft } => {
                debug!(draft = ?draft, "range interaction cancelled");
                self.with_selection(Selection::Range {
                    committed,
                    draft: committed.to_draft(),
                })
            },
            Selection::Single(_) => *self,
        }
    }

    #[must_use]
    pub fn move_month(&self, step: MonthStep) -> Self {
        let cursor = self.cursor.step(step);
        debug!(%step, from = %self.cursor, to = %cursor, "month moved");
        Self { cursor, ..*self }
    }

    #[must_use]
    pub fn set_view(&self, view: ViewGranularity) -> Self {
        debug!(%view, "view changed");
        Self { view, ..*self }
    }

    /// Picks a month from the month grid and returns to the day grid.
    #[must_use]
    pub fn select_month(&self, month: Month) -> Self {
        debug!(%month, "month picked");
        Self {
            cursor: ViewCursor {
                month,
                ..self.cursor
            },
            view: ViewGranularity::Day,
            ..*self
        }
    }

    /// Picks a year from the year grid and moves on to the month grid.
    #[must_use]
    pub fn select_year(&self, year: i32) -> Self {
        let year = year.clamp(MIN_JALALI_YEAR, MAX_JALALI_YEAR);
        debug!(year, "year picked");
        Self {
            cursor: ViewCursor {
                year,
                ..self.cursor
            },
            view: ViewGranularity::Month,
            ..*self
        }
    }

    /// Moves "today" forward, e.g. when a long-lived picker crosses midnight.
    #[must_use]
    pub fn with_today(&self, today: JalaliDate) -> Self {
        Self { today, ..*self }
    }

    /// Years listed in the year grid, newest first.
    pub fn year_window(&self) -> impl Iterator<Item = i32> + use<> {
        let first = self.cursor.year - YEAR_WINDOW_BEFORE;
        (first..first + YEAR_WINDOW_LEN).rev()
    }

    pub fn is_disabled(&self, date: JalaliDate) -> bool {
        self.max_date.is_some_and(|max| date > max)
    }

    pub fn is_today(&self, date: JalaliDate) -> bool {
        date == self.today
    }

    /// Single mode only.
    pub fn is_selected(&self, date: JalaliDate) -> bool {
        self.selected() == Some(date)
    }

    /// The complete range currently shown: the draft when it is complete,
    /// otherwise the committed range while no draft is in progress.
    pub fn active_range(&self) -> Option<DateRange> {
        match self.selection {
            Selection::Range {
                draft: RangeSelection::Complete(range),
                ..
            } => Some(range),
            Selection::Range {
                committed,
                draft: RangeSelection::NoSelection,
            } => committed.complete(),
            Selection::Range { .. } | Selection::Single(_) => None,
        }
    }

    pub fn in_range(&self, date: JalaliDate) -> bool {
        self.active_range().is_some_and(|range| range.contains(date))
    }

    pub fn in_hover_range(&self, date: JalaliDate) -> bool {
        self.hover_span().is_some_and(|span| span.contains(date))
    }

    /// Ordered span between the pending start and the hovered day.
    pub fn hover_span(&self) -> Option<DateRange> {
        self.draft().and_then(|draft| draft.hover_span())
    }

    /// Whether `date` is the start or end of the range, checked against the
    /// draft while one exists and against the committed value otherwise.
    /// A one-day range reports `Start`.
    pub fn boundary_role(&self, date: JalaliDate) -> Option<BoundaryRole> {
        let Selection::Range { committed, draft } = self.selection else {
            return None;
        };
        let (start, end) = match draft {
            RangeSelection::NoSelection => (committed.start, committed.end),
            active => (active.start(), active.end()),
        };
        role_of(date, start, end)
    }

    /// Like [`Self::boundary_role`], for the hover preview span.
    pub fn hover_boundary_role(&self, date: JalaliDate) -> Option<BoundaryRole> {
        self.hover_span()
            .and_then(|span| role_of(date, Some(span.start()), Some(span.end())))
    }
}

fn role_of(date: JalaliDate, start: Option<JalaliDate>, end: Option<JalaliDate>) -> Option<BoundaryRole> {
    if start == Some(date) {
        Some(BoundaryRole::Start)
    } else if end == Some(date) {
        Some(BoundaryRole::End)
    } else {
        None
    }
}
