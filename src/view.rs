//! Render data derived from engine state.
//!
//! Nothing here holds state; call [`SelectionEngine::derive_view`] after each
//! transition and draw the result.

use serde::Serialize;

use crate::consts::{DEFAULT_PLACEHOLDER, PICK_END_PROMPT, RANGE_SEPARATOR};
use crate::{
    BoundaryRole, JalaliDate, Month, Selection, SelectionEngine, ViewCursor, ViewGranularity, Weekday, calendar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Header {
    pub month_name: &'static str,
    pub year:       i32,
}

/// One day of the month grid with every flag a renderer styles on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date:           JalaliDate,
    pub weekday:        Weekday,
    pub is_weekend:     bool,
    pub is_disabled:    bool,
    pub is_today:       bool,
    pub is_selected:    bool,
    pub in_range:       bool,
    pub in_hover_range: bool,
    pub boundary:       Option<BoundaryRole>,
    pub hover_boundary: Option<BoundaryRole>,
}

/// Saturday-first month layout: `leading_blanks` empty cells, then the days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub cursor:         ViewCursor,
    pub leading_blanks: u8,
    pub days:           Vec<DayCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthItem {
    pub month:      Month,
    pub name:       &'static str,
    pub is_current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearItem {
    pub year:       i32,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum ViewBody {
    Days(MonthGrid),
    Months(Vec<MonthItem>),
    Years(Vec<YearItem>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerView {
    pub header:         Header,
    pub weekday_labels: [&'static str; 7],
    pub body:           ViewBody,
}

impl SelectionEngine {
    /// Everything needed to draw the picker in its current state.
    pub fn derive_view(&self) -> PickerView {
        let cursor = self.cursor();
        let body = match self.view() {
            ViewGranularity::Day => ViewBody::Days(self.month_grid()),
            ViewGranularity::Month => ViewBody::Months(self.month_items()),
            ViewGranularity::Year => ViewBody::Years(self.year_items()),
        };
        PickerView {
            header: Header {
                month_name: cursor.month.persian_name(),
                year:       cursor.year,
            },
            weekday_labels: Weekday::ALL.map(Weekday::persian_label),
            body,
        }
    }

    /// Day grid for the cursor month.
    pub fn month_grid(&self) -> MonthGrid {
        let cursor = self.cursor();
        // Days past either end of the supported span are left out.
        let days: Vec<DayCell> = (1..=calendar::days_in_month(cursor.year, cursor.month))
            .filter_map(|day| JalaliDate::new(cursor.year, cursor.month.get(), day).ok())
            .map(|date| self.day_cell(date))
            .collect();
        // The first listed day is not the 1st at the start of the span.
        let leading_blanks = days.first().map_or(0, |cell| cell.weekday.slot());
        MonthGrid {
            cursor,
            leading_blanks,
            days,
        }
    }

    pub fn day_cell(&self, date: JalaliDate) -> DayCell {
        let weekday = calendar::weekday(date);
        DayCell {
            date,
            weekday,
            is_weekend: weekday.is_weekend(),
            is_disabled: self.is_disabled(date),
            is_today: self.is_today(date),
            is_selected: self.is_selected(date),
            in_range: self.in_range(date),
            in_hover_range: self.in_hover_range(date),
            boundary: self.boundary_role(date),
            hover_boundary: self.hover_boundary_role(date),
        }
    }

    fn month_items(&self) -> Vec<MonthItem> {
        let current = self.cursor().month;
        Month::all()
            .map(|month| MonthItem {
                month,
                name: month.persian_name(),
                is_current: month == current,
            })
            .collect()
    }

    fn year_items(&self) -> Vec<YearItem> {
        let current = self.cursor().year;
        self.year_window()
            .map(|year| YearItem {
                year,
                is_current: year == current,
            })
            .collect()
    }

    /// Text for the input box. Range mode shows the committed value only,
    /// never the draft.
    pub fn display_text(&self, placeholder: &str) -> String {
        match self.selection() {
            Selection::Single(Some(date)) => date.to_string(),
            Selection::Range { committed, .. } => match (committed.start, committed.end) {
                (Some(start), Some(end)) => format!("{start}{RANGE_SEPARATOR}{end}"),
                (Some(start), None) => format!("{start}{RANGE_SEPARATOR}{PICK_END_PROMPT}"),
                (None, _) => placeholder.to_owned(),
            },
            Selection::Single(None) => placeholder.to_owned(),
        }
    }

    /// [`Self::display_text`] with the stock Persian placeholder.
    pub fn default_display_text(&self) -> String {
        self.display_text(DEFAULT_PLACEHOLDER)
    }
}
