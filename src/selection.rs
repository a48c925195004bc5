//! Selection state held by the engine.

use crate::{DateRange, JalaliDate};

/// The externally committed range, mirrored from the caller's value.
///
/// Either endpoint may be missing when the caller supplies a partial value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CommittedRange {
    pub start: Option<JalaliDate>,
    pub end:   Option<JalaliDate>,
}

impl CommittedRange {
    pub const EMPTY: Self = Self {
        start: None,
        end:   None,
    };

    /// The committed pair as a complete range, when both endpoints are known.
    pub fn complete(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange::ordered(start, end)),
            _ => None,
        }
    }

    /// Fresh draft mirroring this committed value.
    pub fn to_draft(&self) -> RangeSelection {
        match (self.start, self.end) {
            (Some(start), Some(end)) => RangeSelection::Complete(DateRange::ordered(start, end)),
            (Some(start), None) | (None, Some(start)) => RangeSelection::AwaitingEnd { start, hover: None },
            (None, None) => RangeSelection::NoSelection,
        }
    }
}

impl From<DateRange> for CommittedRange {
    fn from(range: DateRange) -> Self {
        Self {
            start: Some(range.start()),
            end:   Some(range.end()),
        }
    }
}

/// In-progress two-click range interaction.
///
/// Hover lives only alongside a pending start, so a complete draft can never
/// carry a stale hover and an end can never exist without a start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeSelection {
    #[default]
    NoSelection,
    AwaitingEnd {
        start: JalaliDate,
        hover: Option<JalaliDate>,
    },
    Complete(DateRange),
}

impl RangeSelection {
    /// Applies a click. A pending start is completed (earlier date first);
    /// anything else starts a new range.
    pub fn click(self, date: JalaliDate) -> Self {
        match self {
            Self::AwaitingEnd { start, .. } => Self::Complete(DateRange::ordered(start, date)),
            Self::NoSelection | Self::Complete(_) => Self::AwaitingEnd {
                start: date,
                hover: None,
            },
        }
    }

    /// Sets the hover endpoint. No effect unless a start is pending.
    pub fn with_hover(self, date: JalaliDate) -> Self {
        match self {
            Self::AwaitingEnd { start, .. } => Self::AwaitingEnd {
                start,
                hover: Some(date),
            },
            other => other,
        }
    }

    pub fn without_hover(self) -> Self {
        match self {
            Self::AwaitingEnd { start, .. } => Self::AwaitingEnd { start, hover: None },
            other => other,
        }
    }

    /// Start of the draft, complete or not.
    pub fn start(&self) -> Option<JalaliDate> {
        match self {
            Self::NoSelection => None,
            Self::AwaitingEnd { start, .. } => Some(*start),
            Self::Complete(range) => Some(range.start()),
        }
    }

    pub fn end(&self) -> Option<JalaliDate> {
        match self {
            Self::Complete(range) => Some(range.end()),
            Self::NoSelection | Self::AwaitingEnd { .. } => None,
        }
    }

    pub fn hover(&self) -> Option<JalaliDate> {
        match self {
            Self::AwaitingEnd { hover, .. } => *hover,
            Self::NoSelection | Self::Complete(_) => None,
        }
    }

    pub const fn complete(&self) -> Option<DateRange> {
        match self {
            Self::Complete(range) => Some(*range),
            Self::NoSelection | Self::AwaitingEnd { .. } => None,
        }
    }

    /// Ordered span between the pending start and the hovered date.
    pub fn hover_span(&self) -> Option<DateRange> {
        match self {
            Self::AwaitingEnd {
                start,
                hover: Some(hover),
            } => Some(DateRange::ordered(*start, *hover)),
            _ => None,
        }
    }
}

/// Selection state per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Single(Option<JalaliDate>),
    Range {
        committed: CommittedRange,
        draft:     RangeSelection,
    },
}

impl Selection {
    /// Date the view cursor follows: the selected day, or the draft start
    /// falling back to the committed start.
    pub fn anchor(&self) -> Option<JalaliDate> {
        match self {
            Self::Single(selected) => *selected,
            Self::Range { committed, draft } => draft.start().or(committed.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::jalali;

    #[test]
    fn test_click_sequence() {
        let first = jalali(1403, 1, 10);
        let second = jalali(1403, 1, 5);

        let draft = RangeSelection::NoSelection.click(first);
        assert_eq!(draft, RangeSelection::AwaitingEnd { start: first, hover: None });

        let draft = draft.with_hover(jalali(1403, 1, 8)).click(second);
        assert_eq!(draft, RangeSelection::Complete(DateRange::ordered(second, first)));
        assert_eq!(draft.start(), Some(second));
        assert_eq!(draft.end(), Some(first));
        assert_eq!(draft.hover(), None);

        // a third click starts over
        let third = jalali(1403, 2, 1);
        assert_eq!(draft.click(third), RangeSelection::AwaitingEnd { start: third, hover: None });
    }

    #[test]
    fn test_same_day_twice_completes() {
        let day = jalali(1403, 1, 10);
        let draft = RangeSelection::NoSelection.click(day).click(day);
        assert_eq!(draft.complete(), Some(DateRange::day(day)));
    }

    #[test]
    fn test_hover_only_when_awaiting_end() {
        let day = jalali(1403, 1, 10);
        assert_eq!(RangeSelection::NoSelection.with_hover(day), RangeSelection::NoSelection);

        let complete = RangeSelection::Complete(DateRange::day(day));
        assert_eq!(complete.with_hover(jalali(1403, 1, 12)), complete);

        let pending = RangeSelection::NoSelection.click(day).with_hover(jalali(1403, 1, 12));
        assert_eq!(pending.hover(), Some(jalali(1403, 1, 12)));
        assert_eq!(pending.without_hover().hover(), None);
    }

    #[test]
    fn test_hover_span_is_ordered() {
        let start = jalali(1403, 1, 10);
        let before = RangeSelection::NoSelection.click(start).with_hover(jalali(1403, 1, 7));
        let after = RangeSelection::NoSelection.click(start).with_hover(jalali(1403, 1, 13));

        assert_eq!(before.hover_span().map(|r| (r.start(), r.end())), Some((jalali(1403, 1, 7), start)));
        assert_eq!(after.hover_span().map(|r| (r.start(), r.end())), Some((start, jalali(1403, 1, 13))));
        assert_eq!(RangeSelection::NoSelection.click(start).hover_span(), None);
    }

    #[test]
    fn test_committed_to_draft() {
        struct TestCase {
            committed:   CommittedRange,
            expected:    RangeSelection,
            description: &'static str,
        }

        let start = jalali(1403, 1, 5);
        let end = jalali(1403, 1, 10);

        let cases = [
            TestCase {
                committed:   CommittedRange::EMPTY,
                expected:    RangeSelection::NoSelection,
                description: "empty",
            },
            TestCase {
                committed:   CommittedRange {
                    start: Some(start),
                    end:   Some(end),
                },
                expected:    RangeSelection::Complete(DateRange::ordered(start, end)),
                description: "complete",
            },
            TestCase {
                committed:   CommittedRange {
                    start: Some(start),
                    end:   None,
                },
                expected:    RangeSelection::AwaitingEnd { start, hover: None },
                description: "start only",
            },
            TestCase {
                committed:   CommittedRange {
                    start: None,
                    end:   Some(end),
                },
                expected:    RangeSelection::AwaitingEnd {
                    start: end,
                    hover: None,
                },
                description: "end only",
            },
        ];

        for case in &cases {
            assert_eq!(case.committed.to_draft(), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_anchor() {
        let committed_start = jalali(1403, 1, 5);
        let draft_start = jalali(1403, 3, 1);

        let committed = CommittedRange {
            start: Some(committed_start),
            end:   Some(jalali(1403, 1, 10)),
        };
        let idle = Selection::Range {
            committed,
            draft: RangeSelection::NoSelection,
        };
        assert_eq!(idle.anchor(), Some(committed_start));

        let drafting = Selection::Range {
            committed,
            draft: RangeSelection::NoSelection.click(draft_start),
        };
        assert_eq!(drafting.anchor(), Some(draft_start));

        assert_eq!(Selection::Single(None).anchor(), None);
        assert_eq!(Selection::Single(Some(draft_start)).anchor(), Some(draft_start));
    }
}
