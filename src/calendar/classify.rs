use super::day::{AnchorMonth, CalendarDay};
use super::selection::{Mode, Selection};

/// Presentation predicates for one day of the grid.  The flags are
/// independent of one another; a day may, for example, be both today and
/// the start of the selected range.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct CellFlags {
    /// The day belongs to the month before or after the anchor month
    pub outside_month: bool,
    pub today: bool,
    pub selected_single: bool,
    pub range_start: bool,
    pub range_end: bool,
    /// The day lies within a complete range, endpoints included
    pub in_range: bool,
}

impl CellFlags {
    /// Tests whether the day is either endpoint of the selected range
    pub fn is_range_endpoint(&self) -> bool {
        self.range_start || self.range_end
    }

    /// Tests whether the day is strictly inside the selected range
    pub fn is_range_middle(&self) -> bool {
        self.in_range && !self.is_range_endpoint()
    }
}

pub fn classify(
    day: CalendarDay,
    anchor: AnchorMonth,
    today: CalendarDay,
    selection: &Selection,
    mode: Mode,
) -> CellFlags {
    let mut flags = CellFlags {
        outside_month: !anchor.contains(day),
        today: day == today,
        ..CellFlags::default()
    };
    match mode {
        Mode::Single => flags.selected_single = selection.single() == Some(day),
        Mode::Range => {
            let range = selection.range();
            flags.range_start = range.from() == Some(day);
            flags.range_end = range.to() == Some(day);
            flags.in_range = range.contains(day);
        }
    }
    flags
}
