use super::classify::{classify, CellFlags};
use super::day::{AnchorMonth, CalendarDay};
use super::grid::{build_grid, GRID_DAYS};
use super::nav::next_anchor;
use super::selection::{select, Mode, Selection};
use thiserror::Error;
use time::{Date, Duration};

/// State owned by the host of a [`MonthView`][super::MonthView]: the month on
/// display, the selection, the selection mode, today's date, and the day
/// under the cursor.
///
/// Every event is handled by passing this state through the pure functions
/// of the [`calendar`][crate::calendar] module; the grid and cell flags are
/// recomputed on demand and never stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PickerState {
    mode: Mode,
    anchor: AnchorMonth,
    selection: Selection,
    today: CalendarDay,
    cursor: CalendarDay,
}

impl PickerState {
    pub fn new(today: CalendarDay, mode: Mode) -> PickerState {
        PickerState {
            mode,
            anchor: AnchorMonth::containing(today),
            selection: Selection::empty(mode),
            today,
            cursor: today,
        }
    }

    /// Display `anchor` instead of the month containing today.  The cursor
    /// moves to the first of the month unless today is in it.
    pub fn with_anchor(mut self, anchor: AnchorMonth) -> PickerState {
        self.anchor = anchor;
        self.cursor = if anchor.contains(self.today) {
            self.today
        } else {
            anchor.first_day()
        };
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> PickerState {
        self.selection = selection;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn anchor(&self) -> AnchorMonth {
        self.anchor
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn today(&self) -> CalendarDay {
        self.today
    }

    pub fn cursor(&self) -> CalendarDay {
        self.cursor
    }

    pub fn grid(&self) -> [CalendarDay; GRID_DAYS] {
        build_grid(self.anchor)
    }

    pub fn flags(&self, day: CalendarDay) -> CellFlags {
        classify(day, self.anchor, self.today, &self.selection, self.mode)
    }

    /// Move the display by `delta` months.  The cursor keeps its day of the
    /// month, clamped to the length of the new month.
    pub fn turn_page(&mut self, delta: i32) -> Result<(), OutOfTimeError> {
        let anchor = next_anchor(self.anchor, delta);
        if anchor == self.anchor && delta != 0 {
            return Err(OutOfTimeError);
        }
        self.anchor = anchor;
        self.cursor = (1..=self.cursor.day())
            .rev()
            .find_map(|day| Date::from_calendar_date(anchor.year(), anchor.month(), day).ok())
            .map_or(anchor.first_day(), CalendarDay::from);
        tracing::debug!(anchor = %self.anchor, "Turned page");
        Ok(())
    }

    /// Move the cursor by `days` days, bringing its month into view if
    /// needed
    pub fn move_cursor(&mut self, days: i64) -> Result<(), OutOfTimeError> {
        let cursor = self
            .cursor
            .date()
            .checked_add(Duration::days(days))
            .map(CalendarDay::from)
            .ok_or(OutOfTimeError)?;
        self.jump_to(cursor)
    }

    /// Put the cursor on `day` and display its month
    pub fn jump_to(&mut self, day: CalendarDay) -> Result<(), OutOfTimeError> {
        if !day.is_in_supported_years() {
            return Err(OutOfTimeError);
        }
        if !self.anchor.contains(day) {
            self.anchor = AnchorMonth::containing(day);
            tracing::debug!(anchor = %self.anchor, "Cursor changed month");
        }
        self.cursor = day;
        Ok(())
    }

    pub fn jump_to_today(&mut self) {
        self.anchor = AnchorMonth::containing(self.today);
        self.cursor = self.today;
    }

    /// Apply a click on the day under the cursor and pass the resulting
    /// selection to `on_select`
    pub fn click<F: FnOnce(&Selection)>(&mut self, on_select: F) {
        self.selection = select(self.mode, &self.selection, self.cursor);
        on_select(&self.selection);
    }

    /// Switch selection modes, discarding the current selection
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.selection = Selection::empty(mode);
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::empty(self.mode);
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub struct OutOfTimeError;
