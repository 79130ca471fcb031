use super::classify::CellFlags;
use super::grid::{WeekdayExt, DAYS_IN_WEEK, GRID_WEEKS};
use super::labels::Labels;
use super::state::PickerState;
use crate::theme::{
    cell::{CURSOR_STYLE, IN_RANGE_STYLE, OUTSIDE_MONTH_STYLE, SELECTED_STYLE, TODAY_STYLE},
    ARROW_STYLE, TITLE_STYLE, WEEKDAY_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::StatefulWidget,
};
use std::iter::{successors, zip};
use time::Weekday;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 4;

/// Number of lines above the first week: title, weekday header, and rule
const HEADER_LINES: u16 = 3;

const TITLE_LINE: u16 = 0;
const WEEKDAY_LINE: u16 = 1;
const RULE_LINE: u16 = 2;

const ACS_HLINE: char = '─';
const PREV_ARROW: &str = "<";
const NEXT_ARROW: &str = ">";

/// A month grid of six Sunday-first weeks, drawn from a [`PickerState`].
///
/// The grid and every cell's flags are recomputed from the state on each
/// render.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MonthView<L> {
    labels: L,
}

impl<L> MonthView<L> {
    pub const WIDTH: u16 = DAY_WIDTH * 7;
    pub const HEIGHT: u16 = HEADER_LINES + 6;

    pub fn new(labels: L) -> MonthView<L> {
        MonthView { labels }
    }
}

impl<L: Labels> StatefulWidget for MonthView<L> {
    type State = PickerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let left = area.width.saturating_sub(Self::WIDTH) / 2;
        let area = Rect {
            x: area.x.saturating_add(left),
            y: area.y,
            width: (area.width - left).min(Self::WIDTH),
            height: area.height.min(Self::HEIGHT),
        };
        let mut canvas = BufferCanvas::new(area, buf);
        let anchor = state.anchor();
        let title = format!(
            "{} {}",
            self.labels.month_name(anchor.month()),
            anchor.year()
        );
        canvas.draw_title(&title);
        for wd in successors(Some(Weekday::Sunday), |wd| Some(wd.next())).take(DAYS_IN_WEEK) {
            canvas.draw_weekday(wd, self.labels.weekday_abbrev(wd));
        }
        canvas.hline(RULE_LINE, 0, ACS_HLINE, Self::WIDTH);
        let grid = state.grid();
        for (week_no, week) in zip(0u16.., grid.chunks(DAYS_IN_WEEK).take(GRID_WEEKS)) {
            for &day in week {
                let flags = state.flags(day);
                canvas.draw_day(
                    week_no,
                    day.weekday(),
                    day.day(),
                    cell_style(flags, day == state.cursor()),
                    flags.today,
                );
            }
        }
    }
}

fn cell_style(flags: CellFlags, is_cursor: bool) -> Style {
    let mut style = Style::new();
    if flags.outside_month {
        style = style.patch(OUTSIDE_MONTH_STYLE);
    }
    if flags.is_range_middle() {
        style = style.patch(IN_RANGE_STYLE);
    }
    if flags.selected_single || flags.is_range_endpoint() {
        style = style.patch(SELECTED_STYLE);
    }
    if flags.today {
        style = style.patch(TODAY_STYLE);
    }
    if is_cursor {
        style = style.patch(CURSOR_STYLE);
    }
    style
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, title: &str) {
        let width = u16::try_from(Span::raw(title).width()).unwrap_or(u16::MAX);
        let x = MonthView::<()>::WIDTH.saturating_sub(width) / 2;
        self.mvprint(TITLE_LINE, 0, PREV_ARROW, ARROW_STYLE);
        self.mvprint(TITLE_LINE, x, title, TITLE_STYLE);
        self.mvprint(TITLE_LINE, MonthView::<()>::WIDTH - 1, NEXT_ARROW, ARROW_STYLE);
    }

    fn draw_weekday(&mut self, wd: Weekday, label: &str) {
        let width = usize::from(DAY_WIDTH);
        self.mvprint(
            WEEKDAY_LINE,
            DAY_WIDTH * wd.index0(),
            format!("{label:^width$}"),
            WEEKDAY_STYLE,
        );
    }

    fn draw_day(&mut self, week_no: u16, wd: Weekday, day: u8, style: Style, is_today: bool) {
        let s = if is_today {
            format!("[{day:2}]")
        } else {
            format!(" {day:2} ")
        };
        self.mvprint(HEADER_LINES + week_no, DAY_WIDTH * wd.index0(), s, style);
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            self.buf.set_stringn(
                x + self.area.x,
                y + self.area.y,
                s,
                usize::from(self.area.width - x),
                style,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), Style::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::day::CalendarDay;
    use crate::calendar::labels::English;
    use crate::calendar::selection::{DateRange, Mode, Selection};
    use ratatui::style::{Color, Modifier};
    use time::macros::date;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn feb_2024_range() -> PickerState {
        PickerState::new(CalendarDay::from(date!(2024 - 02 - 14)), Mode::Range).with_selection(
            Selection::Range(DateRange::between(
                CalendarDay::from(date!(2024 - 02 - 05)),
                CalendarDay::from(date!(2024 - 02 - 10)),
            )),
        )
    }

    #[test]
    fn test_layout() {
        let mut state = feb_2024_range();
        let area = Rect::new(0, 0, 28, 9);
        let mut buf = Buffer::empty(area);
        MonthView::new(English).render(area, &mut buf, &mut state);
        assert_eq!(row(&buf, 0), "<      February 2024       >");
        assert_eq!(row(&buf, 1), " Su  Mo  Tu  We  Th  Fr  Sa ");
        assert_eq!(row(&buf, 2), "─".repeat(28));
        assert_eq!(row(&buf, 3), " 28  29  30  31   1   2   3 ");
        assert_eq!(row(&buf, 4), "  4   5   6   7   8   9  10 ");
        assert_eq!(row(&buf, 5), " 11  12  13 [14] 15  16  17 ");
        assert_eq!(row(&buf, 6), " 18  19  20  21  22  23  24 ");
        assert_eq!(row(&buf, 7), " 25  26  27  28  29   1   2 ");
        assert_eq!(row(&buf, 8), "  3   4   5   6   7   8   9 ");
    }

    #[test]
    fn test_cell_styles() {
        let mut state = feb_2024_range();
        let area = Rect::new(0, 0, 28, 9);
        let mut buf = Buffer::empty(area);
        MonthView::new(English).render(area, &mut buf, &mut state);
        // January 28: leading day from the previous month
        assert_eq!(buf[(1, 3)].fg, Color::DarkGray);
        // February 4: plain day
        assert_eq!(buf[(1, 4)].bg, Color::Reset);
        assert_eq!(buf[(1, 4)].fg, Color::Reset);
        // February 5 and 10: range endpoints
        assert_eq!(buf[(5, 4)].bg, Color::LightBlue);
        assert_eq!(buf[(25, 4)].bg, Color::LightBlue);
        // February 7: inside the range
        assert_eq!(buf[(13, 4)].bg, Color::Cyan);
        // February 14: today, under the cursor
        assert!(buf[(13, 5)].modifier.contains(Modifier::BOLD));
        assert!(buf[(13, 5)].modifier.contains(Modifier::REVERSED));
        assert_eq!(buf[(13, 5)].bg, Color::Reset);
    }

    #[test]
    fn test_single_selection_style() {
        let mut state = PickerState::new(CalendarDay::from(date!(2024 - 02 - 14)), Mode::Single)
            .with_selection(Selection::Single(Some(CalendarDay::from(date!(2024 - 02 - 20)))));
        let area = Rect::new(0, 0, 28, 9);
        let mut buf = Buffer::empty(area);
        MonthView::new(English).render(area, &mut buf, &mut state);
        assert_eq!(buf[(9, 6)].bg, Color::LightBlue);
        assert_eq!(buf[(13, 6)].bg, Color::Reset);
    }

    #[test]
    fn test_centered_and_clipped() {
        let mut state = feb_2024_range();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        MonthView::new(English).render(area, &mut buf, &mut state);
        assert_eq!(row(&buf, 0), "      <      February 2024       >      ");
        assert_eq!(row(&buf, 3), "       28  29  30  31   1   2   3       ");
    }

    #[test]
    fn test_narrow_area() {
        let mut state = feb_2024_range();
        let area = Rect::new(0, 0, 10, 9);
        let mut buf = Buffer::empty(area);
        MonthView::new(English).render(area, &mut buf, &mut state);
        assert_eq!(row(&buf, 0), "<      Feb");
        assert_eq!(row(&buf, 5), " 11  12  1");
    }
}
