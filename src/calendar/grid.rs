use super::day::{AnchorMonth, CalendarDay};
use time::{Duration, Weekday};

pub const DAYS_IN_WEEK: usize = 7;

/// Number of weeks shown for every month, regardless of its length
pub const GRID_WEEKS: usize = 6;

pub const GRID_DAYS: usize = DAYS_IN_WEEK * GRID_WEEKS;

pub(crate) trait WeekdayExt {
    /// Column of the weekday in a Sunday-first week
    fn index0(&self) -> u16;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u16 {
        self.number_days_from_sunday().into()
    }
}

/// Returns the 42 consecutive days displayed for `anchor`, starting with the
/// Sunday on or before the first of the month.
///
/// The result always contains the whole month, preceded by as many days of
/// the previous month as the weekday of its first day and followed by
/// however many days of the next month complete the sixth week.
pub fn build_grid(anchor: AnchorMonth) -> [CalendarDay; GRID_DAYS] {
    let first = anchor.first_day().date();
    let lead = first.weekday().number_days_from_sunday();
    // Supported anchor years keep every grid day well inside `Date`'s range,
    // so the saturating arithmetic never actually saturates.
    let mut day = first.saturating_sub(Duration::days(lead.into()));
    std::array::from_fn(|_| {
        let this = day;
        day = day.next_day().unwrap_or(day);
        CalendarDay::from(this)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month;

    fn grid_for(year: i32, month: Month) -> [CalendarDay; GRID_DAYS] {
        build_grid(AnchorMonth::new(year, month).unwrap())
    }

    #[test]
    fn test_leap_february() {
        let grid = grid_for(2024, Month::February);
        assert_eq!(grid[0], CalendarDay::from(date!(2024 - 01 - 28)));
        assert_eq!(grid[4], CalendarDay::from(date!(2024 - 02 - 01)));
        assert_eq!(grid[32], CalendarDay::from(date!(2024 - 02 - 29)));
        assert_eq!(grid[41], CalendarDay::from(date!(2024 - 03 - 09)));
        assert_eq!(grid[0].weekday(), Weekday::Sunday);
        assert_eq!(grid[41].weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_month_starting_on_sunday() {
        // October 2023 begins on a Sunday, so there are no leading days
        let grid = grid_for(2023, Month::October);
        assert_eq!(grid[0], CalendarDay::from(date!(2023 - 10 - 01)));
        assert_eq!(grid[30], CalendarDay::from(date!(2023 - 10 - 31)));
        assert_eq!(grid[41], CalendarDay::from(date!(2023 - 11 - 11)));
    }

    #[test]
    fn test_four_week_february_still_six_weeks() {
        // February 2015 fills exactly four rows starting on a Sunday
        let grid = grid_for(2015, Month::February);
        assert_eq!(grid[0], CalendarDay::from(date!(2015 - 02 - 01)));
        assert_eq!(grid[27], CalendarDay::from(date!(2015 - 02 - 28)));
        assert_eq!(grid[28], CalendarDay::from(date!(2015 - 03 - 01)));
        assert_eq!(grid[41], CalendarDay::from(date!(2015 - 03 - 14)));
    }

    #[test]
    fn test_month_starting_on_saturday() {
        // June 2024 begins on a Saturday and needs all six rows
        let grid = grid_for(2024, Month::June);
        assert_eq!(grid[0], CalendarDay::from(date!(2024 - 05 - 26)));
        assert_eq!(grid[6], CalendarDay::from(date!(2024 - 06 - 01)));
        assert_eq!(grid[35], CalendarDay::from(date!(2024 - 06 - 30)));
        assert_eq!(grid[41], CalendarDay::from(date!(2024 - 07 - 06)));
    }

    #[test]
    fn test_across_year() {
        let grid = grid_for(2025, Month::January);
        assert_eq!(grid[0], CalendarDay::from(date!(2024 - 12 - 29)));
        assert_eq!(grid[3], CalendarDay::from(date!(2025 - 01 - 01)));
    }

    #[test]
    fn test_consecutive() {
        for anchor in [AnchorMonth::MIN, AnchorMonth::MAX] {
            let grid = build_grid(anchor);
            for pair in grid.windows(2) {
                assert_eq!(pair[0].date().next_day(), Some(pair[1].date()));
            }
            assert!(grid.contains(&anchor.first_day()));
        }
    }
}
