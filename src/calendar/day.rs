use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::{
    format_description::BorrowedFormatItem, macros::date, macros::format_description, Date, Month,
    OffsetDateTime, PrimitiveDateTime, Weekday,
};

static YMD_FMT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// A date at day granularity.
///
/// Two `CalendarDay`s are equal when their year, month, and day are equal;
/// converting from a date-time type discards the time of day.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CalendarDay(Date);

impl CalendarDay {
    pub fn from_ymd(year: i32, month: Month, day: u8) -> Result<CalendarDay, DateError> {
        Ok(CalendarDay(Date::from_calendar_date(year, month, day)?))
    }

    pub fn date(self) -> Date {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> Month {
        self.0.month()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub(crate) fn is_in_supported_years(self) -> bool {
        (AnchorMonth::MIN_YEAR..=AnchorMonth::MAX_YEAR).contains(&self.year())
    }
}

impl From<Date> for CalendarDay {
    fn from(date: Date) -> CalendarDay {
        CalendarDay(date)
    }
}

impl From<PrimitiveDateTime> for CalendarDay {
    fn from(dt: PrimitiveDateTime) -> CalendarDay {
        CalendarDay(dt.date())
    }
}

impl From<OffsetDateTime> for CalendarDay {
    fn from(dt: OffsetDateTime) -> CalendarDay {
        CalendarDay(dt.date())
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CalendarDay {
    type Err = DateError;

    fn from_str(s: &str) -> Result<CalendarDay, DateError> {
        Ok(CalendarDay(Date::parse(s, &YMD_FMT)?))
    }
}

/// The month currently on display, stored as the first day of that month.
///
/// Only years in `MIN_YEAR..=MAX_YEAR` are accepted so that the leading and
/// trailing days of every month grid are themselves representable dates.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AnchorMonth(Date);

impl AnchorMonth {
    pub const MIN_YEAR: i32 = -9998;
    pub const MAX_YEAR: i32 = 9998;
    pub const MIN: AnchorMonth = AnchorMonth(date!(-9998 - 01 - 01));
    pub const MAX: AnchorMonth = AnchorMonth(date!(9998 - 12 - 01));

    pub fn new(year: i32, month: Month) -> Result<AnchorMonth, DateError> {
        if (AnchorMonth::MIN_YEAR..=AnchorMonth::MAX_YEAR).contains(&year) {
            Ok(AnchorMonth(Date::from_calendar_date(year, month, 1)?))
        } else {
            Err(DateError::YearOutOfRange(year))
        }
    }

    /// Returns the month containing `day`, or `None` if `day` lies outside
    /// the supported years
    pub fn try_containing(day: CalendarDay) -> Option<AnchorMonth> {
        AnchorMonth::new(day.year(), day.month()).ok()
    }

    /// Returns the month containing `day`, pinned to [`AnchorMonth::MIN`] or
    /// [`AnchorMonth::MAX`] if `day` lies outside the supported years
    pub fn containing(day: CalendarDay) -> AnchorMonth {
        AnchorMonth::try_containing(day).unwrap_or(if day.year() < AnchorMonth::MIN_YEAR {
            AnchorMonth::MIN
        } else {
            AnchorMonth::MAX
        })
    }

    pub fn first_day(self) -> CalendarDay {
        CalendarDay(self.0)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> Month {
        self.0.month()
    }

    /// Tests whether `day` falls in this month.  Only the year and month of
    /// `day` are consulted.
    pub fn contains(self, day: CalendarDay) -> bool {
        self.year() == day.year() && self.month() == day.month()
    }

    // Months elapsed since January of year 0; negative before then
    pub(crate) fn month_index(self) -> i64 {
        i64::from(self.year()) * 12 + i64::from(u8::from(self.month())) - 1
    }

    // Inverse of `month_index()`, saturating at the supported bounds
    pub(crate) fn from_month_index(index: i64) -> AnchorMonth {
        let index = index.clamp(
            AnchorMonth::MIN.month_index(),
            AnchorMonth::MAX.month_index(),
        );
        let year = i32::try_from(index.div_euclid(12)).expect("clamped year should fit in an i32");
        let month = u8::try_from(index.rem_euclid(12) + 1)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .expect("month number should be in 1..=12");
        AnchorMonth(
            Date::from_calendar_date(year, month, 1)
                .expect("first day of a supported month should be a valid date"),
        )
    }
}

impl From<CalendarDay> for AnchorMonth {
    fn from(day: CalendarDay) -> AnchorMonth {
        AnchorMonth::containing(day)
    }
}

impl fmt::Display for AnchorMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = self.0.to_string();
        // Drop the "-01" day suffix
        s.truncate(s.len() - 3);
        f.write_str(&s)
    }
}

impl FromStr for AnchorMonth {
    type Err = DateError;

    /// Parses `YYYY-MM`, or a full `YYYY-MM-DD` date whose day is ignored
    fn from_str(s: &str) -> Result<AnchorMonth, DateError> {
        if let Ok(day) = s.parse::<CalendarDay>() {
            return AnchorMonth::new(day.year(), day.month());
        }
        let bad = || DateError::InvalidMonth(s.to_owned());
        let (year, month) = s.rsplit_once('-').ok_or_else(bad)?;
        if month.len() != 2 || year.trim_start_matches(['-', '+']).len() < 4 {
            return Err(bad());
        }
        let year = year.parse::<i32>().map_err(|_| bad())?;
        let month = month
            .parse::<u8>()
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(bad)?;
        AnchorMonth::new(year, month)
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DateError {
    #[error("invalid calendar date")]
    Component(#[from] time::error::ComponentRange),
    #[error("invalid date string")]
    Parse(#[from] time::error::Parse),
    #[error("invalid month {0:?}; expected YYYY-MM")]
    InvalidMonth(String),
    #[error("year {0} is outside the supported range")]
    YearOutOfRange(i32),
}
