use time::{Month, Weekday};

/// Source of the month and weekday names drawn by [`MonthView`][super::MonthView]
pub trait Labels {
    fn month_name(&self, month: Month) -> &str;

    /// Short weekday name for the column header.  At most four columns are
    /// available per weekday.
    fn weekday_abbrev(&self, weekday: Weekday) -> &str;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct English;

static MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static WEEKDAY_ABBREVS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

impl Labels for English {
    fn month_name(&self, month: Month) -> &str {
        MONTH_NAMES
            .get(usize::from(u8::from(month)) - 1)
            .copied()
            .unwrap_or_default()
    }

    fn weekday_abbrev(&self, weekday: Weekday) -> &str {
        WEEKDAY_ABBREVS
            .get(usize::from(weekday.number_days_from_sunday()))
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english() {
        assert_eq!(English.month_name(Month::January), "January");
        assert_eq!(English.month_name(Month::September), "September");
        assert_eq!(English.month_name(Month::December), "December");
        assert_eq!(English.weekday_abbrev(Weekday::Sunday), "Su");
        assert_eq!(English.weekday_abbrev(Weekday::Saturday), "Sa");
    }
}
