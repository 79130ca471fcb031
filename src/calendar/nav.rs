use super::day::AnchorMonth;

/// Moves `anchor` by `delta_months` months, forwards or backwards, rolling
/// over year boundaries.  The result is always the first of a month.
///
/// Results beyond the supported years saturate at [`AnchorMonth::MIN`] or
/// [`AnchorMonth::MAX`].
pub fn next_anchor(anchor: AnchorMonth, delta_months: i32) -> AnchorMonth {
    AnchorMonth::from_month_index(anchor.month_index() + i64::from(delta_months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn anchor(year: i32, month: Month) -> AnchorMonth {
        AnchorMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_forwards_and_backwards() {
        let start = anchor(2024, Month::February);
        assert_eq!(next_anchor(start, 1), anchor(2024, Month::March));
        assert_eq!(next_anchor(start, -1), anchor(2024, Month::January));
        assert_eq!(next_anchor(start, 0), start);
    }

    #[test]
    fn test_year_rollover() {
        assert_eq!(
            next_anchor(anchor(2024, Month::December), 1),
            anchor(2025, Month::January)
        );
        assert_eq!(
            next_anchor(anchor(2025, Month::January), -1),
            anchor(2024, Month::December)
        );
        assert_eq!(
            next_anchor(anchor(2024, Month::November), 14),
            anchor(2026, Month::January)
        );
        assert_eq!(
            next_anchor(anchor(2024, Month::March), -27),
            anchor(2021, Month::December)
        );
    }

    #[test]
    fn test_across_year_zero() {
        assert_eq!(
            next_anchor(anchor(0, Month::January), -1),
            anchor(-1, Month::December)
        );
        assert_eq!(
            next_anchor(anchor(-1, Month::December), 1),
            anchor(0, Month::January)
        );
    }

    #[test]
    fn test_saturates() {
        assert_eq!(next_anchor(AnchorMonth::MAX, 1), AnchorMonth::MAX);
        assert_eq!(next_anchor(AnchorMonth::MIN, -1), AnchorMonth::MIN);
        assert_eq!(next_anchor(AnchorMonth::MIN, i32::MAX), AnchorMonth::MAX);
        assert_eq!(next_anchor(AnchorMonth::MAX, i32::MIN), AnchorMonth::MIN);
    }
}
