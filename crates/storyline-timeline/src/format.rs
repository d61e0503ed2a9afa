//! Granularity-aware display dates.

use chrono::NaiveDate;
use storyline_core::config::DateStyle;
use storyline_core::models::Granularity;

/// Render only the components the granularity says were specified.
pub fn display_date(date: NaiveDate, granularity: Granularity, style: DateStyle) -> String {
    let pattern = match (style, granularity) {
        (DateStyle::Long, Granularity::Day) => "%B %d, %Y",
        (DateStyle::Long, Granularity::Month) => "%B %Y",
        (DateStyle::Iso, Granularity::Day) => "%Y-%m-%d",
        (DateStyle::Iso, Granularity::Month) => "%Y-%m",
        (_, Granularity::Year) => "%Y",
    };
    date.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn long_style() {
        let date = ymd(2023, 1, 5);
        assert_eq!(display_date(date, Granularity::Day, DateStyle::Long), "January 05, 2023");
        assert_eq!(display_date(ymd(2023, 1, 1), Granularity::Month, DateStyle::Long), "January 2023");
        assert_eq!(display_date(ymd(2023, 1, 1), Granularity::Year, DateStyle::Long), "2023");
    }

    #[test]
    fn iso_style() {
        assert_eq!(display_date(ymd(2023, 1, 5), Granularity::Day, DateStyle::Iso), "2023-01-05");
        assert_eq!(display_date(ymd(2000, 6, 1), Granularity::Month, DateStyle::Iso), "2000-06");
        assert_eq!(display_date(ymd(1998, 1, 1), Granularity::Year, DateStyle::Iso), "1998");
    }
}
