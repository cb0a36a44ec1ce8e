//! Display formatting for show start times.

use crate::types::Timestamp;

/// How much detail a rendered date carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Saturday May, 21, 2019 at 9:30PM`, used on detail pages.
    Full,
    /// `Sat 05, 21, 2019 9:30PM`, used in lists.
    Medium,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

/// Render a timestamp for display.
pub fn format_datetime(ts: &Timestamp, style: DateStyle) -> String {
    ts.format(style.pattern()).to_string()
}

/// Render a timestamp as the value of an `<input type="datetime-local">`.
pub fn datetime_local_value(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%dT%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample() -> Timestamp {
        Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap()
    }

    #[test]
    fn full_style() {
        assert_eq!(
            format_datetime(&sample(), DateStyle::Full),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
    }

    #[test]
    fn medium_style() {
        assert_eq!(
            format_datetime(&sample(), DateStyle::Medium),
            "Tue 05, 21, 2019 9:30PM"
        );
    }

    #[test]
    fn morning_hours_are_not_padded() {
        let ts = Utc.with_ymd_and_hms(2035, 4, 1, 8, 5, 0).unwrap();
        assert_eq!(
            format_datetime(&ts, DateStyle::Full),
            "Sunday April, 1, 2035 at 8:05AM"
        );
    }

    #[test]
    fn datetime_local_round_trips_minutes() {
        assert_eq!(datetime_local_value(&sample()), "2019-05-21T21:30");
    }
}
