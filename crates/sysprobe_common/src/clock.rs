//! Wall clock access and timestamp formatting.

use chrono::{DateTime, FixedOffset, Local, TimeZone};
use std::fmt::Display;

/// ctime-style layout, day of month padded with a space
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The machine's local time
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Render `now` as `Mon Jan  2 15:04:05 2006`
pub fn format_timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_single_digit_day_is_space_padded() {
        let now = at(2006, 1, 2, 15, 4, 5);
        assert_eq!(format_timestamp(&now), "Mon Jan  2 15:04:05 2006");
    }

    #[test]
    fn test_two_digit_day() {
        let now = at(2024, 3, 15, 9, 7, 3);
        assert_eq!(format_timestamp(&now), "Fri Mar 15 09:07:03 2024");
    }

    #[test]
    fn test_offset_is_not_printed() {
        let now = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2006, 1, 2, 15, 4, 5)
            .unwrap();
        assert_eq!(format_timestamp(&now), "Mon Jan  2 15:04:05 2006");
    }

    #[test]
    fn test_fixed_clock() {
        let now = at(2020, 12, 31, 23, 59, 59);
        assert_eq!(FixedClock(now).now(), now);
    }

    #[test]
    fn test_local_clock_shape() {
        let rendered = format_timestamp(&LocalClock.now());
        let fields: Vec<&str> = rendered.split_whitespace().collect();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0].len(), 3);
        assert_eq!(fields[1].len(), 3);
        assert_eq!(fields[3].len(), 8);
        assert_eq!(fields[4].len(), 4);
    }
}
