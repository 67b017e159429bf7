//! Formatting utilities for timestamps and listings.
//!
//! All times are rendered in UTC so output does not depend on the locale or
//! timezone of the machine running the shell.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAYS: [&str; 7] = ["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"];

/// Broken-down UTC time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateTime {
    pub year: i64,
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// 0 = Thursday (1970-01-01)
    weekday: usize,
}

impl DateTime {
    /// Convert a Unix timestamp (seconds) into calendar fields.
    pub fn from_timestamp(timestamp: u64) -> Self {
        let days = (timestamp / 86400) as i64;
        let secs = timestamp % 86400;
        let (year, month, day) = civil_from_days(days);

        Self {
            year,
            month,
            day,
            hour: (secs / 3600) as u32,
            minute: ((secs % 3600) / 60) as u32,
            second: (secs % 60) as u32,
            weekday: (days % 7) as usize,
        }
    }

    fn month_name(&self) -> &'static str {
        MONTHS[(self.month - 1) as usize]
    }
}

/// Days since the epoch to (year, month, day).
///
/// Proleptic Gregorian calendar; see Howard Hinnant's `civil_from_days`.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Format a timestamp for `ls -l` (e.g., "Jan  5 12:34").
pub fn format_date_short(timestamp: u64) -> String {
    let dt = DateTime::from_timestamp(timestamp);
    format!(
        "{} {:2} {:02}:{:02}",
        dt.month_name(),
        dt.day,
        dt.hour,
        dt.minute
    )
}

/// Format a timestamp for `date` (e.g., "Mon Jan  1 00:00:00 UTC 2024").
pub fn format_date_time(timestamp: u64) -> String {
    let dt = DateTime::from_timestamp(timestamp);
    format!(
        "{} {} {:2} {:02}:{:02}:{:02} UTC {}",
        WEEKDAYS[dt.weekday],
        dt.month_name(),
        dt.day,
        dt.hour,
        dt.minute,
        dt.second,
        dt.year
    )
}
