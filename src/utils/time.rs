//! Time utilities: parsing HH:MM, elapsed duration across midnight, formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Elapsed fractional hours between two wall-clock times on the same nominal
/// day. If `end` falls before `start` the shift crossed midnight and a full
/// day is added before subtracting.
pub fn elapsed_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let mut secs = (end - start).num_seconds();
    if secs < 0 {
        secs += 86_400;
    }
    secs as f64 / 3600.0
}

/// Timesheet cells carry times in 12-hour clock text, e.g. "09:30 AM".
pub fn format_12h(t: NaiveTime) -> String {
    t.format("%I:%M %p").to_string()
}

pub fn parse_12h(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%I:%M %p").ok()
}

pub fn parse_required_time(input: &str) -> AppResult<NaiveTime> {
    parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}
