//! Overtime derivation from shift start/end times.

use crate::utils::time::elapsed_hours;
use chrono::NaiveTime;

/// Base shift length in hours; nothing within it counts as overtime.
pub const BASE_SHIFT_HOURS: f64 = 12.0;

/// Overage up to this many hours past the base shift is forgiven, so minor
/// clock drift never bills a full hour.
pub const GRACE_HOURS: f64 = 0.5;

/// Whole-hour overtime for a shift. Overtime is billed in whole-hour units;
/// anything beyond the grace window rounds up to the next hour. Exactly 30
/// minutes over still counts as zero.
pub fn overtime_hours(start: NaiveTime, end: NaiveTime) -> i64 {
    let extra = elapsed_hours(start, end) - BASE_SHIFT_HOURS;
    if extra <= 0.0 {
        return 0;
    }
    if extra > GRACE_HOURS {
        return extra.ceil() as i64;
    }
    0
}
