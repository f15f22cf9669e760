//! Pure-logic coverage of the overtime and remark classifiers through the
//! library API.

use chrono::{NaiveDate, NaiveTime};
use dutylogger::core::overtime::overtime_hours;
use dutylogger::models::Remark;
use dutylogger::utils::time::elapsed_hours;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn elapsed_same_day() {
    assert_eq!(elapsed_hours(t(9, 0), t(17, 30)), 8.5);
}

#[test]
fn elapsed_across_midnight() {
    assert_eq!(elapsed_hours(t(22, 0), t(4, 0)), 6.0);
}

#[test]
fn no_overtime_within_base_shift() {
    assert_eq!(overtime_hours(t(8, 0), t(20, 0)), 0);
    assert_eq!(overtime_hours(t(9, 0), t(17, 0)), 0);
}

#[test]
fn grace_period_boundary_rounds_down() {
    // exactly 12h30m elapsed: 30 minutes over is still forgiven
    assert_eq!(overtime_hours(t(9, 0), t(21, 30)), 0);
}

#[test]
fn one_minute_past_grace_bills_an_hour() {
    assert_eq!(overtime_hours(t(9, 0), t(21, 31)), 1);
}

#[test]
fn overage_rounds_up_to_whole_hours() {
    // 13.5h elapsed, 1.5h over base
    assert_eq!(overtime_hours(t(9, 0), t(22, 30)), 2);
}

#[test]
fn midnight_rollover_shift_has_no_overtime() {
    assert_eq!(overtime_hours(t(22, 0), t(4, 0)), 0);
}

// 2026-03-01 is a Sunday, 2026-03-02 a Monday

#[test]
fn early_start_is_night() {
    assert_eq!(Remark::classify(t(4, 30), t(10, 0), d(2026, 3, 2)), Remark::Night);
}

#[test]
fn late_end_is_night() {
    assert_eq!(Remark::classify(t(10, 0), t(23, 0), d(2026, 3, 2)), Remark::Night);
}

#[test]
fn end_at_ten_pm_exactly_is_night() {
    assert_eq!(Remark::classify(t(10, 0), t(22, 0), d(2026, 3, 2)), Remark::Night);
}

#[test]
fn sunday_day_shift() {
    assert_eq!(Remark::classify(t(10, 0), t(18, 0), d(2026, 3, 1)), Remark::Sunday);
}

#[test]
fn night_and_sunday_combine() {
    assert_eq!(
        Remark::classify(t(4, 0), t(23, 0), d(2026, 3, 1)),
        Remark::NightSunday
    );
}

#[test]
fn plain_weekday_shift_has_no_remark() {
    let r = Remark::classify(t(8, 0), t(18, 0), d(2026, 3, 2));
    assert_eq!(r, Remark::None);
    assert_eq!(r.code(), "");
}

#[test]
fn remark_codes_round_trip() {
    for r in [Remark::None, Remark::Night, Remark::Sunday, Remark::NightSunday] {
        assert_eq!(Remark::from_code(r.code()), Some(r));
    }
}
