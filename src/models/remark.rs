use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

/// Shift-category remark written into the timesheet remark column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Remark {
    None,
    Night,
    Sunday,
    NightSunday,
}

impl Remark {
    /// A shift counts as night duty if it starts before 5 AM or ends at or
    /// after 10 PM, regardless of elapsed duration.
    pub fn classify(start: NaiveTime, end: NaiveTime, date: NaiveDate) -> Self {
        let night = start < NaiveTime::from_hms_opt(5, 0, 0).unwrap()
            || end >= NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        let sunday = date.weekday() == Weekday::Sun;

        match (night, sunday) {
            (true, true) => Remark::NightSunday,
            (true, false) => Remark::Night,
            (false, true) => Remark::Sunday,
            (false, false) => Remark::None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Remark::None => "",
            Remark::Night => "Night",
            Remark::Sunday => "Sunday",
            Remark::NightSunday => "Night/Sunday",
        }
    }

    /// Convert sheet string → enum
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "" => Some(Remark::None),
            "Night" => Some(Remark::Night),
            "Sunday" => Some(Remark::Sunday),
            "Night/Sunday" => Some(Remark::NightSunday),
            _ => None,
        }
    }
}
