// src/export/model.rs

use crate::models::DayRecord;
use serde::Serialize;

/// Flat row for report export.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub date: String,
    pub opening: i64,
    pub closing: i64,
    pub distance: i64,
    pub start: String,
    pub end: String,
    pub overtime: i64,
    pub remark: String,
}

impl From<&DayRecord> for RecordExport {
    fn from(r: &DayRecord) -> Self {
        Self {
            date: r.date.format("%Y-%m-%d").to_string(),
            opening: r.opening,
            closing: r.closing,
            distance: r.distance,
            start: r.start_str(),
            end: r.end_str(),
            overtime: r.overtime,
            remark: r.remark.code().to_string(),
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date", "opening", "closing", "distance", "start", "end", "overtime", "remark",
    ]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.date.clone(),
        r.opening.to_string(),
        r.closing.to_string(),
        r.distance.to_string(),
        r.start.clone(),
        r.end.clone(),
        r.overtime.to_string(),
        r.remark.clone(),
    ]
}
