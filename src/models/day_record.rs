use crate::models::Remark;
use crate::sheet::{Cell, Sheet, col};
use crate::utils::time::{format_12h, parse_12h};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One calendar date's duty entry: the raw readings and times plus the
/// derived distance, overtime and remark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub opening: i64,
    pub closing: i64,
    pub distance: i64,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub overtime: i64,
    pub remark: Remark,
}

impl DayRecord {
    pub fn start_str(&self) -> String {
        format_12h(self.start)
    }

    pub fn end_str(&self) -> String {
        format_12h(self.end)
    }

    /// Write all fields into `row` as one batch. The date cell is only
    /// touched when `write_date` is set (append layouts, where the row may
    /// be newly allocated); template rows already carry their date.
    pub fn write_to(&self, sheet: &mut Sheet, row: usize, write_date: bool) {
        if write_date {
            sheet.set_cell(row, col::DATE, Cell::Date(self.date));
        }
        sheet.set_cell(row, col::OPENING, Cell::Int(self.opening));
        sheet.set_cell(row, col::CLOSING, Cell::Int(self.closing));
        sheet.set_cell(row, col::DISTANCE, Cell::Int(self.distance));
        sheet.set_cell(row, col::START, Cell::Text(self.start_str()));
        sheet.set_cell(row, col::END, Cell::Text(self.end_str()));
        sheet.set_cell(row, col::OVERTIME, Cell::Int(self.overtime));
        sheet.set_cell(row, col::REMARK, Cell::Text(self.remark.code().to_string()));
    }

    /// Rebuild a record from a saved sheet row. Returns `None` for unsaved
    /// or malformed rows.
    pub fn read_from(sheet: &Sheet, row: usize) -> Option<Self> {
        let date = crate::sheet::resolver::cell_date(sheet.cell(row, col::DATE))?;
        let opening = sheet.cell(row, col::OPENING).as_int()?;
        let closing = sheet.cell(row, col::CLOSING).as_int()?;
        let distance = sheet.cell(row, col::DISTANCE).as_int()?;
        let start = parse_12h(sheet.cell(row, col::START).as_text()?)?;
        let end = parse_12h(sheet.cell(row, col::END).as_text()?)?;
        let overtime = sheet.cell(row, col::OVERTIME).as_int()?;
        let remark = Remark::from_code(sheet.cell(row, col::REMARK).as_text().unwrap_or(""))?;

        Some(Self {
            date,
            opening,
            closing,
            distance,
            start,
            end,
            overtime,
            remark,
        })
    }
}
