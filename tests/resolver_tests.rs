//! Row-resolution behavior against synthetic sheets.

use chrono::NaiveDate;
use dutylogger::models::LayoutMode;
use dutylogger::sheet::resolver::{cell_date, find_row};
use dutylogger::sheet::{Cell, Sheet, col};

const FIRST: usize = 7; // data starts on printed row 8

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn template_sheet(dates: &[NaiveDate]) -> Sheet {
    let mut sheet = Sheet::default();
    for (i, date) in dates.iter().enumerate() {
        sheet.set_cell(FIRST + i, col::DATE, Cell::Date(*date));
    }
    sheet
}

#[test]
fn native_date_cell_matches() {
    let target = d(2026, 3, 5);
    let sheet = template_sheet(&[d(2026, 3, 4), target, d(2026, 3, 6)]);
    assert_eq!(find_row(&sheet, FIRST, LayoutMode::Strict, target), Some(FIRST + 1));
}

#[test]
fn text_date_cell_matches() {
    let mut sheet = Sheet::default();
    sheet.set_cell(FIRST, col::DATE, Cell::Text("05-Mar-26".to_string()));
    assert_eq!(
        find_row(&sheet, FIRST, LayoutMode::Strict, d(2026, 3, 5)),
        Some(FIRST)
    );
}

#[test]
fn unparseable_cells_are_skipped_not_fatal() {
    let mut sheet = Sheet::default();
    sheet.set_cell(FIRST, col::DATE, Cell::Text("total".to_string()));
    sheet.set_cell(FIRST + 1, col::DATE, Cell::Int(42));
    sheet.set_cell(FIRST + 2, col::DATE, Cell::Date(d(2026, 3, 5)));
    assert_eq!(
        find_row(&sheet, FIRST, LayoutMode::Strict, d(2026, 3, 5)),
        Some(FIRST + 2)
    );
}

#[test]
fn header_rows_are_never_candidates() {
    let mut sheet = Sheet::default();
    // a date sitting in the header band must not match
    sheet.set_cell(2, col::DATE, Cell::Date(d(2026, 3, 5)));
    assert_eq!(find_row(&sheet, FIRST, LayoutMode::Strict, d(2026, 3, 5)), None);
}

#[test]
fn strict_mode_misses_for_any_absent_date() {
    let sheet = template_sheet(&[d(2026, 3, 1), d(2026, 3, 2)]);
    assert_eq!(find_row(&sheet, FIRST, LayoutMode::Strict, d(2026, 3, 9)), None);
    assert_eq!(find_row(&sheet, FIRST, LayoutMode::Strict, d(2027, 1, 1)), None);
}

#[test]
fn append_mode_on_empty_sheet_returns_first_candidate_row() {
    let sheet = Sheet::default();
    assert_eq!(
        find_row(&sheet, FIRST, LayoutMode::Append, d(2026, 3, 9)),
        Some(FIRST)
    );
}

#[test]
fn append_mode_skips_saved_rows() {
    let mut sheet = Sheet::default();
    sheet.set_cell(FIRST, col::OPENING, Cell::Int(1000));
    sheet.set_cell(FIRST + 1, col::OPENING, Cell::Int(1200));
    assert_eq!(
        find_row(&sheet, FIRST, LayoutMode::Append, d(2026, 3, 9)),
        Some(FIRST + 2)
    );
}

#[test]
fn append_mode_on_full_sheet_appends_past_last_row() {
    let mut sheet = Sheet::default();
    for r in FIRST..FIRST + 3 {
        sheet.set_cell(r, col::OPENING, Cell::Int(r as i64));
    }
    // grid rows before FIRST exist but are header band
    let last = sheet.row_count();
    assert_eq!(
        find_row(&sheet, FIRST, LayoutMode::Append, d(2026, 3, 9)),
        Some(last)
    );
}

#[test]
fn text_dates_parse_through_the_format_chain() {
    assert_eq!(
        cell_date(&Cell::Text("05-Mar-26".to_string())),
        Some(d(2026, 3, 5))
    );
    assert_eq!(
        cell_date(&Cell::Text(" 05-Mar-2026 ".to_string())),
        Some(d(2026, 3, 5))
    );
    assert_eq!(
        cell_date(&Cell::Text("2026-03-05".to_string())),
        Some(d(2026, 3, 5))
    );
    assert_eq!(cell_date(&Cell::Text("not a date".to_string())), None);
    assert_eq!(cell_date(&Cell::Int(20260305)), None);
    assert_eq!(cell_date(&Cell::Empty), None);
}
