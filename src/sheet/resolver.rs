//! Row resolution: map a calendar date to the physical sheet row that
//! represents it.

use crate::models::LayoutMode;
use crate::sheet::{Cell, Sheet, col};
use chrono::NaiveDate;

/// Text date formats accepted in the date column, tried in order.
/// Printed monthly templates carry `05-Mar-26`; hand-edited sheets
/// sometimes hold ISO dates.
const TEXT_DATE_FORMATS: &[&str] = &["%d-%b-%y", "%d-%b-%Y", "%Y-%m-%d"];

/// Interpret a date-column cell, swallowing parse failures: a cell that
/// cannot be read as a date simply does not match.
pub fn cell_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Date(d) => Some(*d),
        Cell::Text(s) => {
            let s = s.trim();
            TEXT_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        }
        _ => None,
    }
}

/// Locate the row for `target`, scanning candidate data rows in order from
/// `first_data_row` (0-based).
///
/// Strict layouts require the date row to pre-exist (monthly template);
/// append layouts fall back to the first unsaved row, or one past the last
/// row when the sheet is full.
pub fn find_row(
    sheet: &Sheet,
    first_data_row: usize,
    mode: LayoutMode,
    target: NaiveDate,
) -> Option<usize> {
    for r in first_data_row..sheet.row_count() {
        if cell_date(sheet.cell(r, col::DATE)) == Some(target) {
            return Some(r);
        }
    }

    match mode {
        LayoutMode::Strict => None,
        LayoutMode::Append => {
            for r in first_data_row..sheet.row_count() {
                if sheet.cell(r, col::PRESENCE).is_empty() {
                    return Some(r);
                }
            }
            Some(sheet.row_count().max(first_data_row))
        }
    }
}
