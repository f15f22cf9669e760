//! High-level business logic for the `submit` command: the timesheet entry
//! writer.

use crate::core::overtime::overtime_hours;
use crate::errors::{AppError, AppResult};
use crate::models::{DayRecord, DriverProfile, LayoutMode, Remark};
use crate::sheet::resolver::find_row;
use crate::sheet::{SheetRef, SheetStore, col};
use chrono::NaiveDate;

/// Raw submission fields as typed by the driver.
#[derive(Debug, Clone)]
pub struct EntryInput {
    pub opening: String,
    pub closing: String,
    pub start: String,
    pub end: String,
}

pub struct SubmitLogic;

impl SubmitLogic {
    /// Record one day's duty entry into the driver's sheet.
    ///
    /// Validation happens before any store I/O; a row already carrying an
    /// opening reading is locked and rejected, which is the sole
    /// duplicate-submission guard. All eight fields land in one batch and
    /// the workbook is persisted as a whole, so a failed save leaves no
    /// partial row behind.
    pub fn apply(
        store: &dyn SheetStore,
        profile: &DriverProfile,
        sref: &SheetRef,
        layout: LayoutMode,
        date: NaiveDate,
        input: &EntryInput,
    ) -> AppResult<DayRecord> {
        // 1️⃣ Validate inputs, no I/O yet
        let opening = parse_reading(&input.opening)?;
        let closing = parse_reading(&input.closing)?;
        let start = crate::utils::time::parse_required_time(&input.start)?;
        let end = crate::utils::time::parse_required_time(&input.end)?;

        // 2️⃣ Fetch the sheet snapshot and resolve the row
        let mut wb = store.load(sref)?;
        let sheet = wb
            .sheet_mut(&sref.sheet)
            .ok_or_else(|| AppError::Store(format!("No sheet named '{}'", sref.sheet)))?;

        let row = find_row(sheet, profile.first_row_index(), layout, date)
            .ok_or_else(|| AppError::RowNotFound(date, sref.sheet.clone()))?;

        // 3️⃣ Lock check: opening column already filled means write-once
        if !sheet.cell(row, col::PRESENCE).is_empty() {
            return Err(AppError::AlreadyLocked(date));
        }

        // 4️⃣ Derive
        let record = DayRecord {
            date,
            opening,
            closing,
            distance: closing - opening,
            start,
            end,
            overtime: overtime_hours(start, end),
            remark: Remark::classify(start, end, date),
        };

        // 5️⃣ Batch write; append layouts also stamp the date since the row
        // may be newly allocated
        record.write_to(sheet, row, layout == LayoutMode::Append);

        // 6️⃣ Persist; on failure `wb` is dropped with the error and no
        // partial state survives
        store.save(&wb, sref)?;

        Ok(record)
    }
}

fn parse_reading(s: &str) -> AppResult<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidReading(s.to_string()))
}
