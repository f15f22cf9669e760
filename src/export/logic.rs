// src/export/logic.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::model::RecordExport;
use crate::export::xlsx::export_xlsx;
use crate::models::{DayRecord, DriverProfile, Roster};
use crate::sheet::{JsonSheetStore, SheetRef, SheetStore};
use std::io;
use std::path::Path;

/// High-level export flow: load the driver's sheet, flatten the saved day
/// records, write the requested format.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        cfg: &Config,
        roster: &Roster,
        car: &str,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let profile = roster
            .get(car)
            .ok_or_else(|| AppError::Config(format!("Unknown vehicle code: {car}")))?;

        let records = load_records(cfg, profile)?;

        match format {
            ExportFormat::Csv => export_csv(&records, path),
            ExportFormat::Xlsx => export_xlsx(&records, path),
        }
    }
}

/// All saved day records of a driver's sheet, in row order.
pub fn load_records(cfg: &Config, profile: &DriverProfile) -> AppResult<Vec<RecordExport>> {
    let store = JsonSheetStore;
    let sref = SheetRef::new(cfg.workbook_file(&profile.sheet), &profile.sheet);

    let wb = store.load(&sref)?;
    let sheet = wb
        .sheet(&profile.sheet)
        .ok_or_else(|| AppError::Store(format!("No sheet named '{}'", profile.sheet)))?;

    let mut out = Vec::new();
    for row in profile.first_row_index()..sheet.row_count() {
        if let Some(rec) = DayRecord::read_from(sheet, row) {
            out.push(RecordExport::from(&rec));
        }
    }
    Ok(out)
}

fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "File '{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
