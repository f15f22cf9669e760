//! Workbook persistence behind a small trait, so the entry engine never
//! knows whether sheets live on local disk or a remote document store.

use crate::errors::{AppError, AppResult};
use crate::sheet::Workbook;
use std::fs;
use std::path::PathBuf;

/// Where a sheet lives: a workbook file plus the sheet name inside it.
#[derive(Debug, Clone)]
pub struct SheetRef {
    pub path: PathBuf,
    pub sheet: String,
}

impl SheetRef {
    pub fn new(path: PathBuf, sheet: &str) -> Self {
        Self {
            path,
            sheet: sheet.to_string(),
        }
    }
}

pub trait SheetStore {
    fn load(&self, sref: &SheetRef) -> AppResult<Workbook>;
    fn save(&self, wb: &Workbook, sref: &SheetRef) -> AppResult<()>;
}

/// Local store: one JSON file per workbook under the data directory.
pub struct JsonSheetStore;

impl SheetStore for JsonSheetStore {
    fn load(&self, sref: &SheetRef) -> AppResult<Workbook> {
        if !sref.path.exists() {
            return Err(AppError::Store(format!(
                "Workbook not found: {}",
                sref.path.display()
            )));
        }

        let raw = fs::read_to_string(&sref.path)?;
        serde_json::from_str(&raw)
            .map_err(|e| AppError::Store(format!("{}: {}", sref.path.display(), e)))
    }

    fn save(&self, wb: &Workbook, sref: &SheetRef) -> AppResult<()> {
        // Optimistic version check: the lock column is only a cooperative
        // guard, so a snapshot that lost a race to another writer must not
        // silently overwrite the winner's entry.
        if sref.path.exists() {
            let current = self.load(sref)?;
            if current.version != wb.version {
                return Err(AppError::Store(format!(
                    "Workbook changed since it was loaded (version {} on disk, {} in memory): {}",
                    current.version,
                    wb.version,
                    sref.path.display()
                )));
            }
        }

        let mut next = wb.clone();
        next.version = wb.version + 1;
        let json =
            serde_json::to_string_pretty(&next).map_err(|e| AppError::Store(e.to_string()))?;

        // Write to a sibling temp file first; rename is atomic on the same
        // filesystem, so a failed save never leaves a torn workbook.
        let tmp = sref.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &sref.path)?;
        Ok(())
    }
}
