use crate::errors::{AppError, AppResult};
use crate::export::model::{RecordExport, get_headers, record_to_row};
use crate::export::notify_export_success;
use csv::Writer;
use std::path::Path;

/// Write the day records as CSV.
pub(crate) fn export_csv(records: &[RecordExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;

    for r in records {
        wtr.write_record(record_to_row(r))
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}
