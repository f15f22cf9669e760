use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// How a sheet maps dates to rows. A deployment-time layout property of the
/// sheet, never inferred from its shape at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// The date row must pre-exist (pre-generated monthly template).
    Strict,
    /// Missing dates land on the first unsaved row, appending at the end.
    Append,
}

fn default_first_data_row() -> u32 {
    8
}

/// One driver's configured identity: vehicle code is the roster key, the
/// access code is the shared secret typed at submit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverProfile {
    /// Access code (login secret)
    pub code: String,
    /// Sheet name inside the driver's workbook file
    pub sheet: String,
    /// Falls back to `Config::default_layout` when absent
    #[serde(default)]
    pub layout: Option<LayoutMode>,
    /// First data row, 1-based as counted on the printed sheet
    #[serde(default = "default_first_data_row")]
    pub first_data_row: u32,
}

impl DriverProfile {
    pub fn layout_or(&self, fallback: LayoutMode) -> LayoutMode {
        self.layout.unwrap_or(fallback)
    }

    /// 0-based row index of the first candidate data row.
    pub fn first_row_index(&self) -> usize {
        self.first_data_row.saturating_sub(1) as usize
    }
}

/// The full driver map, loaded once at startup and immutable afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    pub drivers: BTreeMap<String, DriverProfile>,
}

impl Roster {
    pub fn load(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|_| {
            AppError::Config(format!("Driver roster not found: {}", path.display()))
        })?;
        serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn get(&self, car: &str) -> Option<&DriverProfile> {
        self.drivers.get(car)
    }

    /// Login lookup: resolve a typed access code to (vehicle code, profile).
    pub fn find_by_access_code(&self, code: &str) -> Option<(&str, &DriverProfile)> {
        self.drivers
            .iter()
            .find(|(_, p)| p.code == code)
            .map(|(car, p)| (car.as_str(), p))
    }
}
