//! In-memory model of a driver's timesheet workbook.
//!
//! A workbook holds named sheets; a sheet is a grid of rows of cells with
//! fixed column roles. Rows above the layout's first data row are header
//! band (title, month label, column captions) and never touched.

pub mod cell;
pub mod resolver;
pub mod store;

pub use cell::Cell;
pub use store::{JsonSheetStore, SheetRef, SheetStore};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed column roles, 0-based. Column 0 is the day serial number of the
/// printed layout and is left alone.
pub mod col {
    pub const DATE: usize = 1;
    pub const OPENING: usize = 2;
    pub const CLOSING: usize = 3;
    pub const DISTANCE: usize = 4;
    pub const START: usize = 5;
    pub const END: usize = 6;
    pub const OVERTIME: usize = 7;
    pub const REMARK: usize = 8;

    /// A value in the opening-reading column marks the row as saved
    /// (write-once lock sentinel).
    pub const PRESENCE: usize = OPENING;

    pub const COUNT: usize = 9;
}

pub type Row = Vec<Cell>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sheet {
    pub rows: Vec<Row>,
}

impl Sheet {
    /// Read a cell; anything outside the populated grid reads as `Empty`.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Write a cell, growing the grid as needed.
    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) {
        if self.rows.len() <= row {
            self.rows.resize(row + 1, Row::new());
        }
        let r = &mut self.rows[row];
        if r.len() <= col {
            r.resize(col + 1, Cell::Empty);
        }
        r[col] = value;
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workbook {
    /// Bumped by the store on every save; stale snapshots are refused
    #[serde(default)]
    pub version: u64,
    pub sheets: BTreeMap<String, Sheet>,
}

impl Workbook {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }

    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.get_mut(name)
    }
}
