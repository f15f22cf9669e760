//! Append-only operations journal, one JSON object per line.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct JournalEntry {
    pub ts: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write one journal line. Callers treat failures as non-blocking: a duty
/// entry that persisted must not be reported as failed because the journal
/// was unwritable.
pub fn jlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = JournalEntry {
        ts: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let mut line = serde_json::to_string(&entry).map_err(std::io::Error::other)?;
    line.push('\n');

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    Ok(())
}

/// Print the journal in arrival order.
pub fn print_journal(path: &Path) -> AppResult<()> {
    if !path.exists() {
        println!("Journal is empty.");
        return Ok(());
    }

    let raw = fs::read_to_string(path)?;
    for line in raw.lines().filter(|l| !l.trim().is_empty()) {
        match serde_json::from_str::<JournalEntry>(line) {
            Ok(e) => println!("{}  {:<8} {:<18} {}", e.ts, e.operation, e.target, e.message),
            Err(_) => println!("{}", line),
        }
    }
    Ok(())
}
