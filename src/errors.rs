//! Unified application error type.
//! All modules (sheet, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / persistence
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Sheet store error: {0}")]
    Store(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid meter reading: {0}")]
    InvalidReading(String),

    // ---------------------------
    // Entry logic
    // ---------------------------
    #[error("No row for {0} in sheet '{1}'")]
    RowNotFound(NaiveDate, String),

    #[error("Entry already exists for {0}")]
    AlreadyLocked(NaiveDate),

    #[error("No driver matches the given access code")]
    UnknownDriver,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
