#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dlog() -> Command {
    cargo_bin_cmd!("dutylogger")
}

/// Create a unique test data dir inside the system temp dir and remove any
/// leftover from a previous run
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dutylogger", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a data dir with the seeded sample roster (append layout,
/// vehicle KA-01-0001, access code 1234)
pub fn init_data_dir(dir: &str) {
    dlog()
        .args(["--data-dir", dir, "--test", "init"])
        .assert()
        .success();
}

/// Write a custom roster before init so the workbooks get scaffolded for it
pub fn write_roster(dir: &str, json: &str) {
    fs::create_dir_all(dir).expect("create data dir");
    fs::write(format!("{}/drivers.json", dir), json).expect("write roster");
}

/// Submit one entry through the CLI
pub fn submit_entry(
    dir: &str,
    code: &str,
    date: &str,
    opening: &str,
    closing: &str,
    start: &str,
    end: &str,
) -> assert_cmd::assert::Assert {
    dlog()
        .args([
            "--data-dir",
            dir,
            "--test",
            "submit",
            "--code",
            code,
            "--date",
            date,
            "--opening",
            opening,
            "--closing",
            closing,
            "--start",
            start,
            "--end",
            end,
        ])
        .assert()
}
