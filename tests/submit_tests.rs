use predicates::str::contains;

mod common;
use common::{dlog, init_data_dir, setup_data_dir, submit_entry, write_roster};

#[test]
fn submit_records_entry_for_seeded_driver() {
    let dir = setup_data_dir("submit_basic");
    init_data_dir(&dir);

    submit_entry(&dir, "1234", "2026-03-02", "1000", "1250", "08:00", "18:00")
        .success()
        .stdout(contains("Saved 2026-03-02 for KA-01-0001"))
        .stdout(contains("250 km"))
        .stdout(contains("OT 0h"));
}

#[test]
fn second_submit_for_same_date_is_rejected() {
    let dir = setup_data_dir("submit_locked");
    init_data_dir(&dir);

    submit_entry(&dir, "1234", "2026-03-02", "1000", "1250", "08:00", "18:00").success();

    submit_entry(&dir, "1234", "2026-03-02", "2000", "2100", "09:00", "17:00")
        .failure()
        .stderr(contains("Entry already exists for 2026-03-02"));

    // the stored record still carries the first call's values
    dlog()
        .args(["--data-dir", &dir, "--test", "list", "--car", "KA-01-0001"])
        .assert()
        .success()
        .stdout(contains("1000"))
        .stdout(contains("1250"))
        .stdout(contains("250"));
}

#[test]
fn different_dates_occupy_different_rows() {
    let dir = setup_data_dir("submit_two_days");
    init_data_dir(&dir);

    submit_entry(&dir, "1234", "2026-03-02", "1000", "1250", "08:00", "18:00").success();
    submit_entry(&dir, "1234", "2026-03-03", "1250", "1400", "08:00", "18:00").success();

    dlog()
        .args(["--data-dir", &dir, "--test", "list", "--car", "KA-01-0001"])
        .assert()
        .success()
        .stdout(contains("2026-03-02"))
        .stdout(contains("2026-03-03"));
}

#[test]
fn derived_fields_round_trip_through_the_sheet() {
    let dir = setup_data_dir("submit_round_trip");
    init_data_dir(&dir);

    // Sunday 2026-03-01, 04:00 -> 23:00: 19h elapsed, OT 7, Night/Sunday
    submit_entry(&dir, "1234", "2026-03-01", "5000", "5480", "04:00", "23:00")
        .success()
        .stdout(contains("OT 7h"))
        .stdout(contains("Night/Sunday"));

    dlog()
        .args(["--data-dir", &dir, "--test", "list", "--car", "KA-01-0001"])
        .assert()
        .success()
        .stdout(contains("5000"))
        .stdout(contains("5480"))
        .stdout(contains("480"))
        .stdout(contains("04:00 AM"))
        .stdout(contains("11:00 PM"))
        .stdout(contains("Night/Sunday"));
}

#[test]
fn malformed_time_is_rejected_without_writing() {
    let dir = setup_data_dir("submit_bad_time");
    init_data_dir(&dir);

    submit_entry(&dir, "1234", "2026-03-02", "1000", "1250", "8am", "18:00")
        .failure()
        .stderr(contains("Invalid time format"));

    // nothing was written, so the same date is still free
    submit_entry(&dir, "1234", "2026-03-02", "1000", "1250", "08:00", "18:00").success();
}

#[test]
fn malformed_reading_is_rejected() {
    let dir = setup_data_dir("submit_bad_reading");
    init_data_dir(&dir);

    submit_entry(&dir, "1234", "2026-03-02", "12k", "1250", "08:00", "18:00")
        .failure()
        .stderr(contains("Invalid meter reading"));
}

#[test]
fn unknown_access_code_is_rejected() {
    let dir = setup_data_dir("submit_bad_code");
    init_data_dir(&dir);

    submit_entry(&dir, "0000", "2026-03-02", "1000", "1250", "08:00", "18:00")
        .failure()
        .stderr(contains("No driver matches"));
}

#[test]
fn strict_layout_accepts_template_dates_only() {
    let dir = setup_data_dir("submit_strict");
    write_roster(
        &dir,
        r#"{ "KA-09-0099": { "code": "9999", "sheet": "KA-09-0099", "layout": "strict", "first_data_row": 9 } }"#,
    );
    dlog()
        .args(["--data-dir", &dir, "--test", "init", "--month", "2026-03"])
        .assert()
        .success();

    // a date inside the generated March template resolves
    submit_entry(&dir, "9999", "2026-03-05", "700", "950", "06:00", "19:00")
        .success()
        .stdout(contains("Saved 2026-03-05"));

    // a date outside the template has no row
    submit_entry(&dir, "9999", "2026-04-10", "950", "1100", "06:00", "19:00")
        .failure()
        .stderr(contains("No row for 2026-04-10"));
}
