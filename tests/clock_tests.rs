use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{rtc_in, setup_data_dir, today_file};

#[test]
fn test_clock_in_creates_todays_timecard() {
    let dir = setup_data_dir("clock_in_creates");

    rtc_in(&dir)
        .arg("in")
        .assert()
        .success()
        .stdout(contains("Clocked in at").and(contains("Expected clock-out at")));

    let file = today_file(&dir);
    assert!(file.exists());
    let raw = std::fs::read_to_string(&file).unwrap();
    assert!(raw.contains("\"startTime\""));
    assert!(raw.contains("\"endTime\":0"));
}

#[test]
fn test_clock_in_twice_is_rejected() {
    let dir = setup_data_dir("double_in");

    rtc_in(&dir).arg("in").assert().success();
    rtc_in(&dir)
        .arg("in")
        .assert()
        .failure()
        .stderr(contains("Already clocked in"));
}

#[test]
fn test_clock_out_closes_the_interval_and_prints_the_report() {
    let dir = setup_data_dir("in_then_out");

    rtc_in(&dir).arg("in").assert().success();
    rtc_in(&dir)
        .arg("out")
        .assert()
        .success()
        .stdout(contains("Clocked out at").and(contains("Total time worked:")));

    let raw = std::fs::read_to_string(today_file(&dir)).unwrap();
    assert!(!raw.contains("\"endTime\":0"));
}

#[test]
fn test_clock_out_without_clock_in_is_rejected() {
    let dir = setup_data_dir("out_first");

    rtc_in(&dir)
        .arg("out")
        .assert()
        .failure()
        .stderr(contains("Already clocked out"));
}

#[test]
fn test_clock_toggles_direction() {
    let dir = setup_data_dir("clock_toggle");

    rtc_in(&dir)
        .arg("clock")
        .assert()
        .success()
        .stdout(contains("Clocked in at"));
    rtc_in(&dir)
        .arg("clock")
        .assert()
        .success()
        .stdout(contains("Clocked out at"));
    rtc_in(&dir)
        .arg("clock")
        .assert()
        .success()
        .stdout(contains("Clocked in at"));
}

#[test]
fn test_undo_after_clock_out_reopens_the_interval() {
    let dir = setup_data_dir("undo_reopen");

    rtc_in(&dir).arg("in").assert().success();
    rtc_in(&dir).arg("out").assert().success();
    rtc_in(&dir)
        .arg("undo")
        .assert()
        .success()
        .stdout(contains("Undid the last clock-out"));

    rtc_in(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("(clocked in)"));
}

#[test]
fn test_undo_of_the_only_clock_in_removes_the_timecard() {
    let dir = setup_data_dir("undo_empties");

    rtc_in(&dir).arg("in").assert().success();
    assert!(today_file(&dir).exists());

    rtc_in(&dir)
        .arg("undo")
        .assert()
        .success()
        .stdout(contains("removed today's timecard"));
    assert!(!today_file(&dir).exists());
}

#[test]
fn test_undo_keeps_earlier_intervals() {
    let dir = setup_data_dir("undo_keeps");

    rtc_in(&dir).args(["in", "30"]).assert().success();
    rtc_in(&dir).args(["out", "20"]).assert().success();
    rtc_in(&dir).arg("in").assert().success();

    // Drops the open interval, leaving the closed one.
    rtc_in(&dir)
        .arg("undo")
        .assert()
        .success()
        .stdout(contains("Undid the last clock-in"));
    assert!(today_file(&dir).exists());
    rtc_in(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("(clocked out)"));

    // Reopens the closed one.
    rtc_in(&dir)
        .arg("undo")
        .assert()
        .success()
        .stdout(contains("Undid the last clock-out"));
    rtc_in(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("(clocked in)"));
}

#[test]
fn test_undo_with_no_timecard_warns_without_failing() {
    let dir = setup_data_dir("undo_nothing");

    rtc_in(&dir)
        .arg("undo")
        .assert()
        .success()
        .stdout(contains("Nothing to undo"));
}
