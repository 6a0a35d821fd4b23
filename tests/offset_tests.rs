use chrono::{Duration, Local, Timelike};
use predicates::str::contains;

mod common;
use common::{rtc_in, setup_data_dir, today_file};

fn entry_bounds(dir: &str) -> Vec<(i64, i64)> {
    let raw = std::fs::read_to_string(today_file(dir)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["startTime"].as_i64().unwrap(),
                e["endTime"].as_i64().unwrap(),
            )
        })
        .collect()
}

#[test]
fn test_minute_offsets_backdate_exactly() {
    let dir = setup_data_dir("offset_minutes");

    rtc_in(&dir).args(["in", "120"]).assert().success();
    rtc_in(&dir).args(["out", "60"]).assert().success();

    let entries = entry_bounds(&dir);
    assert_eq!(entries.len(), 1);
    let (start, end) = entries[0];
    // The two invocations run a few seconds apart, so the interval is
    // an hour give or take the spawn time.
    assert!((3600..3660).contains(&(end - start)));
}

#[test]
fn test_wall_clock_offset_lands_on_the_requested_minute() {
    let now = Local::now();
    let target = now - Duration::minutes(90);
    if target.date_naive() != now.date_naive() {
        // Shortly after midnight the offset would point at yesterday.
        return;
    }
    let dir = setup_data_dir("offset_wall_clock");
    let hhmm = target.format("%H:%M").to_string();

    rtc_in(&dir).args(["in", &hhmm]).assert().success();

    let entries = entry_bounds(&dir);
    let expected = target.with_second(0).unwrap().with_nanosecond(0).unwrap();
    assert_eq!(entries[0].0, expected.timestamp());
}

#[test]
fn test_future_offsets_are_rejected() {
    let now = Local::now();
    let target = now + Duration::minutes(30);
    if target.date_naive() != now.date_naive() {
        // Close to midnight the future time would wrap to tomorrow.
        return;
    }
    let dir = setup_data_dir("offset_future");
    let hhmm = target.format("%H:%M").to_string();

    rtc_in(&dir)
        .args(["in", &hhmm])
        .assert()
        .failure()
        .stderr(contains("future"));
    assert!(!today_file(&dir).exists());
}

#[test]
fn test_nonsense_offsets_are_rejected() {
    let dir = setup_data_dir("offset_nonsense");

    rtc_in(&dir)
        .args(["in", "abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));
    rtc_in(&dir)
        .args(["in", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));
    assert!(!today_file(&dir).exists());
}

#[test]
fn test_backdated_clock_in_cannot_cross_the_previous_clock_out() {
    let dir = setup_data_dir("offset_overlap");

    rtc_in(&dir).args(["in", "30"]).assert().success();
    rtc_in(&dir).args(["out", "20"]).assert().success();
    rtc_in(&dir)
        .args(["in", "25"])
        .assert()
        .failure()
        .stderr(contains("Invalid offset"));

    // The rejected punch left the file alone.
    assert_eq!(entry_bounds(&dir).len(), 1);
}

#[test]
fn test_backdated_clock_out_cannot_precede_the_clock_in() {
    let dir = setup_data_dir("offset_backwards");

    rtc_in(&dir).args(["in", "10"]).assert().success();
    rtc_in(&dir)
        .args(["out", "20"])
        .assert()
        .failure()
        .stderr(contains("Invalid offset"));
}
