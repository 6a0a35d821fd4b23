#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtc() -> Command {
    cargo_bin_cmd!("rtimecard")
}

/// Command pre-wired to an isolated home and timecard directory, so
/// tests never see the developer's real config or timecards.
pub fn rtc_in(dir: &str) -> Command {
    let mut cmd = rtc();
    cmd.env("HOME", dir).args(["--data-dir", dir]);
    cmd
}

/// Create a unique, empty timecard directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimecard", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test data dir");
    path.to_string_lossy().to_string()
}

/// Path of today's timecard file inside `dir`
pub fn today_file(dir: &str) -> PathBuf {
    PathBuf::from(dir).join(rtimecard::store::timecard_file_name(
        rtimecard::utils::date::today(),
    ))
}
