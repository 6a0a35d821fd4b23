use chrono::NaiveDate;

/// Today according to the local wall clock. Timecards follow the
/// clock on the wall, not UTC.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The date format used everywhere: file names, headers, messages.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
