//! Derived reporting: durations, quarter-hour rounding and the
//! projected end of the working day.

use chrono::{Local, TimeZone};

use crate::core::ledger::Ledger;
use crate::models::DaySummary;

/// Renders a duration in seconds as `MM min` under one hour and as
/// `HH hrs, MM min` from one hour up. Negative durations keep the
/// same shape with a leading minus.
pub fn format_duration(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let seconds = seconds.abs();
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours == 0 {
        format!("{sign}{minutes:02} min")
    } else {
        format!("{sign}{hours:02} hrs, {minutes:02} min")
    }
}

/// Splits a duration into whole hours plus a rounded quarter count.
/// `round(59 / 15)` is 4, so the carry lands in the hour instead of
/// producing a 60-minute remainder.
fn quarter_components(seconds: i64) -> (i64, i64) {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let quarters = (minutes as f64 / 15.0).round() as i64;
    (hours + quarters / 4, quarters % 4)
}

/// Duration rounded to the nearest quarter hour, as fractional hours.
/// 1h59m comes out as 2.0, 7h40m as 7.75.
pub fn nearest_quarter_hour(seconds: i64) -> f64 {
    let (hours, quarters) = quarter_components(seconds);
    hours as f64 + quarters as f64 * 0.25
}

/// The quarter-hour figure as it goes on a timesheet: `2.0`, `7.75`.
pub fn quarter_hour_label(seconds: i64) -> String {
    let (hours, quarters) = quarter_components(seconds);
    match quarters {
        0 => format!("{hours}.0"),
        1 => format!("{hours}.25"),
        2 => format!("{hours}.5"),
        _ => format!("{hours}.75"),
    }
}

/// Epoch second at which the work target is reached, assuming the
/// user works from `now` on without further breaks. Falls in the past
/// once the target has already been passed.
pub fn projected_end_time(now: i64, total_worked: i64, target: i64) -> i64 {
    now + (target - total_worked)
}

/// Local wall-clock rendering (`HH:MM`) of an epoch second.
pub fn format_clock(ts: i64) -> String {
    match Local.timestamp_opt(ts, 0).single() {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Computes the full [`DaySummary`] for a ledger at `now` against the
/// configured daily target.
pub fn build_day_summary(ledger: &Ledger, now: i64, target: i64) -> DaySummary {
    let worked = ledger.total_worked(now);
    DaySummary {
        state: ledger.clock_state(),
        started_at: ledger.started_at(),
        worked,
        on_break: ledger.total_break(now),
        remaining: target - worked,
        projected_end: projected_end_time(now, worked, target),
        quarter_hours: nearest_quarter_hour(worked),
        target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeEntry;

    #[test]
    fn test_short_durations_use_minutes_only() {
        assert_eq!(format_duration(0), "00 min");
        assert_eq!(format_duration(7 * 60), "07 min");
        assert_eq!(format_duration(3599), "59 min");
    }

    #[test]
    fn test_long_durations_use_hours_and_minutes() {
        assert_eq!(format_duration(3600), "01 hrs, 00 min");
        assert_eq!(format_duration(5400), "01 hrs, 30 min");
        assert_eq!(format_duration(8 * 3600), "08 hrs, 00 min");
        assert_eq!(format_duration(10 * 3600 + 5 * 60), "10 hrs, 05 min");
    }

    #[test]
    fn test_negative_durations_keep_the_shape() {
        assert_eq!(format_duration(-12 * 60), "-12 min");
        assert_eq!(format_duration(-3900), "-01 hrs, 05 min");
    }

    #[test]
    fn test_quarter_rounding_snaps_to_nearest() {
        assert_eq!(nearest_quarter_hour(0), 0.0);
        assert_eq!(nearest_quarter_hour(7 * 60), 0.0);
        assert_eq!(nearest_quarter_hour(8 * 60), 0.25);
        assert_eq!(nearest_quarter_hour(2 * 3600), 2.0);
        assert_eq!(nearest_quarter_hour(7 * 3600 + 40 * 60), 7.75);
    }

    #[test]
    fn test_quarter_rounding_carries_into_the_hour() {
        // 1h59m rounds up to 2.0, not 1.0 with a dangling 60 minutes.
        assert_eq!(nearest_quarter_hour(3600 + 59 * 60), 2.0);
        assert_eq!(nearest_quarter_hour(58 * 60), 1.0);
        assert_eq!(quarter_hour_label(3600 + 53 * 60), "2.0");
    }

    #[test]
    fn test_quarter_label_matches_timesheet_style() {
        assert_eq!(quarter_hour_label(2 * 3600), "2.0");
        assert_eq!(quarter_hour_label(2 * 3600 + 20 * 60), "2.25");
        assert_eq!(quarter_hour_label(2 * 3600 + 30 * 60), "2.5");
        assert_eq!(quarter_hour_label(7 * 3600 + 44 * 60), "7.75");
    }

    #[test]
    fn test_projection_moves_past_once_target_is_exceeded() {
        assert_eq!(projected_end_time(10_000, 3600, 7200), 13_600);
        assert_eq!(projected_end_time(10_000, 7200, 7200), 10_000);
        assert_eq!(projected_end_time(10_000, 9000, 7200), 8_200);
    }

    #[test]
    fn test_summary_aggregates_the_ledger() {
        let ledger =
            Ledger::from_entries(vec![TimeEntry::closed(0, 3600), TimeEntry::open(5400)])
                .unwrap();
        let summary = build_day_summary(&ledger, 9000, 8 * 3600);
        assert_eq!(summary.worked, 7200);
        assert_eq!(summary.on_break, 1800);
        assert_eq!(summary.remaining, 8 * 3600 - 7200);
        assert_eq!(summary.projected_end, 9000 + summary.remaining);
        assert_eq!(summary.quarter_hours, 2.0);
        assert_eq!(summary.started_at, Some(0));
    }
}
