//! Aggregated view of one day's timecard.

use crate::core::ledger::ClockState;

/// Everything the reports print, computed once from the ledger.
///
/// All durations are in seconds. `remaining` goes negative once the
/// work target has been passed.
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub state: ClockState,
    pub started_at: Option<i64>,
    pub worked: i64,
    pub on_break: i64,
    pub remaining: i64,
    /// Epoch second at which `worked` would reach `target` if the user
    /// kept working without further breaks.
    pub projected_end: i64,
    /// Worked time rounded to the nearest quarter hour, e.g. `7.75`.
    pub quarter_hours: f64,
    pub target: i64,
}
