//! Time utilities: wall-clock access, backdating offsets and the
//! work-duration syntax used by the configuration.

use chrono::{DateTime, Local, NaiveTime};

use crate::errors::{AppError, AppResult};

/// Current moment as epoch seconds.
pub fn now_epoch() -> i64 {
    Local::now().timestamp()
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// A backdating offset as typed after `in`/`out`/`clock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    /// Bare number: that many minutes before now.
    MinutesAgo(i64),
    /// `HH:MM`: that wall-clock time today.
    At(NaiveTime),
}

pub fn parse_offset(raw: &str) -> AppResult<Offset> {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        let minutes = trimmed
            .parse()
            .map_err(|_| AppError::InvalidTime(raw.to_string()))?;
        return Ok(Offset::MinutesAgo(minutes));
    }
    parse_time(trimmed)
        .map(Offset::At)
        .ok_or_else(|| AppError::InvalidTime(raw.to_string()))
}

/// Turns an optional offset argument into the effective punch
/// timestamp. No argument means now. Offsets may only backdate;
/// anything landing after now is rejected.
pub fn resolve_offset(raw: Option<&str>) -> AppResult<i64> {
    resolve_offset_at(raw, Local::now())
}

fn resolve_offset_at(raw: Option<&str>, now: DateTime<Local>) -> AppResult<i64> {
    let Some(raw) = raw else {
        return Ok(now.timestamp());
    };
    let at = match parse_offset(raw)? {
        Offset::MinutesAgo(minutes) => minutes
            .checked_mul(60)
            .and_then(|secs| now.timestamp().checked_sub(secs))
            .ok_or_else(|| AppError::InvalidTime(raw.to_string()))?,
        Offset::At(tod) => now
            .date_naive()
            .and_time(tod)
            .and_local_timezone(Local)
            .single()
            .ok_or_else(|| AppError::InvalidTime(raw.to_string()))?
            .timestamp(),
    };
    if at > now.timestamp() {
        return Err(AppError::InvalidOffset(format!(
            "'{}' lands in the future",
            raw.trim()
        )));
    }
    Ok(at)
}

/// Parses the configured daily work duration into minutes.
// accetta "8h", "7h30m" oppure minuti secchi ("450")
pub fn parse_work_duration(s: &str) -> Option<i64> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }
    if let Some((hours_part, rest)) = s.split_once('h') {
        let hours: i64 = hours_part.trim().parse().ok()?;
        let rest = rest.trim().trim_end_matches('m').trim();
        let minutes: i64 = if rest.is_empty() { 0 } else { rest.parse().ok()? };
        if hours < 0 || !(0..60).contains(&minutes) {
            return None;
        }
        return hours.checked_mul(60)?.checked_add(minutes);
    }
    let minutes: i64 = s.trim_end_matches('m').trim().parse().ok()?;
    (minutes >= 0).then_some(minutes)
}
