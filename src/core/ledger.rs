//! The clock-in/clock-out ledger for a single day.
//!
//! A [`Ledger`] owns the ordered list of [`TimeEntry`] records and is
//! the only place allowed to mutate it. The punch state machine lives
//! here: at most one entry may be open, and only as the last one.

use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;

/// The next punch the ledger expects.
///
/// `In` means the user is ready to clock in (empty day, or the last
/// interval is closed). `Out` means the last interval is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    In,
    Out,
}

impl ClockState {
    /// The action this state calls for, as typed on the command line.
    pub fn action(&self) -> &'static str {
        match self {
            ClockState::In => "in",
            ClockState::Out => "out",
        }
    }

    /// How the current situation reads to a human. The wording is
    /// inverted on purpose: when the expected action is `out`, the
    /// user is currently clocked in.
    pub fn describe(&self) -> &'static str {
        match self {
            ClockState::In => "clocked out",
            ClockState::Out => "clocked in",
        }
    }
}

/// What an undo actually did, so the caller can report it and decide
/// whether the backing file still has a reason to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The last clock-out was cleared; that interval is open again.
    Reopened,
    /// The open interval was dropped; earlier intervals remain.
    Removed,
    /// The open interval was dropped and nothing is left. The caller
    /// should delete the day's file.
    Emptied,
}

/// Ordered work intervals for one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<TimeEntry>,
}

impl Ledger {
    /// Builds a ledger from records loaded off disk, checking the
    /// structural invariants. A violation means the file was edited by
    /// hand or corrupted, and the reason says which rule broke.
    pub fn from_entries(entries: Vec<TimeEntry>) -> AppResult<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if let Some(end) = entry.end {
                if end < entry.start {
                    return Err(AppError::Corrupt(format!(
                        "entry {} ends before it starts",
                        i + 1
                    )));
                }
            } else if i + 1 != entries.len() {
                return Err(AppError::Corrupt(format!(
                    "entry {} is open but is not the last entry",
                    i + 1
                )));
            }
            if i > 0 && entries[i - 1].end.is_some_and(|prev_end| entry.start < prev_end) {
                return Err(AppError::Corrupt(format!(
                    "entry {} starts before entry {} ends",
                    i + 1,
                    i
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Start of the first interval, once there is one.
    pub fn started_at(&self) -> Option<i64> {
        self.entries.first().map(|entry| entry.start)
    }

    pub fn clock_state(&self) -> ClockState {
        match self.entries.last() {
            Some(entry) if entry.is_open() => ClockState::Out,
            _ => ClockState::In,
        }
    }

    /// Opens a new interval at `at`.
    ///
    /// Fails if an interval is already open, or if `at` would overlap
    /// the previous interval (a backdated offset reaching past the
    /// last clock-out).
    pub fn clock_in(&mut self, at: i64) -> AppResult<()> {
        if self.clock_state() == ClockState::Out {
            return Err(AppError::AlreadyClockedIn);
        }
        if let Some(prev) = self.entries.last()
            && prev.end.is_some_and(|prev_end| at < prev_end)
        {
            return Err(AppError::InvalidOffset(
                "it lands before the previous clock-out".to_string(),
            ));
        }
        self.entries.push(TimeEntry::open(at));
        Ok(())
    }

    /// Closes the open interval at `at`.
    ///
    /// Fails if no interval is open, or if `at` falls before the
    /// matching clock-in.
    pub fn clock_out(&mut self, at: i64) -> AppResult<()> {
        match self.entries.last_mut() {
            Some(open) if open.is_open() => {
                if at < open.start {
                    return Err(AppError::InvalidOffset(
                        "it lands before the matching clock-in".to_string(),
                    ));
                }
                open.end = Some(at);
                Ok(())
            }
            _ => Err(AppError::AlreadyClockedOut),
        }
    }

    /// Reverts the most recent punch.
    ///
    /// An open last interval is removed outright (undoing the
    /// clock-in); a closed last interval is reopened (undoing the
    /// clock-out).
    pub fn undo(&mut self) -> AppResult<UndoOutcome> {
        let Some(last) = self.entries.last_mut() else {
            return Err(AppError::NothingToUndo);
        };
        if last.end.is_some() {
            last.end = None;
            return Ok(UndoOutcome::Reopened);
        }
        self.entries.pop();
        if self.entries.is_empty() {
            Ok(UndoOutcome::Emptied)
        } else {
            Ok(UndoOutcome::Removed)
        }
    }

    /// Seconds spent working, with the open interval (if any) counted
    /// up to `now`.
    pub fn total_worked(&self, now: i64) -> i64 {
        self.entries
            .iter()
            .map(|entry| entry.end.unwrap_or(now) - entry.start)
            .sum()
    }

    /// Seconds spent on break: the gap after each closed interval,
    /// up to the next clock-in or, for the last interval, up to `now`.
    /// An open interval contributes nothing (the user is working).
    pub fn total_break(&self, now: i64) -> i64 {
        let mut total = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            let Some(end) = entry.end else { continue };
            match self.entries.get(i + 1) {
                Some(next) => total += next.start - end,
                None => total += now - end,
            }
        }
        total
    }
}
