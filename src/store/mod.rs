//! Persistence: one JSON file per day in the configured data
//! directory, named `timecard.YYYY-MM-DD.json`.
//!
//! There is no file locking. Instead every mutation goes through
//! [`Store::commit`], which re-reads the file and refuses to write if
//! it no longer matches the ledger the mutation was computed from.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use regex::Regex;

use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::utils::date;

/// File name of the timecard for `date`.
pub fn timecard_file_name(date: NaiveDate) -> String {
    format!("timecard.{}.json", date::display_date(date))
}

/// Handle on one day's timecard file.
pub struct Store {
    path: PathBuf,
    date: NaiveDate,
}

impl Store {
    /// Store for today's timecard.
    pub fn open(cfg: &Config) -> Self {
        Self::for_date(cfg, date::today())
    }

    pub fn for_date(cfg: &Config, date: NaiveDate) -> Self {
        Self {
            path: cfg.data_dir().join(timecard_file_name(date)),
            date,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads and validates the day's ledger.
    pub fn load(&self) -> AppResult<Ledger> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::NoTimecard(date::display_date(self.date)));
            }
            Err(e) => return Err(e.into()),
        };
        let entries: Vec<TimeEntry> = serde_json::from_str(&raw)
            .map_err(|e| AppError::Corrupt(format!("{}: {}", self.path.display(), e)))?;
        Ledger::from_entries(entries).map_err(|e| match e {
            AppError::Corrupt(reason) => {
                AppError::Corrupt(format!("{}: {}", self.path.display(), reason))
            }
            other => other,
        })
    }

    /// Like [`Store::load`], but a day without a timecard yet reads as
    /// an empty ledger.
    pub fn load_or_empty(&self) -> AppResult<Ledger> {
        match self.load() {
            Ok(ledger) => Ok(ledger),
            Err(AppError::NoTimecard(_)) => Ok(Ledger::default()),
            Err(e) => Err(e),
        }
    }

    /// Persists `updated`, but only if the file still holds `seen`.
    /// Anything else means another instance wrote in between, and the
    /// mutation computed from `seen` no longer applies.
    pub fn commit(&self, seen: &Ledger, updated: &Ledger) -> AppResult<()> {
        if self.load_or_empty()? != *seen {
            return Err(AppError::ConcurrentEdit);
        }
        self.write_atomic(updated)
    }

    /// Deletes the day's file, with the same re-check as `commit`.
    pub fn remove(&self, seen: &Ledger) -> AppResult<()> {
        if self.load_or_empty()? != *seen {
            return Err(AppError::ConcurrentEdit);
        }
        fs::remove_file(&self.path)?;
        Ok(())
    }

    fn write_atomic(&self, ledger: &Ledger) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string(ledger.entries())
            .map_err(|e| AppError::Other(e.to_string()))?;
        let staged = self.path.with_extension("json.tmp");
        fs::write(&staged, json)?;
        fs::rename(&staged, &self.path)?;
        Ok(())
    }
}

/// Removes timecards older than the configured retention, judged by
/// the date in the file name. Foreign files are left alone, as are
/// files that cannot be deleted. Returns what was removed.
pub fn sweep_stale(cfg: &Config, today: NaiveDate) -> Vec<PathBuf> {
    let pattern = Regex::new(r"^timecard\.(\d{4}-\d{2}-\d{2})\.json$").unwrap();
    let cutoff = today - Duration::days(cfg.retention_days.max(0));
    let mut removed = Vec::new();

    let Ok(dir) = fs::read_dir(cfg.data_dir()) else {
        return removed;
    };
    for entry in dir.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let Some(caps) = pattern.captures(name) else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d") else {
            continue;
        };
        if date < cutoff && fs::remove_file(entry.path()).is_ok() {
            removed.push(entry.path());
        }
    }
    removed
}
