//! Unified error type for the whole application.
//!
//! Every fallible operation returns [`AppResult`], so command handlers
//! can bubble failures up to `main` with `?` and a single exit path.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Timecard file
    // ---------------------------
    #[error("No timecard found for {0}")]
    NoTimecard(String),

    #[error("Corrupt timecard: {0}")]
    Corrupt(String),

    #[error("Timecard changed on disk; another instance got there first. Check `rtimecard status` and retry")]
    ConcurrentEdit,

    // ---------------------------
    // Clock state machine
    // ---------------------------
    #[error("Already clocked in. Clock out first with `rtimecard out`")]
    AlreadyClockedIn,

    #[error("Already clocked out. Clock in first with `rtimecard in`")]
    AlreadyClockedOut,

    #[error("Nothing to undo for today")]
    NothingToUndo,

    // ---------------------------
    // User input
    // ---------------------------
    #[error("Invalid time '{0}'. Use minutes (e.g. 15) or HH:MM (e.g. 08:30)")]
    InvalidTime(String),

    #[error("Invalid offset: {0}")]
    InvalidOffset(String),

    // ---------------------------
    // Configuration
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration file")]
    ConfigLoad,

    #[error("Failed to save configuration file")]
    ConfigSave,

    // ---------------------------
    // Install / self-update
    // ---------------------------
    #[error("Install error: {0}")]
    Install(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Update error: {0}")]
    Update(String),

    // ---------------------------
    // Environment
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Internal error: {0}")]
    Other(String),
}

/// Convenient alias used across the crate.
pub type AppResult<T> = Result<T, AppError>;
