use crate::config::Config;
use crate::core::ledger::UndoOutcome;
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::ui::messages::{success, warning};

/// Reverts the most recent punch of the day.
///
/// Undoing the day's only clock-in leaves an empty ledger, and an
/// empty ledger has no file: the timecard is deleted, as if the day
/// had not started.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::open(cfg);
    let seen = match store.load() {
        Ok(ledger) => ledger,
        Err(AppError::NoTimecard(_)) => {
            warning("No timecard for today. Nothing to undo.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let mut ledger = seen.clone();
    match ledger.undo() {
        Ok(UndoOutcome::Reopened) => {
            store.commit(&seen, &ledger)?;
            success("Undid the last clock-out. The interval is open again.");
        }
        Ok(UndoOutcome::Removed) => {
            store.commit(&seen, &ledger)?;
            success("Undid the last clock-in. You are clocked out.");
        }
        Ok(UndoOutcome::Emptied) => {
            store.remove(&seen)?;
            success("Undid the only clock-in and removed today's timecard.");
        }
        Err(AppError::NothingToUndo) => {
            warning("Nothing to undo for today.");
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
