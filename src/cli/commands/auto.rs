use std::io::{self, Write};

use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::ui::messages::{info, success};
use crate::utils::time;

/// Ask whether to clock in; anything not starting with `n` is a yes.
fn ask_clock_in() -> AppResult<bool> {
    print!("Clock in for the day? (Y/n): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(!answer.trim().to_lowercase().starts_with('n'))
}

/// The shell-profile greeting: on the first shell of the day, offer
/// to clock in. Quiet and quick when a timecard already exists.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::open(cfg);
    if store.exists() {
        let ledger = store.load()?;
        info(format!(
            "Timecard already started for today. Next punch would be `rtimecard {}`.",
            ledger.clock_state().action()
        ));
        return Ok(());
    }

    if !ask_clock_in()? {
        info("Not clocking in. Enjoy your day off!");
        return Ok(());
    }

    // The prompt may have sat unanswered while another shell already
    // clocked in.
    if store.exists() {
        return Err(AppError::ConcurrentEdit);
    }

    let seen = Ledger::default();
    let mut ledger = seen.clone();
    ledger.clock_in(time::now_epoch())?;
    store.commit(&seen, &ledger)?;
    success("Clocked in. Have a good one!");
    Ok(())
}
