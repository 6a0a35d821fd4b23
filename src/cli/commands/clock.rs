use crate::cli::commands::status;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::ClockState;
use crate::core::report;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::time;

/// Handles `in`, `out` and the direction-picking `clock`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (requested, offset) = match cmd {
        Commands::In { offset } => (Some(ClockState::In), offset),
        Commands::Out { offset } => (Some(ClockState::Out), offset),
        Commands::Clock { offset } => (None, offset),
        _ => return Ok(()),
    };

    // Validate the target up front so a bad config cannot leave a
    // punch recorded but unreported.
    let target = cfg.work_target_secs()?;
    let at = time::resolve_offset(offset.as_deref())?;

    let store = Store::open(cfg);
    let seen = store.load_or_empty()?;
    let mut ledger = seen.clone();
    let direction = requested.unwrap_or_else(|| ledger.clock_state());

    match direction {
        ClockState::In => ledger.clock_in(at)?,
        ClockState::Out => ledger.clock_out(at)?,
    }
    store.commit(&seen, &ledger)?;
    success(format!(
        "Clocked {} at {}.",
        direction.action(),
        report::format_clock(at)
    ));

    let now = time::now_epoch();
    let summary = report::build_day_summary(&ledger, now, target);
    match direction {
        ClockState::In => status::print_remaining(&summary),
        ClockState::Out => status::print_report(&ledger, &summary, now),
    }
    Ok(())
}
