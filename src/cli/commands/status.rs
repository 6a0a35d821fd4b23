use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::core::report;
use crate::errors::AppResult;
use crate::models::DaySummary;
use crate::store::Store;
use crate::ui::messages::info;
use crate::utils::colors::colorize_in_out;
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = Store::open(cfg);
    let ledger = store.load_or_empty()?;
    let now = time::now_epoch();
    let summary = report::build_day_summary(&ledger, now, cfg.work_target_secs()?);

    if ledger.is_empty() {
        info(format!(
            "No timecard for {} yet. Not clocked in.",
            date::display_date(date::today())
        ));
        print_remaining(&summary);
        return Ok(());
    }

    print_report(&ledger, &summary, now);
    Ok(())
}

/// Full report for a non-empty day: header, interval table, totals
/// and the remaining-time projection. Also printed after a clock-out.
pub(crate) fn print_report(ledger: &Ledger, summary: &DaySummary, now: i64) {
    println!(
        "📋 Timecard for {} ({})",
        date::display_date(date::today()),
        summary.state.describe()
    );
    if let Some(started) = summary.started_at {
        println!("Started work at {}", report::format_clock(started));
    }
    println!();
    print_entries(ledger, now);
    println!();
    println!(
        "Total time worked:   {}  ({} hours on the timesheet)",
        report::format_duration(summary.worked),
        report::quarter_hour_label(summary.worked)
    );
    println!(
        "Total time on break: {}",
        report::format_duration(summary.on_break)
    );
    print_remaining(summary);
}

fn print_entries(ledger: &Ledger, now: i64) {
    let mut table = Table::new(vec![
        Column {
            header: "#",
            width: 3,
        },
        Column {
            header: "In",
            width: 7,
        },
        Column {
            header: "Out",
            width: 7,
        },
        Column {
            header: "Worked",
            width: 14,
        },
    ]);

    for (i, entry) in ledger.entries().iter().enumerate() {
        // Colored cells are padded here: render() cannot account for
        // the escape bytes.
        let in_cell = colorize_in_out(&format!("{:<7}", report::format_clock(entry.start)), true);
        let out_cell = match entry.end {
            Some(end) => colorize_in_out(&format!("{:<7}", report::format_clock(end)), false),
            None => colorize_in_out(&format!("{:<7}", "--:--"), false),
        };
        let worked = entry.end.unwrap_or(now) - entry.start;
        table.add_row(vec![
            (i + 1).to_string(),
            in_cell,
            out_cell,
            report::format_duration(worked),
        ]);
    }

    print!("{}", table.render());
}

/// The remaining-time projection, shared by `status` and the
/// post-punch summaries.
pub(crate) fn print_remaining(summary: &DaySummary) {
    if summary.remaining >= 0 {
        println!(
            "Time left to reach {}: {}",
            report::format_duration(summary.target),
            report::format_duration(summary.remaining)
        );
        println!(
            "Expected clock-out at {}",
            report::format_clock(summary.projected_end)
        );
    } else {
        println!(
            "Target of {} passed by {}",
            report::format_duration(summary.target),
            report::format_duration(-summary.remaining)
        );
        println!(
            "Target was reached at {}",
            report::format_clock(summary.projected_end)
        );
    }
}
