use crate::cli::parser::{Cli, Commands};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::update;

/// Handles `version` and `update`. Network problems are reported as
/// notices; neither command may fail the process over them.
pub fn handle(cmd: &Commands, cli: &Cli) -> AppResult<()> {
    match cmd {
        Commands::Version => {
            println!("rtimecard {}", env!("CARGO_PKG_VERSION"));
            if !cli.test
                && let Ok(Some(tag)) = update::check_latest()
            {
                info(format!(
                    "Version {} is available. Run `rtimecard update` to install it.",
                    tag
                ));
            }
            Ok(())
        }
        Commands::Update => {
            if cli.test {
                warning("Update checks are disabled in test mode.");
                return Ok(());
            }
            match update::self_update() {
                Ok(Some(tag)) => success(format!("Updated to {}.", tag)),
                Ok(None) => info("Already on the latest version."),
                Err(e) => warning(format!("Update failed: {}", e)),
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
