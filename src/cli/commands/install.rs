use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

/// Marker appended to the profile line so uninstall can find it again.
const PROFILE_MARKER: &str = "# added by rtimecard install";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Install => install(cfg),
        Commands::Uninstall => uninstall(),
        _ => Ok(()),
    }
}

fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::Install("cannot locate the home directory".into()))
}

fn bin_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".local").join("bin"))
}

fn installed_binary() -> AppResult<PathBuf> {
    let name = if cfg!(windows) {
        "rtimecard.exe"
    } else {
        "rtimecard"
    };
    Ok(bin_dir()?.join(name))
}

fn profile_path() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".bashrc"))
}

fn on_path(dir: &Path) -> bool {
    env::var_os("PATH")
        .map(|path| env::split_paths(&path).any(|p| p == dir))
        .unwrap_or(false)
}

fn install(cfg: &Config) -> AppResult<()> {
    // Config and data directory first, so a fresh machine has the
    // defaults on disk.
    if !Config::config_file().exists() {
        cfg.save()?;
        info(format!(
            "Wrote default config to {}",
            Config::config_file().display()
        ));
    }
    fs::create_dir_all(cfg.data_dir())?;

    // Copy the running binary into ~/.local/bin.
    let exe = env::current_exe()?;
    let dest = installed_binary()?;
    if let Some(dir) = dest.parent() {
        fs::create_dir_all(dir)?;
    }
    if dest.exists() && exe.canonicalize().ok() == dest.canonicalize().ok() {
        info("Already running the installed binary.");
    } else {
        fs::copy(&exe, &dest)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&dest)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&dest, perms)?;
        }
        success(format!("Installed binary to {}", dest.display()));
    }
    if !on_path(&bin_dir()?) {
        warning(format!(
            "{} is not on your PATH; add it to use `rtimecard` directly.",
            bin_dir()?.display()
        ));
    }

    // Greeting hook: one line in the profile, marked so it can be
    // removed cleanly.
    if cfg!(unix) {
        let profile = profile_path()?;
        let current = fs::read_to_string(&profile).unwrap_or_default();
        if current.lines().any(|line| line.contains(PROFILE_MARKER)) {
            info("Shell greeting hook already present.");
        } else {
            let mut content = current;
            if !content.is_empty() && !content.ends_with('\n') {
                content.push('\n');
            }
            content.push_str(&format!("rtimecard auto {}\n", PROFILE_MARKER));
            fs::write(&profile, content)?;
            success(format!("Added greeting hook to {}", profile.display()));
        }
    } else {
        warning("Shell greeting hook is not supported on this platform; run `rtimecard auto` yourself.");
    }
    Ok(())
}

fn uninstall() -> AppResult<()> {
    if cfg!(unix) {
        let profile = profile_path()?;
        if let Ok(current) = fs::read_to_string(&profile)
            && current.lines().any(|line| line.contains(PROFILE_MARKER))
        {
            let kept: Vec<&str> = current
                .lines()
                .filter(|line| !line.contains(PROFILE_MARKER))
                .collect();
            let mut content = kept.join("\n");
            if !content.is_empty() {
                content.push('\n');
            }
            fs::write(&profile, content)?;
            success(format!("Removed greeting hook from {}", profile.display()));
        }
    }

    let dest = installed_binary()?;
    if dest.exists() {
        fs::remove_file(&dest)?;
        success(format!("Removed {}", dest.display()));
    } else {
        info("No installed binary found.");
    }
    info("Timecards and config were kept; delete the data directory if you want them gone too.");
    Ok(())
}
