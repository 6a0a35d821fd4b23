//! Release check and self-update against the GitHub releases feed.
//!
//! Nothing here is ever fatal for the punch-clock commands: only
//! `version` and `update` reach this module, and both downgrade
//! failures to a notice.

use std::env;
use std::fs;
use std::time::Duration;

use serde::Deserialize;

use crate::errors::{AppError, AppResult};

const RELEASE_ENDPOINT: &str = "https://api.github.com/repos/umpire274/rTimecard/releases/latest";
const HTTP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
    #[serde(default)]
    assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Deserialize)]
struct ReleaseAsset {
    name: String,
    browser_download_url: String,
}

fn client() -> AppResult<reqwest::blocking::Client> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!("rtimecard/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

fn fetch_latest() -> AppResult<Release> {
    let release = client()?
        .get(RELEASE_ENDPOINT)
        .send()?
        .error_for_status()?
        .json::<Release>()?;
    Ok(release)
}

fn version_triple(tag: &str) -> Option<(u64, u64, u64)> {
    let tag = tag.trim().trim_start_matches('v');
    let mut parts = tag.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = parts.next().unwrap_or("0").parse().ok()?;
    Some((major, minor, patch))
}

fn newer_than_current(tag: &str) -> bool {
    match (version_triple(env!("CARGO_PKG_VERSION")), version_triple(tag)) {
        (Some(current), Some(latest)) => latest > current,
        _ => false,
    }
}

/// Tag of a newer published release, if there is one.
pub fn check_latest() -> AppResult<Option<String>> {
    let release = fetch_latest()?;
    if newer_than_current(&release.tag_name) {
        Ok(Some(release.tag_name))
    } else {
        Ok(None)
    }
}

/// Replaces the running executable with the release asset built for
/// this platform. Returns the new tag, or `None` when already up to
/// date.
pub fn self_update() -> AppResult<Option<String>> {
    let release = fetch_latest()?;
    if !newer_than_current(&release.tag_name) {
        return Ok(None);
    }

    let wanted = format!("rtimecard-{}-{}", env::consts::OS, env::consts::ARCH);
    let asset = release
        .assets
        .iter()
        .find(|asset| asset.name.starts_with(&wanted))
        .ok_or_else(|| AppError::Update(format!("no prebuilt binary named {wanted}*")))?;

    let bytes = client()?
        .get(&asset.browser_download_url)
        .send()?
        .error_for_status()?
        .bytes()?;

    let exe = env::current_exe()?;
    let staged = exe.with_extension("new");
    fs::write(&staged, &bytes)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&staged)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&staged, perms)?;
    }
    fs::rename(&staged, &exe)?;
    Ok(Some(release.tag_name))
}
