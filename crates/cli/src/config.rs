//! Runtime settings read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use quotebook_core::constants::{DEFAULT_REMOTE_LIMIT, DEFAULT_SYNC_INTERVAL_SECS};
use quotebook_core::env_parse_with_default;

const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub db_path: PathBuf,
    /// `None` disables remote sync and the add mirror.
    pub remote_url: Option<String>,
    pub sync_interval: Duration,
    pub remote_timeout: Duration,
    pub remote_limit: usize,
}

impl Config {
    pub(crate) fn from_env() -> Self {
        let remote_url = std::env::var("QUOTEBOOK_REMOTE_URL")
            .ok()
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty());

        Self {
            db_path: get_db_path(),
            remote_url,
            sync_interval: Duration::from_secs(
                env_parse_with_default("QUOTEBOOK_SYNC_INTERVAL_SECS", DEFAULT_SYNC_INTERVAL_SECS)
                    .max(1),
            ),
            remote_timeout: Duration::from_secs(env_parse_with_default(
                "QUOTEBOOK_REMOTE_TIMEOUT_SECS",
                DEFAULT_REMOTE_TIMEOUT_SECS,
            )),
            remote_limit: env_parse_with_default("QUOTEBOOK_REMOTE_LIMIT", DEFAULT_REMOTE_LIMIT),
        }
    }
}

fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("QUOTEBOOK_DB_PATH") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("quotebook").join("quotes.db")
}

pub(crate) fn ensure_db_dir(db_path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
