//! Logging init: append to a file under the XDG state dir, or fall back to stderr.
//!
//! Filter directives come from `LINKPICK_LOG`, then `RUST_LOG`, then
//! [`DEFAULT_FILTER`].

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when neither environment variable is set.
pub const DEFAULT_FILTER: &str = "info,linkpick=debug,linkpick_core=debug";

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "LINKPICK_LOG";

/// Path of the log file, `~/.local/state/linkpick/linkpick.log` by default.
/// Creates the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkpick")?;
    xdg_dirs
        .place_state_file("linkpick.log")
        .context("create log directory")
}

/// Initialize structured logging to [`log_file_path`].
///
/// Returns Err if the file cannot be opened or a subscriber is already
/// installed, so the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;

    tracing::info!("linkpick logging to {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only.
pub fn init_logging_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install stderr subscriber: {e}"))
}

fn env_filter() -> EnvFilter {
    let linkpick_log = std::env::var(LOG_ENV).ok();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(linkpick_log.as_deref(), rust_log.as_deref());
    EnvFilter::try_new(directives).unwrap_or_else(|e| {
        eprintln!("linkpick: ignoring invalid log filter: {e}");
        EnvFilter::new(DEFAULT_FILTER)
    })
}

/// First non-blank of `LINKPICK_LOG`, `RUST_LOG`, else the default.
fn filter_directives<'a>(linkpick_log: Option<&'a str>, rust_log: Option<&'a str>) -> &'a str {
    [linkpick_log, rust_log]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|d| !d.is_empty())
        .unwrap_or(DEFAULT_FILTER)
}
