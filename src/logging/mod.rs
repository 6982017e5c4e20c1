//! Diagnostic logging
//!
//! Everything goes through `tracing`. Logs are written to stderr by default so
//! that `-o -` keeps stdout clean for the font, or to a dated file when a log
//! directory is given.

use anyhow::Context as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Name of the log file for today inside `dir`
pub fn current_log_file(dir: &Path) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y-%m-%d");
    dir.join(format!("slcgen-{}.log", timestamp))
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `level` when it is set. The returned guard flushes
/// the background writer on drop and must be kept alive for the whole run.
pub fn init(level: &str, log_dir: Option<&Path>) -> anyhow::Result<WorkerGuard> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'"))?,
    };

    let (writer, guard) = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
            let path = current_log_file(dir);
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_appender::non_blocking(file)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log_dir.is_none())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_is_dated() {
        let path = current_log_file(Path::new("/tmp/logs"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("slcgen-20"));
        assert!(name.ends_with(".log"));
        assert_eq!(name.len(), "slcgen-YYYY-MM-DD.log".len());
    }
}
