//! Logging Infrastructure
//!
//! Structured logging for development and production:
//! - Pretty console output in development, JSON in production
//! - Optional daily rotating file logs under `<log_dir>/app` (deleted after 14 days)

use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Days an application log file is kept
const LOG_RETENTION_DAYS: i64 = 14;

/// Delete `app-YYYY-MM-DD.log` files older than the retention window
///
/// Returns how many files were removed. Unrelated files are left alone.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    use chrono::{Local, NaiveDate};

    let cutoff = Local::now().date_naive() - chrono::Duration::days(LOG_RETENTION_DAYS);

    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if let Some(date_part) = name
            .strip_prefix("app.")
            .or_else(|| name.strip_prefix("app-"))
            .map(|d| d.strip_suffix(".log").unwrap_or(d))
            && let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(removed)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug"); `RUST_LOG` wins when set
/// * `json_format` - JSON lines (production) or pretty output (development)
/// * `log_dir` - Optional directory for daily rotating file logs
///
/// Must be called from inside a tokio runtime when `log_dir` is set,
/// the retention cleanup runs as a background task.
///
/// # Examples
/// ```no_run
/// use timeline_server::init_logger_with_file;
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// init_logger_with_file("info", true, Some("./work_dir/logs"))?;
/// # Ok(())
/// # }
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let Some(dir) = log_dir else {
        subscriber.with(console_layer).try_init()?;
        return Ok(());
    };

    let log_dir = Path::new(dir);
    let app_log_dir = log_dir.join("app");
    fs::create_dir_all(&app_log_dir)?;

    let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
    let file_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::sync::Mutex::new(app_log))
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(app_log))
            .boxed()
    };

    subscriber.with(console_layer).with(file_layer).try_init()?;

    if let Err(e) = cleanup_old_logs(log_dir) {
        tracing::warn!(error = %e, "Initial log cleanup failed");
    }
    tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));

    Ok(())
}

/// Runs every hour
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        sleep(Duration::from_secs(3600)).await;

        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_cleanup_removes_only_expired_app_logs() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("app");
        fs::create_dir_all(&app).unwrap();

        let today = Local::now().date_naive();
        let old = today - chrono::Duration::days(30);
        let fresh_name = format!("app.{}", today.format("%Y-%m-%d"));
        let old_name = format!("app.{}", old.format("%Y-%m-%d"));
        let old_dash_name = format!("app-{}.log", old.format("%Y-%m-%d"));

        for name in [&fresh_name, &old_name, &old_dash_name, &"notes.txt".to_string()] {
            fs::write(app.join(name), "x").unwrap();
        }

        let removed = cleanup_old_logs(dir.path()).unwrap();
        assert_eq!(removed, 2);
        assert!(app.join(&fresh_name).exists());
        assert!(app.join("notes.txt").exists());
        assert!(!app.join(&old_name).exists());
        assert!(!app.join(&old_dash_name).exists());
    }

    #[test]
    fn test_cleanup_missing_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(cleanup_old_logs(dir.path()).unwrap(), 0);
    }
}
