//! Log file setup.
//!
//! The TUI owns the terminal, so logs go to `<data_dir>/healthhub.log`.
//! The filter comes from [`HubConfig::log_filter`] (`HEALTHHUB_LOG`).

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::HubConfig;

/// Build the filter, falling back to `info` on a bad directive.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}': {}, using 'info'", directive, e);
        EnvFilter::new("info")
    })
}

/// Install the global subscriber writing to the configured log file.
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_logging(config: &HubConfig) -> Result<()> {
    init_file_logging(&config.log_path(), &config.log_filter)
}

fn init_file_logging(path: &Path, directive: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to open log file {:?}", path))?;

    let installed = tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();

    if installed.is_ok() {
        tracing::info!(path = ?path, version = env!("CARGO_PKG_VERSION"), "logging started");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_filter_accepts_directives() {
        let filter = build_filter("healthhub=debug,warn");
        assert!(filter.to_string().contains("healthhub=debug"));
    }

    #[test]
    fn test_build_filter_falls_back() {
        let filter = build_filter("healthhub=[");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = HubConfig::default().with_data_dir(temp_dir.path().join("data"));
        init_logging(&config).unwrap();
        assert!(config.log_path().exists());
        // Second init is a no-op
        init_logging(&config).unwrap();
    }
}
