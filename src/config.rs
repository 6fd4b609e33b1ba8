//! Runtime configuration.
//!
//! Timing constants for transitions and notifications, the data directory
//! and the startup view. Built from defaults, then the environment, then
//! command-line flags.

use std::path::PathBuf;

use crate::domain::ViewId;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "HEALTHHUB_DATA_DIR";
/// Environment variable naming the startup view.
pub const VIEW_ENV: &str = "HEALTHHUB_VIEW";
/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "HEALTHHUB_LOG";

/// Default data directory name under the home directory.
const DATA_DIR_NAME: &str = ".healthhub";

/// Hub configuration.
///
/// # Example
///
/// ```ignore
/// use healthhub::config::HubConfig;
///
/// let config = HubConfig::default()
///     .with_data_dir("/tmp/hub")
///     .with_notification_ms(1000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HubConfig {
    /// Fade-out before a view swap (default: 300)
    pub transition_ms: u64,
    /// Fade-in after a view swap (default: 500)
    pub fade_in_ms: u64,
    /// How long a notification stays before fading (default: 5000)
    pub notification_ms: u64,
    /// Notification fade before removal (default: 500)
    pub notification_fade_ms: u64,
    /// Simulated contact form send delay (default: 1500)
    pub contact_delay_ms: u64,
    /// Event loop tick (default: 50)
    pub tick_ms: u64,
    /// Where blobs, logs and audio live
    pub data_dir: PathBuf,
    /// View requested at startup, if any
    pub initial_view: Option<ViewId>,
    /// Log filter directive (default: "info")
    pub log_filter: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            transition_ms: 300,
            fade_in_ms: 500,
            notification_ms: 5000,
            notification_fade_ms: 500,
            contact_delay_ms: 1500,
            tick_ms: 50,
            data_dir: default_data_dir(),
            initial_view: None,
            log_filter: "info".to_string(),
        }
    }
}

impl HubConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transition_ms(mut self, ms: u64) -> Self {
        self.transition_ms = ms;
        self
    }

    pub fn with_fade_in_ms(mut self, ms: u64) -> Self {
        self.fade_in_ms = ms;
        self
    }

    pub fn with_notification_ms(mut self, ms: u64) -> Self {
        self.notification_ms = ms;
        self
    }

    pub fn with_notification_fade_ms(mut self, ms: u64) -> Self {
        self.notification_fade_ms = ms;
        self
    }

    pub fn with_contact_delay_ms(mut self, ms: u64) -> Self {
        self.contact_delay_ms = ms;
        self
    }

    /// Set the tick interval. Zero is bumped to 1ms.
    pub fn with_tick_ms(mut self, ms: u64) -> Self {
        self.tick_ms = ms.max(1);
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_initial_view(mut self, view: ViewId) -> Self {
        self.initial_view = Some(view);
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Directory searched for meditation audio.
    pub fn audio_dir(&self) -> PathBuf {
        self.data_dir.join("audio")
    }

    /// Path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("healthhub.log")
    }

    /// Create config from `HEALTHHUB_DATA_DIR`, `HEALTHHUB_VIEW` and
    /// `HEALTHHUB_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`HubConfig::from_env`] with a custom variable source.
    ///
    /// An unrecognised view name is ignored; the caller warns about it once
    /// logging is up.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        config.initial_view = lookup(VIEW_ENV).and_then(|name| ViewId::from_fragment(&name));
        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }
}

/// `~/.healthhub`, or `./.healthhub` when there is no home directory.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}
