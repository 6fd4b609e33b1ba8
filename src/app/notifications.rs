//! Transient feedback messages.
//!
//! At most one message is shown. A new message replaces the old one and
//! restarts the timers: visible for `notification_ms`, then fading for
//! `notification_fade_ms`, then gone.

use super::timers::{TimerKind, TimerQueue, TimerToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Error,
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
            Severity::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    Visible,
    Fading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub phase: NoticePhase,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    current: Option<Notice>,
    /// Pending fade or clear timer for `current`.
    token: Option<TimerToken>,
    visible_ms: u64,
    fade_ms: u64,
}

impl Notifications {
    pub fn new(visible_ms: u64, fade_ms: u64) -> Self {
        Self {
            current: None,
            token: None,
            visible_ms,
            fade_ms,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Show `message`, replacing whatever is on screen.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now_ms: u64,
        timers: &mut TimerQueue,
    ) {
        let message = message.into();
        timers.cancel_opt(self.token.take());
        tracing::debug!(severity = severity.as_str(), %message, "notification");

        self.current = Some(Notice {
            message,
            severity,
            phase: NoticePhase::Visible,
        });
        self.token = Some(timers.schedule(TimerKind::FadeNotification, now_ms + self.visible_ms));
    }

    /// Remove the message immediately.
    pub fn dismiss(&mut self, timers: &mut TimerQueue) -> bool {
        timers.cancel_opt(self.token.take());
        self.current.take().is_some()
    }

    /// Handle a fired notification timer. Returns `true` if the display
    /// changed.
    pub fn on_timer(
        &mut self,
        token: TimerToken,
        kind: TimerKind,
        now_ms: u64,
        timers: &mut TimerQueue,
    ) -> bool {
        if self.token != Some(token) {
            return false;
        }
        match kind {
            TimerKind::FadeNotification => {
                if let Some(notice) = self.current.as_mut() {
                    notice.phase = NoticePhase::Fading;
                }
                self.token = Some(timers.schedule(TimerKind::ClearNotification, now_ms + self.fade_ms));
                true
            }
            TimerKind::ClearNotification => {
                self.token = None;
                self.current = None;
                true
            }
            _ => false,
        }
    }
}
