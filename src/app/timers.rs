//! Scheduled callbacks with cancellation tokens.
//!
//! Everything time-based in the app (view fades, notification fades, the
//! contact form send delay) is a [`TimerKind`] scheduled here against a
//! millisecond clock. The event loop's tick drains what is due.
//!
//! Owners keep the [`TimerToken`] they were given and compare it when the
//! timer fires, so a callback that was superseded is ignored even if it was
//! never explicitly cancelled.

/// Identifies one scheduled callback.
pub type TimerToken = u64;

/// What to do when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Fade-out finished, swap the active view.
    SwapView,
    /// Fade-in finished, router returns to idle.
    FinishFadeIn,
    /// Notification display time is over, start fading.
    FadeNotification,
    /// Notification fade is over, remove it.
    ClearNotification,
    /// Simulated contact form send completed.
    FinishContactSend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled {
    due_ms: u64,
    token: TimerToken,
    kind: TimerKind,
}

/// A timer that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub token: TimerToken,
    pub kind: TimerKind,
    pub due_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    next_token: TimerToken,
    pending: Vec<Scheduled>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire at `due_ms`.
    pub fn schedule(&mut self, kind: TimerKind, due_ms: u64) -> TimerToken {
        self.next_token += 1;
        let token = self.next_token;
        self.pending.push(Scheduled {
            due_ms,
            token,
            kind,
        });
        tracing::trace!(token, ?kind, due_ms, "timer scheduled");
        token
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.token != token);
        before != self.pending.len()
    }

    /// Cancel `token` if present. Convenience for `Option` slots.
    pub fn cancel_opt(&mut self, token: Option<TimerToken>) {
        if let Some(token) = token {
            self.cancel(token);
        }
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|t| t.token == token)
    }

    /// Remove and return every timer due at or before `now_ms`, earliest
    /// first. Timers due at the same instant fire in scheduling order.
    pub fn pop_due(&mut self, now_ms: u64) -> Vec<Fired> {
        let mut due: Vec<Scheduled> = Vec::new();
        self.pending.retain(|t| {
            if t.due_ms <= now_ms {
                due.push(*t);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|t| (t.due_ms, t.token));
        due.into_iter()
            .map(|t| Fired {
                token: t.token,
                kind: t.kind,
                due_ms: t.due_ms,
            })
            .collect()
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|t| t.due_ms).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
