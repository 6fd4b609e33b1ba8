//! View router.
//!
//! Exactly one view is active at any time. Navigating fades the active view
//! out, swaps views once the fade-out timer fires, then fades the new view
//! in. A request that arrives mid-transition cancels the pending timer and
//! retargets instead of queueing.

use crate::domain::ViewId;

use super::timers::{TimerKind, TimerQueue, TimerToken};

/// Where a navigation request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOrigin {
    /// Tab keys, feature cards. Recorded in history.
    User,
    /// Back/forward. The history cursor already moved.
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteState {
    Idle {
        active: ViewId,
    },
    FadingOut {
        from: ViewId,
        to: ViewId,
        token: TimerToken,
        started_ms: u64,
    },
    FadingIn {
        active: ViewId,
        token: TimerToken,
        started_ms: u64,
    },
}

/// What a navigation request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Already showing or heading to the target.
    Unchanged,
    /// A fade-out toward the target began.
    Started,
    /// The view still on screen fades back in without a swap.
    ///
    /// `record` is set when a user request cancelled a back/forward move:
    /// the history cursor already left the view and must be pointed back.
    Reverted { record: bool },
}

/// A completed view swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    pub from: ViewId,
    pub to: ViewId,
    pub origin: NavOrigin,
}

#[derive(Debug, Clone)]
pub struct Router {
    state: RouteState,
    /// Origin of the request the pending swap serves.
    origin: NavOrigin,
    highlighted: ViewId,
    transition_ms: u64,
    fade_in_ms: u64,
}

impl Router {
    /// Router showing `initial` with no animation.
    pub fn new(initial: ViewId, transition_ms: u64, fade_in_ms: u64) -> Self {
        Self {
            state: RouteState::Idle { active: initial },
            origin: NavOrigin::User,
            highlighted: initial,
            transition_ms,
            fade_in_ms,
        }
    }

    pub fn state(&self) -> RouteState {
        self.state
    }

    /// The view currently on screen.
    pub fn active(&self) -> ViewId {
        match self.state {
            RouteState::Idle { active } | RouteState::FadingIn { active, .. } => active,
            RouteState::FadingOut { from, .. } => from,
        }
    }

    /// The view the router is settling on.
    pub fn destination(&self) -> ViewId {
        match self.state {
            RouteState::Idle { active } | RouteState::FadingIn { active, .. } => active,
            RouteState::FadingOut { to, .. } => to,
        }
    }

    /// The view marked in the navigation bar. Moves at the swap.
    pub fn highlighted(&self) -> ViewId {
        self.highlighted
    }

    pub fn is_transitioning(&self) -> bool {
        !matches!(self.state, RouteState::Idle { .. })
    }

    /// Visibility of the active view from 0.0 (hidden) to 1.0.
    pub fn opacity(&self, now_ms: u64) -> f32 {
        fn progress(now_ms: u64, started_ms: u64, length_ms: u64) -> f32 {
            if length_ms == 0 {
                return 1.0;
            }
            (now_ms.saturating_sub(started_ms) as f32 / length_ms as f32).min(1.0)
        }
        match self.state {
            RouteState::Idle { .. } => 1.0,
            RouteState::FadingOut { started_ms, .. } => {
                1.0 - progress(now_ms, started_ms, self.transition_ms)
            }
            RouteState::FadingIn { started_ms, .. } => {
                progress(now_ms, started_ms, self.fade_in_ms)
            }
        }
    }

    /// Start navigating to `target`.
    pub fn navigate_to(
        &mut self,
        target: ViewId,
        origin: NavOrigin,
        now_ms: u64,
        timers: &mut TimerQueue,
    ) -> NavOutcome {
        if target == self.destination() {
            return NavOutcome::Unchanged;
        }

        let from = match self.state {
            RouteState::Idle { active } => active,
            RouteState::FadingOut { from, token, .. } => {
                timers.cancel(token);
                if target == from {
                    // Heading back to the view still on screen: fade it in again.
                    let token = timers.schedule(TimerKind::FinishFadeIn, now_ms + self.fade_in_ms);
                    self.state = RouteState::FadingIn {
                        active: from,
                        token,
                        started_ms: now_ms,
                    };
                    let record = origin == NavOrigin::User && self.origin == NavOrigin::History;
                    self.origin = origin;
                    tracing::debug!(view = %from, record, "navigation reverted");
                    return NavOutcome::Reverted { record };
                }
                from
            }
            RouteState::FadingIn { active, token, .. } => {
                timers.cancel(token);
                active
            }
        };

        let token = timers.schedule(TimerKind::SwapView, now_ms + self.transition_ms);
        self.state = RouteState::FadingOut {
            from,
            to: target,
            token,
            started_ms: now_ms,
        };
        self.origin = origin;
        tracing::debug!(%from, to = %target, ?origin, "navigation started");
        NavOutcome::Started
    }

    /// Handle a fired router timer. Returns the swap when views changed.
    pub fn on_timer(
        &mut self,
        token: TimerToken,
        kind: TimerKind,
        now_ms: u64,
        timers: &mut TimerQueue,
    ) -> Option<Swap> {
        match (self.state, kind) {
            (
                RouteState::FadingOut {
                    from,
                    to,
                    token: pending,
                    ..
                },
                TimerKind::SwapView,
            ) if pending == token => {
                let fade = timers.schedule(TimerKind::FinishFadeIn, now_ms + self.fade_in_ms);
                self.state = RouteState::FadingIn {
                    active: to,
                    token: fade,
                    started_ms: now_ms,
                };
                self.highlighted = to;
                tracing::info!(%from, %to, "view changed");
                Some(Swap {
                    from,
                    to,
                    origin: self.origin,
                })
            }
            (
                RouteState::FadingIn {
                    active,
                    token: pending,
                    ..
                },
                TimerKind::FinishFadeIn,
            ) if pending == token => {
                self.state = RouteState::Idle { active };
                None
            }
            _ => None,
        }
    }
}
