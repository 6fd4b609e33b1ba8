//! Application state and logic for the TUI.
//!
//! The [`App`] struct holds everything shown on screen and is driven only
//! through [`App::dispatch`]. It never touches the disk, the history stack
//! or the audio player; it returns [`Effect`]s for the runtime to execute.
//!
//! - [`Router`] - Which view is active, and view transitions
//! - [`Notifications`] - The transient feedback message
//! - [`TimerQueue`] - Scheduled callbacks for both of the above
//! - [`forms`] - Per-view form state

mod dispatch;
pub mod forms;
pub mod notifications;
pub mod router;
pub mod timers;
mod types;

pub use forms::{ActivityForm, AssessmentForm, ContactState, ContactStatus, PlayerPanel, WaterForm};
pub use notifications::{Notice, NoticePhase, Notifications, Severity};
pub use router::{NavOrigin, NavOutcome, RouteState, Router, Swap};
pub use timers::{Fired, TimerKind, TimerQueue, TimerToken};
pub use types::{AppEvent, Effect, Field, FieldKind};

use chrono::{Datelike, NaiveDate};

use crate::config::HubConfig;
use crate::domain::tips::tip_for;
use crate::domain::{MeditationTrack, UserPreferences, ViewId};
use crate::traits::PlayerStatus;

/// Main application state
pub struct App {
    /// Preference record loaded at startup, mutated in memory
    pub prefs: UserPreferences,
    pub router: Router,
    pub notifications: Notifications,
    pub timers: TimerQueue,
    /// Focused field index, per view
    focus: [usize; 5],
    /// Vertical scroll of the active view
    pub scroll: u16,
    pub water: WaterForm,
    pub activity: ActivityForm,
    pub assessment: AssessmentForm,
    pub contact: ContactState,
    pub player: PlayerPanel,
    /// Meditation tracks shown on the mental view
    pub tracks: Vec<MeditationTrack>,
    pub daily_tip: &'static str,
    /// Calendar year for the footer
    pub year: i32,
    contact_delay_ms: u64,
    /// Flag indicating the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Flag to track if the app should quit
    pub should_quit: bool,
}

impl App {
    /// Build the app showing `initial`.
    ///
    /// A stored weight prefills the water calculator.
    pub fn new(
        config: &HubConfig,
        prefs: UserPreferences,
        initial: ViewId,
        tracks: Vec<MeditationTrack>,
        today: NaiveDate,
    ) -> Self {
        let water = WaterForm {
            weight: prefs.weight.map(|w| w.to_string()).unwrap_or_default(),
            result: None,
        };

        Self {
            prefs,
            router: Router::new(initial, config.transition_ms, config.fade_in_ms),
            notifications: Notifications::new(config.notification_ms, config.notification_fade_ms),
            timers: TimerQueue::new(),
            focus: [0; 5],
            scroll: 0,
            water,
            activity: ActivityForm::default(),
            assessment: AssessmentForm::default(),
            contact: ContactState::default(),
            player: PlayerPanel::default(),
            tracks,
            daily_tip: tip_for(today),
            year: today.year(),
            contact_delay_ms: config.contact_delay_ms,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// The view on screen.
    pub fn active_view(&self) -> ViewId {
        self.router.active()
    }

    /// The focused field of the active view.
    pub fn focused_field(&self) -> Field {
        let view = self.active_view();
        let fields = Field::for_view(view);
        fields[self.focus[view.index()].min(fields.len() - 1)]
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused_field() == field
    }

    pub fn selected_track(&self) -> Option<&MeditationTrack> {
        self.tracks.get(self.player.selected)
    }

    /// Record the player state reported by the runtime.
    pub fn set_player_status(&mut self, status: PlayerStatus) {
        if self.player.status != status {
            self.player.status = status;
            self.needs_redraw = true;
        }
    }

    /// Mark that the UI needs to be redrawn
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }
}
