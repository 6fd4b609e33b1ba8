//! Common test utilities for integration tests.
//!
//! [`TestHub`] wires an [`App`] to an [`EffectRunner`] over in-memory
//! collaborators and keeps a fake monotonic clock, so a test can drive the
//! hub the way the event loop does.
//!
//! # Example
//!
//! ```ignore
//! let mut hub = TestHub::new(ViewId::Home);
//! hub.send(AppEvent::Navigate(ViewId::Contact));
//! hub.advance(300);
//! assert_eq!(hub.app.active_view(), ViewId::Contact);
//! ```

pub mod mocks;

pub use mocks::*;

use chrono::NaiveDate;
use healthhub::adapters::{InMemoryStore, MockPlayer, StackHistory};
use healthhub::app::{App, AppEvent, Field};
use healthhub::config::HubConfig;
use healthhub::domain::{UserPreferences, ViewId};
use healthhub::runtime::EffectRunner;
use healthhub::storage::PreferenceStore;
use healthhub::traits::MediaPlayer;

pub type TestRunner = EffectRunner<InMemoryStore, StackHistory, MockPlayer>;

/// Fixed date so the daily tip is stable.
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// A hub over in-memory collaborators with a manual clock.
pub struct TestHub {
    pub app: App,
    pub runner: TestRunner,
    pub store: InMemoryStore,
    pub player: MockPlayer,
    pub now_ms: u64,
}

impl TestHub {
    /// Hub on `view` with an empty store.
    pub fn new(view: ViewId) -> Self {
        Self::with_store(view, InMemoryStore::new())
    }

    /// Hub on `view` that loads its preferences from `store`, as startup does.
    pub fn with_store(view: ViewId, store: InMemoryStore) -> Self {
        Self::with_config(view, store, HubConfig::default())
    }

    pub fn with_config(view: ViewId, store: InMemoryStore, config: HubConfig) -> Self {
        let prefs = PreferenceStore::new(store.clone()).load();
        let player = MockPlayer::with_default_tracks();
        let app = App::new(&config, prefs, view, player.tracks().to_vec(), test_date());
        let runner = EffectRunner::new(
            store.clone(),
            StackHistory::starting_at(view),
            player.clone(),
        );
        Self {
            app,
            runner,
            store,
            player,
            now_ms: 0,
        }
    }

    /// Dispatch `event` at the current time.
    pub fn send(&mut self, event: AppEvent) {
        self.runner.apply(&mut self.app, event, self.now_ms);
    }

    /// Move the clock forward and tick.
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
        self.send(AppEvent::Tick);
    }

    /// Move the clock to `ms` and tick.
    pub fn advance_to(&mut self, ms: u64) {
        assert!(ms >= self.now_ms, "clock cannot go backwards");
        self.now_ms = ms;
        self.send(AppEvent::Tick);
    }

    /// Navigate and let both fades finish.
    pub fn go_to(&mut self, view: ViewId) {
        self.send(AppEvent::Navigate(view));
        self.advance(300);
        self.advance(500);
        assert_eq!(self.app.active_view(), view);
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send(AppEvent::Char(c));
        }
    }

    /// Tab forward until `field` has focus.
    pub fn focus(&mut self, field: Field) {
        let fields = Field::for_view(self.app.active_view()).len();
        for _ in 0..fields {
            if self.app.focused_field() == field {
                return;
            }
            self.send(AppEvent::FocusNext);
        }
        assert_eq!(self.app.focused_field(), field, "field not on this view");
    }

    /// Focus `field` and type `text` into it.
    pub fn fill(&mut self, field: Field, text: &str) {
        self.focus(field);
        self.type_text(text);
    }

    /// Message of the current notification.
    pub fn notice(&self) -> Option<String> {
        self.app
            .notifications
            .current()
            .map(|notice| notice.message.clone())
    }

    /// Preferences as persisted, read back through a fresh store view.
    pub fn stored_prefs(&self) -> UserPreferences {
        PreferenceStore::new(self.store.clone()).load()
    }
}
