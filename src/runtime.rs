//! Effect execution.
//!
//! [`EffectRunner`] owns the collaborators the app is not allowed to touch
//! directly: storage, navigation history and the media player. It executes
//! the [`Effect`]s returned by [`App::dispatch`] and turns their outcomes
//! into follow-up [`AppEvent`]s.

use crate::app::{App, AppEvent, Effect};
use crate::domain::PlaybackCommand;
use crate::error::{HubError, HubResult};
use crate::storage::{PreferenceStore, SubmissionLog};
use crate::traits::{KeyValueStore, MediaPlayer, NavigationHistory, PlayerStatus};

/// Upper bound on follow-up rounds for one input event.
const MAX_FOLLOW_UPS: usize = 8;

pub struct EffectRunner<S, H, P> {
    preferences: PreferenceStore<S>,
    submissions: SubmissionLog<S>,
    history: H,
    player: P,
}

impl<S, H, P> EffectRunner<S, H, P>
where
    S: KeyValueStore + Clone,
    H: NavigationHistory,
    P: MediaPlayer,
{
    /// `store` backs both the preference record and the submission log.
    pub fn new(store: S, history: H, player: P) -> Self {
        Self {
            preferences: PreferenceStore::new(store.clone()),
            submissions: SubmissionLog::new(store),
            history,
            player,
        }
    }

    pub fn preferences(&self) -> &PreferenceStore<S> {
        &self.preferences
    }

    pub fn submissions(&self) -> &SubmissionLog<S> {
        &self.submissions
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_status(&self) -> PlayerStatus {
        self.player.status()
    }

    /// Execute `effects`, returning events to feed back into the app.
    ///
    /// Every failure is logged; only those whose category reaches the user
    /// come back, as [`AppEvent::EffectFailed`].
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<AppEvent> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::SavePreferences(prefs) => {
                    let result = self.preferences.save(&prefs).map_err(HubError::from);
                    follow_ups.extend(settle("save_preferences", result));
                }
                Effect::AppendSubmission(submission) => {
                    let result = self.submissions.append(submission).map_err(HubError::from);
                    follow_ups.extend(settle("append_submission", result));
                }
                Effect::PushHistory(view) => self.history.push(view),
                Effect::HistoryBack => {
                    if let Some(view) = self.history.back() {
                        follow_ups.push(AppEvent::HistoryPop(view));
                    }
                }
                Effect::HistoryForward => {
                    if let Some(view) = self.history.forward() {
                        follow_ups.push(AppEvent::HistoryPop(view));
                    }
                }
                Effect::Playback { command, track } => {
                    let result = self.playback(command, &track);
                    follow_ups.extend(settle("playback", result));
                }
            }
        }
        follow_ups
    }

    fn playback(&mut self, command: PlaybackCommand, track: &str) -> HubResult<()> {
        match command {
            PlaybackCommand::Play => self.player.play(track)?,
            PlaybackCommand::Pause => self.player.pause(),
            PlaybackCommand::Restart => self.player.restart(track)?,
        }
        Ok(())
    }

    /// Dispatch `event` and run everything it leads to.
    pub fn apply(&mut self, app: &mut App, event: AppEvent, now_ms: u64) {
        let mut pending = vec![event];
        for _ in 0..MAX_FOLLOW_UPS {
            if pending.is_empty() {
                break;
            }
            let mut next = Vec::new();
            for event in pending {
                let effects = app.dispatch(event, now_ms);
                next.extend(self.run(effects));
            }
            pending = next;
        }
        if !pending.is_empty() {
            tracing::warn!(dropped = pending.len(), "follow-up events dropped");
        }
        app.set_player_status(self.player.status());
    }
}

/// Log a failed effect and turn it into an event if the user should see it.
fn settle(operation: &'static str, result: HubResult<()>) -> Option<AppEvent> {
    let error = result.err()?;
    tracing::warn!(operation, category = %error.category(), %error, "effect failed");
    error
        .is_user_visible()
        .then(|| AppEvent::EffectFailed(error.user_message()))
}
