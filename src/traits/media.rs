//! Media player trait abstraction.

use std::time::Duration;

use crate::domain::MeditationTrack;
use crate::error::PlaybackError;

/// Playback state reported to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerStatus {
    Stopped,
    Playing { track: String, position: Duration },
    Paused { track: String, position: Duration },
}

impl PlayerStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, PlayerStatus::Playing { .. })
    }

    /// Id of the loaded track, if any.
    pub fn track(&self) -> Option<&str> {
        match self {
            PlayerStatus::Stopped => None,
            PlayerStatus::Playing { track, .. } | PlayerStatus::Paused { track, .. } => Some(track),
        }
    }
}

/// Audio output for the meditation tracks.
pub trait MediaPlayer {
    /// The tracks this player can play.
    fn tracks(&self) -> &[MeditationTrack];

    /// Start or resume `track_id`. Switching tracks starts from the beginning.
    fn play(&mut self, track_id: &str) -> Result<(), PlaybackError>;

    /// Pause if playing. Pausing a stopped player is a no-op.
    fn pause(&mut self);

    /// Rewind `track_id` to the start and play it.
    fn restart(&mut self, track_id: &str) -> Result<(), PlaybackError>;

    /// Current state.
    fn status(&self) -> PlayerStatus;
}
