//! Scripted media player for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::{MeditationTrack, PlaybackCommand};
use crate::error::PlaybackError;
use crate::traits::{MediaPlayer, PlayerStatus};

/// Media player that records every command and never touches a device.
///
/// Clones share the command log and failure flag.
#[derive(Debug, Clone)]
pub struct MockPlayer {
    tracks: Vec<MeditationTrack>,
    status: PlayerStatus,
    /// Commands received, in order
    commands: Arc<Mutex<Vec<(PlaybackCommand, String)>>>,
    /// Whether play and restart should fail
    play_should_fail: Arc<Mutex<bool>>,
}

impl MockPlayer {
    pub fn new(tracks: Vec<MeditationTrack>) -> Self {
        Self {
            tracks,
            status: PlayerStatus::Stopped,
            commands: Arc::new(Mutex::new(Vec::new())),
            play_should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// A player with the three built-in track ids and no sources.
    pub fn with_default_tracks() -> Self {
        Self::new(vec![
            MeditationTrack::new("breathing", "Deep Breathing", Duration::from_secs(300)),
            MeditationTrack::new("body-scan", "Body Scan Relaxation", Duration::from_secs(600)),
            MeditationTrack::new("sleep", "Sleep Meditation", Duration::from_secs(900)),
        ])
    }

    /// Configure whether play and restart should fail.
    pub fn set_play_should_fail(&self, should_fail: bool) {
        *self.play_should_fail.lock().unwrap() = should_fail;
    }

    /// Commands received so far.
    pub fn commands(&self) -> Vec<(PlaybackCommand, String)> {
        self.commands.lock().unwrap().clone()
    }

    fn record(&self, command: PlaybackCommand, track_id: &str) {
        self.commands
            .lock()
            .unwrap()
            .push((command, track_id.to_string()));
    }

    fn check(&self, track_id: &str) -> Result<(), PlaybackError> {
        if *self.play_should_fail.lock().unwrap() {
            return Err(PlaybackError::Device("mock playback failure".to_string()));
        }
        if !self.tracks.iter().any(|t| t.id == track_id) {
            return Err(PlaybackError::UnknownTrack(track_id.to_string()));
        }
        Ok(())
    }
}

impl MediaPlayer for MockPlayer {
    fn tracks(&self) -> &[MeditationTrack] {
        &self.tracks
    }

    fn play(&mut self, track_id: &str) -> Result<(), PlaybackError> {
        self.record(PlaybackCommand::Play, track_id);
        self.check(track_id)?;
        let position = match &self.status {
            PlayerStatus::Paused { track, position } if track == track_id => *position,
            _ => Duration::ZERO,
        };
        self.status = PlayerStatus::Playing {
            track: track_id.to_string(),
            position,
        };
        Ok(())
    }

    fn pause(&mut self) {
        if let PlayerStatus::Playing { track, position } = &self.status {
            self.record(PlaybackCommand::Pause, track);
            self.status = PlayerStatus::Paused {
                track: track.clone(),
                position: *position,
            };
        }
    }

    fn restart(&mut self, track_id: &str) -> Result<(), PlaybackError> {
        self.record(PlaybackCommand::Restart, track_id);
        self.check(track_id)?;
        self.status = PlayerStatus::Playing {
            track: track_id.to_string(),
            position: Duration::ZERO,
        };
        Ok(())
    }

    fn status(&self) -> PlayerStatus {
        self.status.clone()
    }
}
