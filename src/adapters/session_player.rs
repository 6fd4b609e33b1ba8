//! Timed meditation session player.
//!
//! The terminal has no audio output of its own, so this player runs the
//! session clock for a track whose source file exists on disk. Position
//! advances with wall time while playing and freezes while paused. A
//! session that reaches the end of its track stops on its own.

use std::time::{Duration, Instant};

use crate::domain::MeditationTrack;
use crate::error::PlaybackError;
use crate::traits::{MediaPlayer, PlayerStatus};

#[derive(Debug, Clone)]
struct Session {
    track: String,
    length: Duration,
    /// Position accumulated before the current play run.
    elapsed: Duration,
    /// Start of the current play run; `None` while paused.
    resumed_at: Option<Instant>,
}

impl Session {
    fn position(&self, now: Instant) -> Duration {
        let running = self
            .resumed_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        (self.elapsed + running).min(self.length)
    }

    fn finished(&self, now: Instant) -> bool {
        self.position(now) >= self.length
    }
}

#[derive(Debug, Clone)]
pub struct SessionPlayer {
    tracks: Vec<MeditationTrack>,
    session: Option<Session>,
}

impl SessionPlayer {
    pub fn new(tracks: Vec<MeditationTrack>) -> Self {
        Self {
            tracks,
            session: None,
        }
    }

    fn find(&self, track_id: &str) -> Result<&MeditationTrack, PlaybackError> {
        let track = self
            .tracks
            .iter()
            .find(|t| t.id == track_id)
            .ok_or_else(|| PlaybackError::UnknownTrack(track_id.to_string()))?;

        match &track.source {
            Some(path) if path.is_file() => Ok(track),
            Some(path) => Err(PlaybackError::SourceMissing {
                track: track.id.clone(),
                path: path.clone(),
            }),
            None => Err(PlaybackError::Device(format!(
                "track '{}' has no audio source",
                track.id
            ))),
        }
    }

    fn start(&mut self, track_id: &str) -> Result<(), PlaybackError> {
        let length = self.find(track_id)?.duration;
        self.session = Some(Session {
            track: track_id.to_string(),
            length,
            elapsed: Duration::ZERO,
            resumed_at: Some(Instant::now()),
        });
        tracing::info!(track = track_id, "meditation session started");
        Ok(())
    }
}

impl MediaPlayer for SessionPlayer {
    fn tracks(&self) -> &[MeditationTrack] {
        &self.tracks
    }

    fn play(&mut self, track_id: &str) -> Result<(), PlaybackError> {
        let now = Instant::now();
        let resumable = self
            .session
            .as_ref()
            .is_some_and(|s| s.track == track_id && !s.finished(now));
        if !resumable {
            return self.start(track_id);
        }
        if let Some(session) = self.session.as_mut() {
            if session.resumed_at.is_none() {
                session.resumed_at = Some(now);
                tracing::debug!(track = track_id, "meditation session resumed");
            }
        }
        Ok(())
    }

    fn pause(&mut self) {
        let now = Instant::now();
        if let Some(session) = self.session.as_mut() {
            if session.resumed_at.is_some() {
                session.elapsed = session.position(now);
                session.resumed_at = None;
                tracing::debug!(track = %session.track, "meditation session paused");
            }
        }
    }

    fn restart(&mut self, track_id: &str) -> Result<(), PlaybackError> {
        self.start(track_id)
    }

    fn status(&self) -> PlayerStatus {
        let now = Instant::now();
        match &self.session {
            None => PlayerStatus::Stopped,
            Some(session) if session.finished(now) => PlayerStatus::Stopped,
            Some(session) => {
                let position = session.position(now);
                let track = session.track.clone();
                if session.resumed_at.is_some() {
                    PlayerStatus::Playing { track, position }
                } else {
                    PlayerStatus::Paused { track, position }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meditation::default_tracks;
    use std::fs;
    use tempfile::TempDir;

    fn player_with_audio() -> (TempDir, SessionPlayer) {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("breathing.mp3"), b"ID3").unwrap();
        let player = SessionPlayer::new(default_tracks(temp_dir.path()));
        (temp_dir, player)
    }

    #[test]
    fn test_play_and_pause() {
        let (_dir, mut player) = player_with_audio();
        assert_eq!(player.status(), PlayerStatus::Stopped);

        player.play("breathing").unwrap();
        assert!(player.status().is_playing());
        assert_eq!(player.status().track(), Some("breathing"));

        player.pause();
        assert!(matches!(player.status(), PlayerStatus::Paused { .. }));

        player.play("breathing").unwrap();
        assert!(player.status().is_playing());
    }

    #[test]
    fn test_paused_position_is_frozen() {
        let (_dir, mut player) = player_with_audio();
        player.play("breathing").unwrap();
        player.pause();
        let first = player.status();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(player.status(), first);
    }

    #[test]
    fn test_missing_source() {
        let (_dir, mut player) = player_with_audio();
        let err = player.play("sleep").unwrap_err();
        assert!(matches!(err, PlaybackError::SourceMissing { ref track, .. } if track == "sleep"));
        assert_eq!(player.status(), PlayerStatus::Stopped);
    }

    #[test]
    fn test_unknown_track() {
        let (_dir, mut player) = player_with_audio();
        assert_eq!(
            player.restart("rain"),
            Err(PlaybackError::UnknownTrack("rain".to_string()))
        );
    }

    #[test]
    fn test_pause_when_stopped_is_noop() {
        let (_dir, mut player) = player_with_audio();
        player.pause();
        assert_eq!(player.status(), PlayerStatus::Stopped);
    }
}
