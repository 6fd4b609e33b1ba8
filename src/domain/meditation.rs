//! Guided meditation tracks offered on the mental health view.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// One playable track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeditationTrack {
    pub id: String,
    pub title: String,
    pub duration: Duration,
    /// Audio file backing the track, if any.
    pub source: Option<PathBuf>,
}

impl MeditationTrack {
    pub fn new(id: impl Into<String>, title: impl Into<String>, duration: Duration) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Playback commands the player understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    Restart,
}

/// The built-in tracks, with sources resolved under `audio_dir`.
///
/// Files are looked up as `<audio_dir>/<id>.mp3`.
pub fn default_tracks(audio_dir: &Path) -> Vec<MeditationTrack> {
    [
        ("breathing", "Deep Breathing", 5 * 60),
        ("body-scan", "Body Scan Relaxation", 10 * 60),
        ("sleep", "Sleep Meditation", 15 * 60),
    ]
    .into_iter()
    .map(|(id, title, secs)| {
        MeditationTrack::new(id, title, Duration::from_secs(secs))
            .with_source(audio_dir.join(format!("{}.mp3", id)))
    })
    .collect()
}

/// `mm:ss` for a playback position or length.
pub fn format_clock(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tracks_resolve_sources() {
        let tracks = default_tracks(Path::new("/data/audio"));
        assert_eq!(tracks.len(), 3);
        assert_eq!(
            tracks[1].source.as_deref(),
            Some(Path::new("/data/audio/body-scan.mp3"))
        );
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::from_secs(0)), "00:00");
        assert_eq!(format_clock(Duration::from_secs(605)), "10:05");
    }
}
