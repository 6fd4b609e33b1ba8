//! Trait abstractions for the hub's external collaborators.
//!
//! The page logic never touches the disk, the terminal or an audio device
//! directly; it talks to these traits so tests can substitute in-memory
//! versions.
//!
//! # Traits
//!
//! - [`KeyValueStore`] - Persistent string key-value storage
//! - [`NavigationHistory`] - Back/forward history of visited views
//! - [`MediaPlayer`] - Meditation audio playback

pub mod history;
pub mod media;
pub mod storage;

pub use history::NavigationHistory;
pub use media::{MediaPlayer, PlayerStatus};
pub use storage::KeyValueStore;
