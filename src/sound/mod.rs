//! Sound playback for phase notifications.
//!
//! This module provides audio notification capabilities, including:
//!
//! - File playback with a synthesized fallback chime
//! - Fire-and-forget playback on a detached worker thread
//! - Graceful degradation when audio is unavailable
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   phase_ended   ┌──────────────────┐
//! │   TimerEngine    │────────────────▶│  SoundNotifier   │
//! └──────────────────┘                 └────────┬─────────┘
//!                                               │ spawn (detached)
//!                                               ▼
//!                                      ┌──────────────────┐
//!                                      │   SoundPlayer    │ ← blocks for the clip
//!                                      └──────────────────┘
//! ```

mod error;
mod player;
mod source;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::timer::{PhaseNotifier, SilentNotifier};
use crate::types::TimerPhase;

pub use error::SoundError;
pub use player::RodioSoundPlayer;
pub use source::{
    default_assets_dir, NotificationSounds, SoundSource, BACK_TO_WORK_FILE, BREAK_STARTING_FILE,
};

/// Trait for sound playback implementations.
///
/// `play` may block for the length of the clip; callers on the UI thread
/// must go through [`play_detached`].
pub trait SoundPlayer: Send + Sync {
    /// Plays a sound from the given source.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, source: &SoundSource) -> Result<(), SoundError>;
}

impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, source)
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: Mutex<Vec<SoundSource>>,
    should_fail: AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<SoundSource> {
        self.play_calls
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        if let Ok(mut calls) = self.play_calls.lock() {
            calls.push(source.clone());
        }
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        Ok(())
    }
}

/// Plays a sound on a new detached thread.
///
/// The caller never learns the outcome: errors are logged by the worker and
/// the thread handle is dropped.
pub fn play_detached(player: Arc<dyn SoundPlayer>, source: SoundSource) {
    let spawned = std::thread::Builder::new()
        .name("tdash-sound".to_string())
        .spawn(move || {
            if let Err(e) = player.play(&source) {
                warn!(sound = %source.name(), error = %e, "Notification sound failed");
            }
        });

    if let Err(e) = spawned {
        warn!(error = %e, "Could not spawn sound worker");
    }
}

/// Plays the matching notification sound whenever a phase ends.
pub struct SoundNotifier {
    player: Arc<dyn SoundPlayer>,
    sounds: NotificationSounds,
}

impl SoundNotifier {
    #[must_use]
    pub fn new(player: Arc<dyn SoundPlayer>, sounds: NotificationSounds) -> Self {
        Self { player, sounds }
    }
}

impl PhaseNotifier for SoundNotifier {
    fn phase_ended(&self, ended: TimerPhase) {
        let source = self.sounds.for_ended(ended).clone();
        debug!(ended = ended.as_str(), sound = %source.name(), "Requesting notification sound");
        play_detached(Arc::clone(&self.player), source);
    }
}

/// Builds the phase notifier for the sound settings.
///
/// With sounds off no player is created at all and phase ends are dropped
/// by a [`SilentNotifier`].
#[must_use]
pub fn phase_notifier(enabled: bool, sounds: NotificationSounds) -> Arc<dyn PhaseNotifier> {
    if enabled {
        Arc::new(SoundNotifier::new(Arc::new(RodioSoundPlayer::new()), sounds))
    } else {
        debug!("Notification sounds disabled");
        Arc::new(SilentNotifier)
    }
}

impl std::fmt::Debug for SoundNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundNotifier")
            .field("sounds", &self.sounds)
            .finish_non_exhaustive()
    }
}
