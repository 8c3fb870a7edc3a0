//! Sound source management.
//!
//! A notification is either an audio file on disk or the built-in chime.
//! [`NotificationSounds`] decides which one plays when a phase ends.

use std::path::{Path, PathBuf};

use crate::types::TimerPhase;

/// File name of the sound played when a work phase ends.
pub const BREAK_STARTING_FILE: &str = "break_starting.mp3";

/// File name of the sound played when a break phase ends.
pub const BACK_TO_WORK_FILE: &str = "back_to_work.mp3";

/// Represents the source of a sound to be played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSource {
    /// An audio file on disk.
    File {
        /// The full path to the sound file.
        path: PathBuf,
    },
    /// A short synthesized tone.
    Chime,
}

impl SoundSource {
    /// Creates a new file sound source.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    /// Returns a short name for logging.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::File { path } => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Chime => "chime".to_string(),
        }
    }

    /// Returns the file path if this is a file source.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path } => Some(path),
            Self::Chime => None,
        }
    }
}

/// Directory holding the default notification sounds.
#[must_use]
pub fn default_assets_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("tdash").join("assets"))
}

/// The pair of sounds played at phase boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSounds {
    /// Played when a work phase ends
    pub break_starting: SoundSource,
    /// Played when a break phase ends
    pub back_to_work: SoundSource,
}

impl Default for NotificationSounds {
    fn default() -> Self {
        Self::from_paths(None, None)
    }
}

impl NotificationSounds {
    /// Builds the pair from optional overrides, falling back to the files in
    /// the default assets directory, then to the chime.
    #[must_use]
    pub fn from_paths(break_starting: Option<PathBuf>, back_to_work: Option<PathBuf>) -> Self {
        let assets = default_assets_dir();
        let resolve = |explicit: Option<PathBuf>, file_name: &str| {
            explicit
                .or_else(|| assets.as_ref().map(|dir| dir.join(file_name)))
                .map(SoundSource::file)
                .unwrap_or(SoundSource::Chime)
        };

        Self {
            break_starting: resolve(break_starting, BREAK_STARTING_FILE),
            back_to_work: resolve(back_to_work, BACK_TO_WORK_FILE),
        }
    }

    /// Returns the sound for the phase that just ended.
    #[must_use]
    pub fn for_ended(&self, ended: TimerPhase) -> &SoundSource {
        match ended {
            TimerPhase::Work => &self.break_starting,
            TimerPhase::Break => &self.back_to_work,
        }
    }
}
