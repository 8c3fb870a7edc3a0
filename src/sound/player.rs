//! Sound player implementation using rodio.
//!
//! Playback here is blocking: it returns once the clip has finished. The
//! output stream is opened per call on the calling thread, so a player is
//! meant to be driven from a detached worker (see
//! [`SoundNotifier`](super::SoundNotifier)).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, Sink};
use tracing::{debug, warn};

use super::error::SoundError;
use super::source::SoundSource;

/// Chime frequency in Hz.
const CHIME_FREQUENCY: f32 = 880.0;
/// Chime length.
const CHIME_DURATION: Duration = Duration::from_millis(400);
/// Chime volume relative to full scale.
const CHIME_VOLUME: f32 = 0.2;

/// A sound player that uses rodio for audio playback.
#[derive(Debug, Default, Clone, Copy)]
pub struct RodioSoundPlayer;

impl RodioSoundPlayer {
    /// Creates a new sound player.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Plays a sound and blocks until it has finished.
    ///
    /// A file that is missing or cannot be decoded falls back to the chime.
    ///
    /// # Errors
    ///
    /// Returns an error if no audio device is available or the output sink
    /// cannot be created.
    pub fn play(&self, source: &SoundSource) -> Result<(), SoundError> {
        let (_stream, handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| SoundError::StreamError(e.to_string()))?;

        match source {
            SoundSource::File { path } => match decode_file(path) {
                Ok(decoder) => {
                    debug!(sound = %source.name(), "Playing sound file");
                    sink.append(decoder);
                }
                Err(e) if e.should_fallback_to_chime() => {
                    warn!(sound = %source.name(), error = %e, "Falling back to chime");
                    sink.append(chime());
                }
                Err(e) => return Err(e),
            },
            SoundSource::Chime => {
                debug!("Playing chime");
                sink.append(chime());
            }
        }

        sink.sleep_until_end();
        debug!(sound = %source.name(), "Sound playback finished");
        Ok(())
    }
}

/// Opens and decodes an audio file.
fn decode_file(path: &Path) -> Result<Decoder<BufReader<File>>, SoundError> {
    let file = File::open(path)
        .map_err(|e| SoundError::FileNotFound(format!("{}: {}", path.display(), e)))?;
    Decoder::new(BufReader::new(file)).map_err(|e| SoundError::DecodeError(e.to_string()))
}

/// Short synthesized tone used when no sound file is usable.
fn chime() -> impl Source<Item = f32> + Send + 'static {
    SineWave::new(CHIME_FREQUENCY)
        .take_duration(CHIME_DURATION)
        .amplify(CHIME_VOLUME)
}
