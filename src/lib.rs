//! tdash library
//!
//! Core of the tdash terminal dashboard:
//! - Timer engine with Work ⇄ Break phases and a configuration popup
//! - Pausable one-second tick scheduler
//! - Clock panel text for a configurable list of time zones
//! - Notification sounds played fire-and-forget when a phase ends
//! - Ratatui views, input mapping and the event loop
//! - JSON configuration and CLI parsing

pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod scheduler;
pub mod sound;
pub mod timer;
pub mod types;

pub use app::{App, AppCommand, Screen};
pub use clock::{Clock, ClockZone, SystemClock, ZoneCycle};
pub use config::{ConfigError, DashboardConfig};
pub use scheduler::TickScheduler;
pub use sound::{
    phase_notifier, MockSoundPlayer, NotificationSounds, RodioSoundPlayer, SoundError,
    SoundNotifier, SoundPlayer, SoundSource,
};
pub use timer::{
    ConfigApplied, ConfigButton, ConfigPopup, PhaseNotifier, PopupOutcome, RecordingNotifier,
    SilentNotifier, TimerEngine, TimerEvent,
};
pub use types::{LayoutMode, RunState, TimerConfig, TimerPhase, TimerState};
