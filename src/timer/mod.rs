//! Pomodoro timer core.
//!
//! - `engine`: the countdown state machine
//! - `popup`: duration configuration popup
//! - `projector`: pure text projection of the timer state

pub mod engine;
pub mod popup;
pub mod projector;

pub use engine::{PhaseNotifier, RecordingNotifier, SilentNotifier, TimerEngine, TimerEvent};
pub use popup::{ConfigApplied, ConfigButton, ConfigDraft, ConfigPopup, PopupOutcome};
pub use projector::{project, project_compact, project_full, FullView, TimerView};
