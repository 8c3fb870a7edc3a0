//! Configuration popup for the timer durations.
//!
//! The popup works on a [`ConfigDraft`] copied from the engine when it opens.
//! Cancel drops the draft; Apply turns it into a single [`ConfigApplied`]
//! value that the owning engine consumes.

use std::fmt;

use tracing::debug;

use crate::types::TimerState;

/// Work duration step (5 minutes).
pub const WORK_STEP: u32 = 5 * 60;
/// Lowest work duration reachable from the popup (5 minutes).
pub const WORK_FLOOR: u32 = 5 * 60;
/// Break duration step (1 minute).
pub const BREAK_STEP: u32 = 60;
/// Lowest break duration reachable from the popup (1 minute).
pub const BREAK_FLOOR: u32 = 60;

// ============================================================================
// ConfigButton
// ============================================================================

/// Buttons presented by the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigButton {
    WorkUp,
    WorkDown,
    BreakUp,
    BreakDown,
    Cancel,
    Apply,
}

impl ConfigButton {
    /// Every button, in presentation order.
    pub const ALL: [ConfigButton; 6] = [
        ConfigButton::WorkUp,
        ConfigButton::WorkDown,
        ConfigButton::BreakUp,
        ConfigButton::BreakDown,
        ConfigButton::Cancel,
        ConfigButton::Apply,
    ];

    /// Text drawn on the button.
    pub fn label(&self) -> &'static str {
        match self {
            ConfigButton::WorkUp | ConfigButton::BreakUp => "▲",
            ConfigButton::WorkDown | ConfigButton::BreakDown => "▼",
            ConfigButton::Cancel => "Cancel",
            ConfigButton::Apply => "Apply",
        }
    }
}

impl fmt::Display for ConfigButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigButton::WorkUp => "work-up",
            ConfigButton::WorkDown => "work-down",
            ConfigButton::BreakUp => "break-up",
            ConfigButton::BreakDown => "break-down",
            ConfigButton::Cancel => "cancel",
            ConfigButton::Apply => "apply",
        };
        f.write_str(name)
    }
}

// ============================================================================
// ConfigDraft / ConfigApplied
// ============================================================================

/// Working copy of the durations while the popup is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigDraft {
    /// Work duration in seconds
    pub work_duration: u32,
    /// Break duration in seconds
    pub break_duration: u32,
}

impl ConfigDraft {
    fn increase_work(&mut self) {
        self.work_duration = self.work_duration.saturating_add(WORK_STEP);
    }

    fn decrease_work(&mut self) {
        self.work_duration = step_down(self.work_duration, WORK_STEP, WORK_FLOOR);
    }

    fn increase_break(&mut self) {
        self.break_duration = self.break_duration.saturating_add(BREAK_STEP);
    }

    fn decrease_break(&mut self) {
        self.break_duration = step_down(self.break_duration, BREAK_STEP, BREAK_FLOOR);
    }

    /// Work duration in whole minutes, as shown in the popup.
    pub fn work_minutes(&self) -> u32 {
        self.work_duration / 60
    }

    /// Break duration in whole minutes, as shown in the popup.
    pub fn break_minutes(&self) -> u32 {
        self.break_duration / 60
    }
}

/// Decrements towards `floor` without crossing it. A value already at or
/// below the floor is left alone.
fn step_down(value: u32, step: u32, floor: u32) -> u32 {
    if value > floor {
        value.saturating_sub(step).max(floor)
    } else {
        value
    }
}

/// Durations committed by the popup's Apply button.
///
/// Not `Clone`: each value is consumed once by
/// [`TimerEngine::apply_config`](crate::timer::TimerEngine::apply_config).
#[derive(Debug, PartialEq, Eq)]
pub struct ConfigApplied {
    work_duration: u32,
    break_duration: u32,
}

impl ConfigApplied {
    pub fn work_duration(&self) -> u32 {
        self.work_duration
    }

    pub fn break_duration(&self) -> u32 {
        self.break_duration
    }

    pub(crate) fn into_durations(self) -> (u32, u32) {
        (self.work_duration, self.break_duration)
    }
}

// ============================================================================
// ConfigPopup
// ============================================================================

/// Result of a button press.
#[derive(Debug, PartialEq, Eq)]
pub enum PopupOutcome {
    /// The popup stays open
    Open,
    /// Closed without changes
    Cancelled,
    /// Closed with new durations to apply
    Applied(ConfigApplied),
}

/// Modal popup editing the work and break durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPopup {
    draft: ConfigDraft,
}

impl ConfigPopup {
    /// Opens the popup seeded with the engine's current durations.
    pub fn open(state: &TimerState) -> Self {
        let draft = ConfigDraft {
            work_duration: state.work_duration(),
            break_duration: state.break_duration(),
        };
        debug!(
            work_duration = draft.work_duration,
            break_duration = draft.break_duration,
            "config popup opened"
        );
        Self { draft }
    }

    /// Returns the current draft.
    pub fn draft(&self) -> &ConfigDraft {
        &self.draft
    }

    /// Handles a button press.
    pub fn press(&mut self, button: ConfigButton) -> PopupOutcome {
        match button {
            ConfigButton::WorkUp => self.draft.increase_work(),
            ConfigButton::WorkDown => self.draft.decrease_work(),
            ConfigButton::BreakUp => self.draft.increase_break(),
            ConfigButton::BreakDown => self.draft.decrease_break(),
            ConfigButton::Cancel => {
                debug!("config popup cancelled");
                return PopupOutcome::Cancelled;
            }
            ConfigButton::Apply => {
                debug!(
                    work_duration = self.draft.work_duration,
                    break_duration = self.draft.break_duration,
                    "config popup applied"
                );
                return PopupOutcome::Applied(ConfigApplied {
                    work_duration: self.draft.work_duration,
                    break_duration: self.draft.break_duration,
                });
            }
        }

        debug!(
            button = %button,
            work_duration = self.draft.work_duration,
            break_duration = self.draft.break_duration,
            "config draft updated"
        );
        PopupOutcome::Open
    }
}

// ============================================================================
// Tests
// ============================================================================
