//! Timer engine for the dashboard Pomodoro timer.
//!
//! This module provides the core timer functionality:
//! - State transitions (Idle → Running ⇄ Paused, forced reset on reconfiguration)
//! - One-second tick progression with Work ⇄ Break phase flips
//! - Fire-and-forget notification when a phase ends
//!
//! Every entry point returns a [`TimerEvent`]; the host re-renders after
//! each one.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, trace};

use crate::timer::popup::ConfigApplied;
use crate::types::{RunState, TimerConfig, TimerPhase, TimerState};

// ============================================================================
// TimerEvent
// ============================================================================

/// What an engine entry point did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// A fresh work phase began
    Started {
        /// Seconds in the work phase
        target_duration: u32,
    },
    /// Counting stopped mid-phase
    Paused,
    /// Counting continued after a pause
    Resumed,
    /// One second elapsed
    Ticked {
        /// Seconds left in the current phase
        remaining: u32,
    },
    /// The current phase ended and the next one began
    PhaseCompleted {
        /// Phase that just ended
        ended: TimerPhase,
        /// Phase now running
        next: TimerPhase,
    },
    /// New durations were applied and the timer returned to idle
    Reset {
        /// New work duration in seconds
        work_duration: u32,
        /// New break duration in seconds
        break_duration: u32,
    },
    /// The entry point had no effect in the current state
    Ignored,
}

// ============================================================================
// PhaseNotifier
// ============================================================================

/// Receives a one-shot notification each time a phase ends.
///
/// Implementations must return immediately; anything slow belongs on a
/// detached worker.
pub trait PhaseNotifier: Send + Sync + std::fmt::Debug {
    /// Called exactly once per completed phase, before the flip.
    fn phase_ended(&self, ended: TimerPhase);
}

/// Notifier that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl PhaseNotifier for SilentNotifier {
    fn phase_ended(&self, _ended: TimerPhase) {}
}

/// Notifier that records every call, for tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    calls: Mutex<Vec<TimerPhase>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ended phases in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<TimerPhase> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of notifications for the given ended phase.
    #[must_use]
    pub fn count(&self, phase: TimerPhase) -> usize {
        self.calls().into_iter().filter(|p| *p == phase).count()
    }
}

impl PhaseNotifier for RecordingNotifier {
    fn phase_ended(&self, ended: TimerPhase) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(ended);
        }
    }
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Owns the timer state and is its sole mutator.
#[derive(Debug)]
pub struct TimerEngine {
    state: TimerState,
    notifier: Arc<dyn PhaseNotifier>,
}

impl TimerEngine {
    /// Creates an idle engine with the given durations.
    pub fn new(config: TimerConfig, notifier: Arc<dyn PhaseNotifier>) -> Self {
        debug!(
            work_duration = config.work_duration,
            break_duration = config.break_duration,
            "timer engine created"
        );
        Self {
            state: TimerState::new(config),
            notifier,
        }
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Returns the current run state.
    pub fn run_state(&self) -> RunState {
        self.state.run_state()
    }

    /// Starts a fresh work phase from idle.
    ///
    /// Has no effect once the timer has been started; use
    /// [`toggle`](Self::toggle) to pause or resume.
    pub fn start(&mut self) -> TimerEvent {
        if self.state.is_started() {
            debug!("start ignored: timer already started");
            return TimerEvent::Ignored;
        }

        self.state.begin_work();
        info!(
            target_duration = self.state.target_duration(),
            "pomodoro started"
        );

        TimerEvent::Started {
            target_duration: self.state.target_duration(),
        }
    }

    /// Pauses a running timer or resumes a paused one.
    pub fn toggle(&mut self) -> TimerEvent {
        match self.state.run_state() {
            RunState::Idle => {
                debug!("toggle ignored: timer not started");
                TimerEvent::Ignored
            }
            RunState::Running => {
                self.state.set_running(false);
                debug!(elapsed = self.state.elapsed(), "pomodoro paused");
                TimerEvent::Paused
            }
            RunState::Paused => {
                self.state.set_running(true);
                debug!(elapsed = self.state.elapsed(), "pomodoro resumed");
                TimerEvent::Resumed
            }
        }
    }

    /// Handles the primary user interaction: start when idle, toggle otherwise.
    pub fn activate(&mut self) -> TimerEvent {
        if self.state.is_started() {
            self.toggle()
        } else {
            self.start()
        }
    }

    /// Advances the countdown by one second.
    ///
    /// Ticks outside the running state are ignored. On phase completion the
    /// notifier is called once for the phase that ended, the phase flips and
    /// the next phase starts immediately.
    pub fn tick(&mut self) -> TimerEvent {
        if !self.state.is_running() {
            trace!("tick ignored: timer not running");
            return TimerEvent::Ignored;
        }

        if !self.state.advance() {
            return TimerEvent::Ticked {
                remaining: self.state.remaining(),
            };
        }

        let ended = self.state.phase();
        self.notifier.phase_ended(ended);
        self.state.flip_phase();
        let next = self.state.phase();

        info!(
            ended = ended.as_str(),
            next = next.as_str(),
            target_duration = self.state.target_duration(),
            "phase completed"
        );

        TimerEvent::PhaseCompleted { ended, next }
    }

    /// Applies new durations and force-resets to idle, whatever the current
    /// state. In-flight progress is discarded.
    pub fn apply_config(&mut self, applied: ConfigApplied) -> TimerEvent {
        let (work_duration, break_duration) = applied.into_durations();
        let previous = self.state.run_state();

        self.state.reset(work_duration, break_duration);

        info!(
            work_duration,
            break_duration,
            previous = ?previous,
            "timer configuration applied"
        );

        TimerEvent::Reset {
            work_duration: self.state.work_duration(),
            break_duration: self.state.break_duration(),
        }
    }

    /// Returns a mutable reference to the timer state (for testing).
    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut TimerState {
        &mut self.state
    }
}

// ============================================================================
// Tests
// ============================================================================
