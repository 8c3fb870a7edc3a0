//! Core data types for the dashboard timer.
//!
//! This module defines the data structures used for:
//! - Timer phase and run state
//! - Timer configuration (durations in seconds)
//! - The in-memory timer state owned by the engine

use serde::{Deserialize, Serialize};

/// Default work duration in seconds (25 minutes).
pub const DEFAULT_WORK_SECONDS: u32 = 25 * 60;

/// Default break duration in seconds (5 minutes).
pub const DEFAULT_BREAK_SECONDS: u32 = 5 * 60;

// ============================================================================
// TimerPhase
// ============================================================================

/// The two alternating timer modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// Focused work session
    #[default]
    Work,
    /// Break between work sessions
    Break,
}

impl TimerPhase {
    /// Returns the phase that follows this one.
    pub fn next(self) -> Self {
        match self {
            TimerPhase::Work => TimerPhase::Break,
            TimerPhase::Break => TimerPhase::Work,
        }
    }

    /// Returns the upper-case label used by the compact layout.
    pub fn label(self) -> &'static str {
        match self {
            TimerPhase::Work => "WORK",
            TimerPhase::Break => "BREAK",
        }
    }

    /// Returns the string representation of the phase.
    pub fn as_str(self) -> &'static str {
        match self {
            TimerPhase::Work => "work",
            TimerPhase::Break => "break",
        }
    }
}

// ============================================================================
// RunState
// ============================================================================

/// Run state of the timer, orthogonal to [`TimerPhase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Never started (or force-reset by a configuration change)
    Idle,
    /// Counting down
    Running,
    /// Stopped mid-phase, resumable
    Paused,
}

// ============================================================================
// LayoutMode
// ============================================================================

/// Layout used by the display projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Large countdown with a progress bar
    #[default]
    Full,
    /// Single line for small displays
    Compact,
}

impl LayoutMode {
    /// Returns the other layout.
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Full => LayoutMode::Compact,
            LayoutMode::Compact => LayoutMode::Full,
        }
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Durations the engine is constructed with, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Work duration in seconds
    pub work_duration: u32,
    /// Break duration in seconds
    pub break_duration: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_duration: DEFAULT_WORK_SECONDS,
            break_duration: DEFAULT_BREAK_SECONDS,
        }
    }
}

impl TimerConfig {
    /// Creates a configuration from whole minutes.
    pub fn from_minutes(work_minutes: u32, break_minutes: u32) -> Self {
        Self {
            work_duration: work_minutes.saturating_mul(60),
            break_duration: break_minutes.saturating_mul(60),
        }
    }

    /// Returns a copy with the specified work duration in seconds.
    pub fn with_work_duration(mut self, seconds: u32) -> Self {
        self.work_duration = seconds;
        self
    }

    /// Returns a copy with the specified break duration in seconds.
    pub fn with_break_duration(mut self, seconds: u32) -> Self {
        self.break_duration = seconds;
        self
    }

    /// Validates the configuration.
    ///
    /// The engine only needs positive durations; the one-minute floor is a
    /// user-facing rule applied when loading configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.work_duration < 60 {
            return Err("work duration must be at least 1 minute".to_string());
        }
        if self.break_duration < 60 {
            return Err("break duration must be at least 1 minute".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// TimerState
// ============================================================================

/// Countdown state, mutated only by the timer engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    phase: TimerPhase,
    running: bool,
    started: bool,
    elapsed: u32,
    target_duration: u32,
    work_duration: u32,
    break_duration: u32,
}

impl TimerState {
    /// Creates an idle state in the work phase.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            phase: TimerPhase::Work,
            running: false,
            started: false,
            elapsed: 0,
            target_duration: config.work_duration.max(1),
            work_duration: config.work_duration.max(1),
            break_duration: config.break_duration.max(1),
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn target_duration(&self) -> u32 {
        self.target_duration
    }

    pub fn work_duration(&self) -> u32 {
        self.work_duration
    }

    pub fn break_duration(&self) -> u32 {
        self.break_duration
    }

    /// Seconds left in the current phase, never negative.
    pub fn remaining(&self) -> u32 {
        self.target_duration.saturating_sub(self.elapsed)
    }

    /// Fraction of the current phase already elapsed, in `0.0..=1.0`.
    pub fn progress_ratio(&self) -> f64 {
        if self.target_duration == 0 {
            return 0.0;
        }
        (f64::from(self.elapsed) / f64::from(self.target_duration)).clamp(0.0, 1.0)
    }

    /// Returns the run state derived from the `started`/`running` flags.
    pub fn run_state(&self) -> RunState {
        match (self.started, self.running) {
            (false, _) => RunState::Idle,
            (true, true) => RunState::Running,
            (true, false) => RunState::Paused,
        }
    }

    /// Configured duration for the given phase.
    pub fn duration_for(&self, phase: TimerPhase) -> u32 {
        match phase {
            TimerPhase::Work => self.work_duration,
            TimerPhase::Break => self.break_duration,
        }
    }

    /// Begins a fresh work phase and starts counting.
    pub(crate) fn begin_work(&mut self) {
        self.phase = TimerPhase::Work;
        self.elapsed = 0;
        self.target_duration = self.work_duration;
        self.started = true;
        self.running = true;
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Advances one tick.
    ///
    /// Returns true when the phase is complete. `>=` keeps a target that
    /// shrank below the elapsed count from producing negative remaining time.
    pub(crate) fn advance(&mut self) -> bool {
        self.elapsed = self.elapsed.saturating_add(1);
        self.elapsed >= self.target_duration
    }

    /// Switches to the next phase, restarting the count.
    pub(crate) fn flip_phase(&mut self) {
        self.phase = self.phase.next();
        self.elapsed = 0;
        self.target_duration = self.duration_for(self.phase);
    }

    /// Replaces the durations and returns to the idle work phase.
    pub(crate) fn reset(&mut self, work_duration: u32, break_duration: u32) {
        self.work_duration = work_duration.max(1);
        self.break_duration = break_duration.max(1);
        self.phase = TimerPhase::Work;
        self.elapsed = 0;
        self.target_duration = self.work_duration;
        self.started = false;
        self.running = false;
    }

    /// Overwrites fields directly; only for exercising edge cases in tests.
    #[cfg(test)]
    pub(crate) fn force(&mut self, phase: TimerPhase, elapsed: u32, target_duration: u32) {
        self.phase = phase;
        self.elapsed = elapsed;
        self.target_duration = target_duration;
    }
}

// ============================================================================
// Tests
// ============================================================================
