//! Display projection of the timer state.
//!
//! Pure functions from [`TimerState`] to text. The ratatui views draw what
//! these functions return and never read the state directly.

use crate::types::{LayoutMode, TimerPhase, TimerState};

/// Glyph shown in the compact layout while counting.
pub const RUNNING_GLYPH: &str = "▶";
/// Glyph shown in the compact layout while not counting.
pub const PAUSED_GLYPH: &str = "⏸";

/// Height in rows of the large countdown.
pub const LARGE_DIGIT_ROWS: usize = 5;

/// Formats seconds as `H:MM:SS` when at least an hour, else `MM:SS`.
pub fn format_countdown(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Formats seconds as `MM:SS`; minutes are not wrapped into hours.
pub fn format_minimal(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

// ============================================================================
// Views
// ============================================================================

/// Projection for the full layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FullView {
    /// Current phase
    pub phase: TimerPhase,
    /// Remaining time, `H:MM:SS` or `MM:SS`
    pub countdown: String,
    /// Countdown drawn with block characters
    pub large: [String; LARGE_DIGIT_ROWS],
    /// `elapsed / target_duration`
    pub ratio: f64,
    /// Short status line under the progress bar
    pub status: String,
}

/// Projection for either layout.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerView {
    Full(FullView),
    Compact(String),
}

/// Projects the state for the full layout.
pub fn project_full(state: &TimerState) -> FullView {
    let countdown = format_countdown(state.remaining());
    let status = match (state.is_started(), state.is_running()) {
        (false, _) => format!("{} · click or press space to start", phase_title(state.phase())),
        (true, true) => phase_title(state.phase()).to_string(),
        (true, false) => format!("{} · paused", phase_title(state.phase())),
    };

    FullView {
        phase: state.phase(),
        large: large_digits(&countdown),
        countdown,
        ratio: state.progress_ratio(),
        status,
    }
}

/// Projects the state as a single line: `"<WORK|BREAK> MM:SS <▶|⏸>"`.
pub fn project_compact(state: &TimerState) -> String {
    let glyph = if state.is_running() {
        RUNNING_GLYPH
    } else {
        PAUSED_GLYPH
    };
    format!(
        "{} {} {}",
        state.phase().label(),
        format_minimal(state.remaining()),
        glyph
    )
}

/// Projects the state for the given layout.
pub fn project(state: &TimerState, mode: LayoutMode) -> TimerView {
    match mode {
        LayoutMode::Full => TimerView::Full(project_full(state)),
        LayoutMode::Compact => TimerView::Compact(project_compact(state)),
    }
}

fn phase_title(phase: TimerPhase) -> &'static str {
    match phase {
        TimerPhase::Work => "Work",
        TimerPhase::Break => "Break",
    }
}

// ============================================================================
// Large digits
// ============================================================================

/// 3x5 block glyph for a countdown character.
fn glyph(c: char) -> [&'static str; LARGE_DIGIT_ROWS] {
    match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "█", " ", "█", " "],
        _ => ["   ", "   ", "   ", "   ", "   "],
    }
}

/// Renders text as five rows of block characters, one column between glyphs.
pub fn large_digits(text: &str) -> [String; LARGE_DIGIT_ROWS] {
    let mut rows: [String; LARGE_DIGIT_ROWS] = Default::default();
    for (i, c) in text.chars().enumerate() {
        let g = glyph(c);
        for (row, part) in rows.iter_mut().zip(g.iter()) {
            if i > 0 {
                row.push(' ');
            }
            row.push_str(part);
        }
    }
    rows
}

// ============================================================================
// Tests
// ============================================================================
