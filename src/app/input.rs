//! Input mapping for the dashboard.
//!
//! Turns crossterm key and mouse events into [`AppCommand`]s. Mapping is
//! pure so it can be tested without a terminal; mouse hits are resolved
//! against the [`HitRegions`] recorded by the last drawn frame.

use std::fmt;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::timer::ConfigButton;

// ============================================================================
// AppCommand
// ============================================================================

/// Everything the user can ask the dashboard to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Start the timer, or pause/resume it once started
    PrimaryActivate,
    /// Open the configuration popup
    SecondaryActivate,
    /// A popup button was pressed
    Popup(ConfigButton),
    /// Cycle the clock time zone
    CycleClockZone,
    /// Switch between full and compact layouts
    ToggleLayout,
    /// Show or hide the help screen
    ToggleHelp,
    /// Leave the dashboard
    Quit,
}

impl fmt::Display for AppCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppCommand::PrimaryActivate => write!(f, "primary-activate"),
            AppCommand::SecondaryActivate => write!(f, "secondary-activate"),
            AppCommand::Popup(button) => write!(f, "popup:{}", button),
            AppCommand::CycleClockZone => write!(f, "cycle-clock-zone"),
            AppCommand::ToggleLayout => write!(f, "toggle-layout"),
            AppCommand::ToggleHelp => write!(f, "toggle-help"),
            AppCommand::Quit => write!(f, "quit"),
        }
    }
}

// ============================================================================
// HitRegions
// ============================================================================

/// Clickable areas of the last drawn frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitRegions {
    /// The timer panel, if it was drawn
    pub timer: Option<Rect>,
    /// The clock panel, if it was drawn
    pub clock: Option<Rect>,
    /// Popup buttons, if the popup was drawn
    pub popup_buttons: Vec<(ConfigButton, Rect)>,
}

impl HitRegions {
    fn popup_button_at(&self, column: u16, row: u16) -> Option<ConfigButton> {
        self.popup_buttons
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(button, _)| *button)
    }

    fn timer_hit(&self, column: u16, row: u16) -> bool {
        self.timer.is_some_and(|rect| contains(rect, column, row))
    }

    fn clock_hit(&self, column: u16, row: u16) -> bool {
        self.clock.is_some_and(|rect| contains(rect, column, row))
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

// ============================================================================
// Mapping
// ============================================================================

/// Maps a key press. While the popup is open only popup keys and Ctrl-C
/// are recognised.
pub fn map_key(key: KeyEvent, popup_open: bool) -> Option<AppCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppCommand::Quit);
    }

    if popup_open {
        let button = match key.code {
            KeyCode::Up | KeyCode::Char('k') => ConfigButton::WorkUp,
            KeyCode::Down | KeyCode::Char('j') => ConfigButton::WorkDown,
            KeyCode::Right | KeyCode::Char('l') => ConfigButton::BreakUp,
            KeyCode::Left | KeyCode::Char('h') => ConfigButton::BreakDown,
            KeyCode::Esc => ConfigButton::Cancel,
            KeyCode::Enter => ConfigButton::Apply,
            _ => return None,
        };
        return Some(AppCommand::Popup(button));
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(AppCommand::PrimaryActivate),
        KeyCode::Char('c') => Some(AppCommand::SecondaryActivate),
        KeyCode::Char('t') => Some(AppCommand::CycleClockZone),
        KeyCode::Char('m') => Some(AppCommand::ToggleLayout),
        KeyCode::Char('?') => Some(AppCommand::ToggleHelp),
        KeyCode::Char('q') => Some(AppCommand::Quit),
        _ => None,
    }
}

/// Maps a mouse press against the last frame's hit regions.
pub fn map_mouse(mouse: MouseEvent, hits: &HitRegions, popup_open: bool) -> Option<AppCommand> {
    let MouseEventKind::Down(button) = mouse.kind else {
        return None;
    };
    let (column, row) = (mouse.column, mouse.row);

    if popup_open {
        return match button {
            MouseButton::Left => hits.popup_button_at(column, row).map(AppCommand::Popup),
            _ => None,
        };
    }

    if hits.timer_hit(column, row) {
        return match button {
            MouseButton::Left => Some(AppCommand::PrimaryActivate),
            MouseButton::Right => Some(AppCommand::SecondaryActivate),
            MouseButton::Middle => None,
        };
    }
    if hits.clock_hit(column, row) && button == MouseButton::Left {
        return Some(AppCommand::CycleClockZone);
    }
    None
}

// ============================================================================
// Tests
// ============================================================================
