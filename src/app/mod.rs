//! Terminal dashboard application.
//!
//! Owns the timer engine, the configuration popup and the screen state, and
//! runs the event loop that feeds terminal input, timer ticks and clock
//! refreshes into them. Every handled event is followed by a redraw.

pub mod input;
pub mod terminal;
pub mod view;

use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, trace};

use crate::clock::{Clock, ClockZone, ZoneCycle};
use crate::scheduler::TickScheduler;
use crate::timer::{ConfigButton, ConfigPopup, PopupOutcome, TimerEngine, TimerEvent};
use crate::types::LayoutMode;

pub use input::{map_key, map_mouse, AppCommand, HitRegions};

/// Refresh period of the clock panel.
pub const CLOCK_REFRESH: std::time::Duration = std::time::Duration::from_secs(1);

/// Screens the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Help,
}

/// Dashboard application state.
pub struct App {
    engine: TimerEngine,
    popup: Option<ConfigPopup>,
    screen: Screen,
    layout: LayoutMode,
    zones: ZoneCycle,
    clock: Box<dyn Clock>,
    hits: HitRegions,
    should_quit: bool,
}

impl App {
    pub fn new(
        engine: TimerEngine,
        layout: LayoutMode,
        zones: ZoneCycle,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            engine,
            popup: None,
            screen: Screen::Dashboard,
            layout,
            zones,
            clock,
            hits: HitRegions::default(),
            should_quit: false,
        }
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn popup(&self) -> Option<&ConfigPopup> {
        self.popup.as_ref()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Zone currently shown by the clock panel.
    pub fn clock_zone(&self) -> ClockZone {
        self.zones.current()
    }

    /// Clickable regions recorded by the last successful draw.
    pub fn hits(&self) -> &HitRegions {
        &self.hits
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one user command. Returns the timer event, if the command
    /// reached the engine.
    pub fn handle_command(&mut self, command: AppCommand) -> Option<TimerEvent> {
        debug!(command = %command, "handling command");

        match command {
            AppCommand::Quit => {
                info!("quit requested");
                self.should_quit = true;
                None
            }
            AppCommand::Popup(button) => self.press_popup_button(button),
            // The popup is modal.
            _ if self.popup.is_some() => None,
            AppCommand::ToggleHelp => {
                self.screen = match self.screen {
                    Screen::Dashboard => Screen::Help,
                    Screen::Help => Screen::Dashboard,
                };
                None
            }
            _ if self.screen == Screen::Help => None,
            AppCommand::PrimaryActivate => Some(self.engine.activate()),
            AppCommand::SecondaryActivate => {
                self.popup = Some(ConfigPopup::open(self.engine.state()));
                None
            }
            AppCommand::CycleClockZone => {
                let zone = self.zones.advance();
                debug!(zone = %zone, "clock zone changed");
                None
            }
            AppCommand::ToggleLayout => {
                self.layout = self.layout.toggled();
                None
            }
        }
    }

    fn press_popup_button(&mut self, button: ConfigButton) -> Option<TimerEvent> {
        let popup = self.popup.as_mut()?;
        match popup.press(button) {
            PopupOutcome::Open => None,
            PopupOutcome::Cancelled => {
                self.popup = None;
                None
            }
            PopupOutcome::Applied(applied) => {
                let event = self.engine.apply_config(applied);
                self.popup = None;
                Some(event)
            }
        }
    }

    /// Delivers one scheduler tick to the engine.
    pub fn on_tick(&mut self) -> TimerEvent {
        let event = self.engine.tick();
        trace!(?event, "tick");
        event
    }

    /// Maps a raw terminal event and handles the resulting command.
    pub fn handle_terminal_event(&mut self, event: Event) -> Option<TimerEvent> {
        let popup_open = self.popup.is_some();
        let command = match event {
            Event::Key(key) => map_key(key, popup_open),
            Event::Mouse(mouse) => map_mouse(mouse, &self.hits, popup_open),
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                None
            }
            _ => None,
        };
        command.and_then(|c| self.handle_command(c))
    }

    /// Draws one frame. Draw failures are logged and the previous hit
    /// regions are kept.
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) {
        let mut hits = HitRegions::default();
        let app: &App = self;
        match terminal.draw(|frame| hits = view::draw(frame, app)) {
            Ok(_) => self.hits = hits,
            Err(e) => error!(error = %e, "failed to draw frame"),
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal event stream fails.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut events = EventStream::new();
        let mut ticks = TickScheduler::default();
        let mut clock = interval(CLOCK_REFRESH);
        clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("dashboard started");
        self.render(terminal);

        while !self.should_quit {
            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        self.handle_terminal_event(event);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        debug!("terminal event stream closed");
                        break;
                    }
                },
                _ = ticks.next_tick() => {
                    self.on_tick();
                }
                _ = clock.tick() => {}
            }

            ticks.sync(self.engine.state().is_running());
            self.render(terminal);
        }

        info!("dashboard stopped");
        Ok(())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("engine", &self.engine)
            .field("popup", &self.popup)
            .field("screen", &self.screen)
            .field("layout", &self.layout)
            .field("zones", &self.zones)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
