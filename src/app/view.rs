//! Ratatui views for the dashboard.
//!
//! Draws whatever the projector and clock produce and records the clickable
//! regions of the frame. Nothing here mutates application state.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Gauge, Paragraph};
use ratatui::Frame;

use super::input::HitRegions;
use super::{App, Screen};
use crate::clock::clock_view;
use crate::timer::{project, ConfigButton, ConfigPopup, FullView, TimerView};
use crate::types::{LayoutMode, TimerPhase};

const POPUP_WIDTH: u16 = 40;
const POPUP_HEIGHT: u16 = 11;

const HELP_LINES: &[(&str, &str)] = &[
    ("space / enter / left click", "start, pause or resume the timer"),
    ("c / right click", "configure work and break durations"),
    ("t / click clock", "cycle the clock time zone"),
    ("m", "switch between full and compact layouts"),
    ("?", "show or hide this help"),
    ("q / ctrl-c", "quit"),
    ("", ""),
    ("In the configuration popup", ""),
    ("↑ ↓ (k j)", "work time ± 5 minutes"),
    ("→ ← (l h)", "break time ± 1 minute"),
    ("enter / esc", "apply / cancel"),
];

/// Draws a frame and returns its clickable regions.
pub fn draw(frame: &mut Frame, app: &App) -> HitRegions {
    let mut hits = HitRegions::default();
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    match app.screen() {
        Screen::Dashboard => match app.layout() {
            LayoutMode::Full => draw_full_dashboard(frame, body, app, &mut hits),
            LayoutMode::Compact => draw_compact_dashboard(frame, body, app, &mut hits),
        },
        Screen::Help => draw_help(frame, body),
    }
    draw_footer(frame, footer, app);

    if let Some(popup) = app.popup() {
        draw_popup(frame, popup, &mut hits);
    }

    hits
}

fn phase_color(phase: TimerPhase) -> Color {
    match phase {
        TimerPhase::Work => Color::LightRed,
        TimerPhase::Break => Color::LightGreen,
    }
}

// ============================================================================
// Dashboard
// ============================================================================

fn draw_full_dashboard(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitRegions) {
    let [clock_area, timer_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(10)]).areas(area);

    let clock = clock_view(app.now(), app.clock_zone(), LayoutMode::Full);
    let block = Block::bordered().title(format!(" {} ", clock.title));
    let lines = vec![
        Line::from(Span::styled(
            clock.time,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(clock.date),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        clock_area,
    );
    hits.clock = Some(clock_area);

    if let TimerView::Full(view) = project(app.engine().state(), LayoutMode::Full) {
        draw_full_timer(frame, timer_area, &view);
    }
    hits.timer = Some(timer_area);
}

fn draw_full_timer(frame: &mut Frame, area: Rect, view: &FullView) {
    let color = phase_color(view.phase);
    let block = Block::bordered()
        .title(" Pomodoro Timer ")
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [digits_area, _, gauge_area, status_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(inner);

    let digits: Vec<Line> = view.large.iter().map(|row| Line::from(row.clone())).collect();
    frame.render_widget(
        Paragraph::new(digits)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        digits_area,
    );

    let [gauge_area] = Layout::horizontal([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(gauge_area);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(view.ratio)
            .label(view.countdown.clone()),
        gauge_area,
    );

    frame.render_widget(
        Paragraph::new(view.status.clone())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        status_area,
    );
}

fn draw_compact_dashboard(frame: &mut Frame, area: Rect, app: &App, hits: &mut HitRegions) {
    let [row, _] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    let [clock_area, timer_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(row);

    let clock = clock_view(app.now(), app.clock_zone(), LayoutMode::Compact);
    frame.render_widget(
        Paragraph::new(clock.time)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        clock_area,
    );
    hits.clock = Some(clock_area);

    let state = app.engine().state();
    if let TimerView::Compact(line) = project(state, LayoutMode::Compact) {
        frame.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .style(Style::default().fg(phase_color(state.phase())))
                .block(Block::bordered()),
            timer_area,
        );
    }
    hits.timer = Some(timer_area);
}

// ============================================================================
// Help / footer
// ============================================================================

fn draw_help(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<28}", keys),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Help ")),
        area,
    );
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                format!(" {} ", label),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            )
        } else {
            Span::raw(format!(" {} ", label))
        }
    };

    let line = Line::from(vec![
        tab("Dashboard", app.screen() == Screen::Dashboard),
        tab("Help", app.screen() == Screen::Help),
        Span::styled(
            "  space start/pause · c configure · ? help · q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

// ============================================================================
// Popup
// ============================================================================

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn draw_button(frame: &mut Frame, area: Rect, button: ConfigButton, hits: &mut HitRegions) {
    let style = match button {
        ConfigButton::Apply => Style::default().fg(Color::Black).bg(Color::Cyan),
        ConfigButton::Cancel => Style::default().fg(Color::Black).bg(Color::LightRed),
        _ => Style::default().add_modifier(Modifier::BOLD),
    };
    frame.render_widget(
        Paragraph::new(format!("[ {} ]", button.label()))
            .alignment(Alignment::Center)
            .style(style),
        area,
    );
    hits.popup_buttons.push((button, area));
}

fn draw_stepper(
    frame: &mut Frame,
    area: Rect,
    up: ConfigButton,
    down: ConfigButton,
    minutes: u32,
    hits: &mut HitRegions,
) {
    let [up_area, value_area, down_area] = Layout::horizontal([
        Constraint::Length(5),
        Constraint::Length(10),
        Constraint::Length(5),
    ])
    .flex(Flex::Center)
    .areas(area);

    draw_button(frame, up_area, up, hits);
    frame.render_widget(
        Paragraph::new(format!("{} min", minutes)).alignment(Alignment::Center),
        value_area,
    );
    draw_button(frame, down_area, down, hits);
}

fn draw_popup(frame: &mut Frame, popup: &ConfigPopup, hits: &mut HitRegions) {
    let area = centered(frame.area(), POPUP_WIDTH, POPUP_HEIGHT);
    let block = Block::bordered().title(" Configure Pomodoro Timer ");
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let rows: [Rect; 9] = Layout::vertical([Constraint::Length(1); 9]).areas(inner);
    let draft = popup.draft();

    frame.render_widget(
        Paragraph::new("Configure your Pomodoro timer").alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(Paragraph::new("Work time:"), rows[2]);
    draw_stepper(
        frame,
        rows[3],
        ConfigButton::WorkUp,
        ConfigButton::WorkDown,
        draft.work_minutes(),
        hits,
    );
    frame.render_widget(Paragraph::new("Break time:"), rows[5]);
    draw_stepper(
        frame,
        rows[6],
        ConfigButton::BreakUp,
        ConfigButton::BreakDown,
        draft.break_minutes(),
        hits,
    );

    let [cancel_area, _, apply_area] = Layout::horizontal([
        Constraint::Length(10),
        Constraint::Length(2),
        Constraint::Length(9),
    ])
    .flex(Flex::Center)
    .areas(rows[8]);
    draw_button(frame, cancel_area, ConfigButton::Cancel, hits);
    draw_button(frame, apply_area, ConfigButton::Apply, hits);
}
