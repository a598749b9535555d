//! TUI rendering
//!
//! This module contains all rendering logic for the about panel, organized
//! into:
//! - `colors`: Color palette definitions
//! - the panel itself: logo, version heading with status span, recheck
//!   control and footer

pub mod colors;

use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use self::colors::Palette;
use crate::app::{App, Presentation};

/// Braille spinner frames shown while a check is outstanding.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// ASCII stand-in for the application logo.
const LOGO: [&str; 3] = ["  /\\  ", " /  \\ ", "/____\\"];

/// Height of the centered content column in rows.
const CONTENT_HEIGHT: u16 = 9;

/// Render the full about panel
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let palette = colors::palette(app.theme.is_dark());
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let [main, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(area);

    let content = centered_vertical(main, CONTENT_HEIGHT);
    let paragraph = Paragraph::new(content_lines(app, palette)).alignment(Alignment::Center);
    frame.render_widget(paragraph, content);

    render_footer(frame, app, palette, footer);
}

/// The centered column: logo, heading, version + status, recheck control.
fn content_lines(app: &App, palette: &Palette) -> Vec<Line<'static>> {
    let logo_style = Style::default().fg(palette.accent);
    let mut lines: Vec<Line<'static>> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, logo_style)))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        env!("CARGO_PKG_NAME"),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(version_line(app, palette));
    lines.push(Line::from(""));
    lines.push(control_line(app, palette));

    lines
}

/// Running version with the status span next to it.
fn version_line(app: &App, palette: &Palette) -> Line<'static> {
    let version = Span::styled(
        app.host.version.to_string(),
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD),
    );

    let status = match app.presentation(Utc::now()) {
        Presentation::Checking => Span::styled(
            SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()].to_string(),
            Style::default().fg(palette.text_dim),
        ),
        Presentation::UpdateAvailable(latest) => Span::styled(
            format!("Update available: {latest}"),
            Style::default().fg(palette.accent),
        ),
        Presentation::UpToDate(age) => Span::styled(
            format!("Latest ({age})"),
            Style::default().fg(palette.text_dim),
        ),
        Presentation::CheckFailed(message) => Span::styled(
            format!("Check failed: {message}"),
            Style::default().fg(palette.error),
        ),
    };

    Line::from(vec![version, Span::raw("  "), status])
}

/// The recheck control, rendered disabled while a check is outstanding.
fn control_line(app: &App, palette: &Palette) -> Line<'static> {
    let style = if app.checking() {
        Style::default().fg(palette.control_disabled)
    } else {
        Style::default().fg(palette.control)
    };
    Line::from(Span::styled("[ r ] CHECK FOR UPDATES", style))
}

/// Static footer plus key hints, pinned to the bottom.
fn render_footer(frame: &mut Frame<'_>, app: &App, palette: &Palette, area: Rect) {
    let hint_style = Style::default().fg(palette.text_dim);
    let lines = vec![
        Line::from(Span::styled(
            "[t] toggle theme   [q] quit",
            hint_style,
        )),
        Line::from(Span::styled(
            app.config.footer.clone(),
            Style::default().fg(palette.footer),
        )),
    ];
    let footer = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Vertically center a fixed-height band inside `area`.
fn centered_vertical(area: Rect, height: u16) -> Rect {
    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    center
}
