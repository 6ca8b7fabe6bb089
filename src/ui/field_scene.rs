//! Render adapter for the playing field.
//!
//! Reads bounds from the simulation and paints one terminal cell per slice of
//! the field. A cell shows whatever its field rectangle overlaps; the avatar
//! is drawn over obstacles.

use super::game_common::{render_info_panel_frame, render_status_bar, render_title_overlay};
use crate::core::game_loop::{Game, LoopPhase, LossReason};
use crate::core::geometry::Bounds;
use rand::Rng;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const CONTROLS: &[(&str, &str)] = &[("[Space]", "Flap"), ("[Q/Esc]", "Quit")];
const INFO_PANEL_WIDTH: u16 = 22;

/// Render the whole game screen.
pub fn render_game<R: Rng>(frame: &mut Frame, area: Rect, game: &Game<R>) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Play column | info panel
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    // Field on top, two status lines under it
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(columns[0]);
    let play_area = rows[0];

    render_play_area(frame, play_area, game);
    render_status_bar_content(frame, rows[1], game);
    render_info_panel(frame, columns[1], game);

    if game.overlay.title_visible {
        let armed = game.phase == LoopPhase::Idle { start_armed: true };
        render_title_overlay(
            frame,
            play_area,
            game.overlay.subtitle.as_deref(),
            armed,
        );
    }
}

/// Field-unit size of one terminal cell.
fn cell_size<R: Rng>(game: &Game<R>, area: Rect) -> (f64, f64) {
    (
        game.field.width / area.width as f64,
        game.field.height / area.height as f64,
    )
}

fn render_play_area<R: Rng>(frame: &mut Frame, area: Rect, game: &Game<R>) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let (cell_w, cell_h) = cell_size(game, area);
    let avatar = game.avatar_bounds();
    let obstacles = game.obstacle_bounds();

    let avatar_glyph = if game.avatar.is_jumping() { "▲" } else { "►" };
    let avatar_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let pipe_style = Style::default().fg(Color::Green);

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let cell =
                Bounds::from_origin(col as f64 * cell_w, row as f64 * cell_h, cell_w, cell_h);
            if cell.intersects(&avatar) {
                spans.push(Span::styled(avatar_glyph, avatar_style));
            } else if obstacles.iter().any(|rect| cell.intersects(rect)) {
                spans.push(Span::styled("█", pipe_style));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content<R: Rng>(frame: &mut Frame, area: Rect, game: &Game<R>) {
    let (text, color) = match game.phase {
        LoopPhase::Running => (format!("Pipes: {}", game.passed_count()), Color::Green),
        LoopPhase::Idle { .. } if game.session == 0 => {
            ("Press any key to start!".to_string(), Color::Yellow)
        }
        LoopPhase::Idle { .. } => (
            format!("Crashed after {} pipes", game.passed_count()),
            Color::Red,
        ),
    };
    render_status_bar(frame, area, &text, color, CONTROLS);
}

fn render_info_panel<R: Rng>(frame: &mut Frame, area: Rect, game: &Game<R>) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let state = match game.phase {
        LoopPhase::Running => "Flying",
        LoopPhase::Idle { .. } if game.session == 0 => "Ready",
        LoopPhase::Idle { .. } => "Crashed",
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" State: ", label),
            Span::styled(state, value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(game.passed_count().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" On screen: ", label),
            Span::styled(
                game.obstacles.pairs.len().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Jump: ", label),
            Span::styled(
                if game.avatar.is_jumping() { "up" } else { "falling" },
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Session: ", label),
            Span::styled(game.session.to_string(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    if let Some(reason) = game.last_loss {
        let text = match reason {
            LossReason::AboveField => "flew too high",
            LossReason::BelowField => "fell",
            LossReason::Collision => "hit a pipe",
        };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Last: ", label),
            Span::styled(text, Style::default().fg(Color::Red)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
