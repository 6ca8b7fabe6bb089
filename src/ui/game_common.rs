//! Reusable screen pieces: status bar, info panel frame, title box.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Two-line status area: the status message, then the `[key] action` hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }

    let hints: Vec<Span> = controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {action}"), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    let mut lines = vec![Line::styled(
        status_text.to_string(),
        Style::default().fg(status_color),
    )];
    if !hints.is_empty() {
        lines.push(Line::from(hints));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Bordered " Info " panel; returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Title box centered in `area`: game name, optional subtitle, and the start
/// prompt once a new session can be started.
pub fn render_title_overlay(
    frame: &mut Frame,
    area: Rect,
    subtitle: Option<&str>,
    show_prompt: bool,
) {
    let box_width = area.width.min(32);
    let box_height = area.height.min(9);
    if box_width < 4 || box_height < 3 {
        return;
    }
    let rect = Rect::new(
        area.x + (area.width - box_width) / 2,
        area.y + (area.height - box_height) / 2,
        box_width,
        box_height,
    );
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines = vec![
        Line::from(Span::styled(
            "FLAPPY",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(subtitle) = subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::White),
        )));
        lines.push(Line::from(""));
    }
    if show_prompt {
        lines.push(Line::from(Span::styled(
            "Press any key to start",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let content_height = lines.len() as u16;
    let y_offset = inner.y + inner.height.saturating_sub(content_height) / 2;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(
            inner.x,
            y_offset,
            inner.width,
            content_height.min(inner.height),
        ),
    );
}
