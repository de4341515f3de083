//! Placeholder views: loading skeleton, empty and error states

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Placeholder rows drawn while the first fetch runs
pub const SKELETON_ROWS: usize = 8;

/// Grey bars standing in for table rows
pub fn render_skeleton(f: &mut Frame, area: Rect, title: &str) {
    let inner_width = area.width.saturating_sub(4) as usize;
    let name_width = inner_width * 3 / 4;
    let detail_width = inner_width / 2;

    let lines: Vec<Line> = (0..SKELETON_ROWS)
        .flat_map(|_| {
            [
                Line::styled("░".repeat(name_width), Style::default().fg(Color::Gray)),
                Line::styled("░".repeat(detail_width), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} - Loading... ", title))
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Centered title + description inside a bordered box
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, description: &str) {
    let lines = vec![
        Line::raw(""),
        Line::styled(
            title.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(description.to_string(), Style::default().fg(Color::Gray)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

/// Failed fetch with a retry hint
pub fn render_error_state(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::raw(""),
        Line::styled(
            "Something went wrong",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw(message.to_string()),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::raw(" to try again"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
