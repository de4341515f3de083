//! Title bar with view tabs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use sellertui::model::View;

pub fn render_header(
    f: &mut Frame,
    area: Rect,
    view: View,
    lead_count: usize,
    opportunity_count: usize,
) {
    let tab = |label: String, active: bool| {
        if active {
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(Color::Gray))
        }
    };

    let line = Line::from(vec![
        Span::styled(
            "Mini Seller Console",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        tab(format!("Leads ({})", lead_count), view == View::Leads),
        Span::raw(" "),
        tab(
            format!("Opportunities ({})", opportunity_count),
            view == View::Opportunities,
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Lead Management System ")
        .title_alignment(Alignment::Right)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(Paragraph::new(line).block(block), area);
}
