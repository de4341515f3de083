use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use sellertui::api::OpportunityStage;
use sellertui::logic::formatting::{format_currency, format_datetime, truncate_to_width};
use sellertui::logic::pipeline::count_in_stage;
use sellertui::model::{LoadState, Model};

use super::{badges, states};

/// Totals strip above the list
fn render_totals(f: &mut Frame, area: Rect, model: &Model) {
    let opportunities = &model.pipeline.opportunities;
    let count = opportunities.len();
    let line = Line::from(vec![
        Span::styled("Opportunities: ", Style::default().fg(Color::Gray)),
        Span::styled(count.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled("Pipeline value: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_currency(Some(model.pipeline.pipeline_value())),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Won: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_currency(Some(model.pipeline.won_value())),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({} deals)", count_in_stage(opportunities, OpportunityStage::ClosedWon)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Pipeline ")
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_opportunities(f: &mut Frame, area: Rect, model: &Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_totals(f, chunks[0], model);
    let list_area = chunks[1];

    let opportunities = &model.pipeline.opportunities;
    if opportunities.is_empty() {
        match &model.pipeline.load_state {
            LoadState::Loading => states::render_skeleton(f, list_area, "Opportunities"),
            LoadState::Failed(message) => states::render_error_state(f, list_area, message),
            _ => states::render_empty_state(
                f,
                list_area,
                "No opportunities yet",
                "Convert a qualified or contacted lead to start your pipeline.",
            ),
        }
        return;
    }

    let rows: Vec<Row> = opportunities
        .iter()
        .map(|opp| {
            Row::new(vec![
                Cell::from(truncate_to_width(&opp.name, 28)),
                Cell::from(truncate_to_width(&opp.account_name, 22)),
                Cell::from(badges::stage_badge(opp.stage)),
                Cell::from(format_currency(opp.amount)),
                Cell::from(format_datetime(&opp.created_at.with_timezone(&Local)))
                    .style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Name", "Account", "Stage", "Amount", "Created"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let widths = [
        Constraint::Length(28),
        Constraint::Length(22),
        Constraint::Length(14),
        Constraint::Length(18),
        Constraint::Min(16),
    ];

    let mut title = format!(" Opportunities ({}) ", opportunities.len());
    if model.pipeline.load_state == LoadState::Refreshing {
        title.push_str("⟳ Refreshing... ");
    }
    if let LoadState::Failed(message) = &model.pipeline.load_state {
        title.push_str(&format!("✗ {} ", message));
    }

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("► ");

    let mut state = TableState::default().with_selected(model.navigation.opportunity_selection);
    f.render_stateful_widget(table, list_area, &mut state);
}
