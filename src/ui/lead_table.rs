use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use sellertui::api::LeadStatus;
use sellertui::logic::formatting::{format_datetime, truncate_to_width};
use sellertui::logic::ui::empty_leads_message;
use sellertui::model::{LoadState, Model};
use sellertui::SortKey;

use super::{badges, states};

/// Column header, with the sort arrow on the active key
fn header_cell(label: &str, key: Option<SortKey>, model: &Model) -> Cell<'static> {
    let filters = &model.ui.filters;
    match key {
        Some(key) if key == filters.sort_by => Cell::from(format!(
            "{}{}",
            label,
            filters.sort_order.arrow()
        ))
        .style(Style::default().fg(Color::Cyan)),
        _ => Cell::from(label.to_string()),
    }
}

/// Title: "N of M leads" on the left, status counts on the right
fn table_block(model: &Model) -> Block<'static> {
    let shown = model.leads.visible.len();
    let total = model.leads.records.len();

    let mut title = vec![Span::styled(
        format!(" Leads · {} of {} leads ", shown, total),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if model.leads.load_state == LoadState::Refreshing {
        title.push(Span::styled(
            "⟳ Refreshing... ",
            Style::default().fg(Color::Yellow),
        ));
    }

    let counts = Line::from(
        [LeadStatus::Qualified, LeadStatus::New, LeadStatus::Contacted]
            .into_iter()
            .flat_map(|status| {
                [
                    Span::styled("● ", Style::default().fg(badges::status_color(status))),
                    Span::raw(format!("{}: {}  ", status, model.status_count(status))),
                ]
            })
            .collect::<Vec<_>>(),
    )
    .alignment(Alignment::Right);

    Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title))
        .title(counts)
}

/// Render the lead list: skeleton, error, empty state or the table
pub fn render_lead_table(f: &mut Frame, area: Rect, model: &Model, focused: bool) {
    match &model.leads.load_state {
        LoadState::Idle | LoadState::Loading => {
            states::render_skeleton(f, area, "Leads");
            return;
        }
        LoadState::Failed(message) => {
            states::render_error_state(f, area, message);
            return;
        }
        LoadState::Refreshing | LoadState::Ready => {}
    }

    if model.leads.visible.is_empty() {
        states::render_empty_state(
            f,
            area,
            "No leads found",
            empty_leads_message(model.has_active_filters()),
        );
        return;
    }

    let name_width = 22;
    let company_width = 20;
    let email_width = 28;

    let rows: Vec<Row> = model
        .visible_leads()
        .map(|lead| {
            let created = lead.created_at.with_timezone(&Local);
            Row::new(vec![
                Cell::from(truncate_to_width(&lead.name, name_width)),
                Cell::from(truncate_to_width(&lead.company, company_width)),
                Cell::from(truncate_to_width(&lead.email, email_width))
                    .style(Style::default().fg(Color::Gray)),
                Cell::from(badges::source_badge(lead.source)),
                Cell::from(badges::score_badge(lead.score)),
                Cell::from(badges::status_badge(lead.status)),
                Cell::from(format_datetime(&created)).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let header = Row::new(vec![
        header_cell("Name", Some(SortKey::Name), model),
        header_cell("Company", Some(SortKey::Company), model),
        header_cell("Email", None, model),
        header_cell("Source", None, model),
        header_cell("Score", Some(SortKey::Score), model),
        header_cell("Status", None, model),
        header_cell("Created", Some(SortKey::CreatedAt), model),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let widths = [
        Constraint::Length(name_width as u16),
        Constraint::Length(company_width as u16),
        Constraint::Length(email_width as u16),
        Constraint::Length(14),
        Constraint::Length(6),
        Constraint::Length(11),
        Constraint::Min(16),
    ];

    let highlight = if focused {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::Black)
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(table_block(model))
        .row_highlight_style(highlight)
        .highlight_symbol("► ");

    let mut state = TableState::default().with_selected(model.navigation.lead_selection);
    f.render_stateful_widget(table, area, &mut state);
}
