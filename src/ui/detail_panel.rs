//! Lead Detail Panel
//!
//! Side panel showing one lead, with an inline form for status and email.

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use sellertui::api::Lead;
use sellertui::logic::formatting::format_datetime;
use sellertui::logic::ui::detail_panel_hint;
use sellertui::model::{DetailPanelState, EditField};

use super::badges;

fn label(text: &str) -> Span<'static> {
    Span::styled(format!("{:<14}", text), Style::default().fg(Color::Gray))
}

fn field_line(name: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![label(name), value])
}

/// Read-only rows shared by both modes
fn info_lines(lead: &Lead) -> Vec<Line<'static>> {
    let last_activity = lead
        .last_activity
        .map(|at| format_datetime(&at.with_timezone(&Local)))
        .unwrap_or_else(|| "—".to_string());

    vec![
        field_line("Company", Span::raw(lead.company.clone())),
        field_line("Source", badges::source_badge(lead.source)),
        field_line("Score", badges::score_badge(lead.score)),
        field_line(
            "Created",
            Span::raw(format_datetime(&lead.created_at.with_timezone(&Local))),
        ),
        field_line("Last activity", Span::raw(last_activity)),
    ]
}

fn edit_lines(panel: &DetailPanelState) -> Vec<Line<'static>> {
    let focus_style = |field: EditField| {
        if panel.focus == field {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let mut lines = vec![
        Line::from(vec![
            label("Status"),
            Span::styled("◀ ", focus_style(EditField::Status)),
            badges::status_badge(panel.edit.status),
            Span::styled(" ▶", focus_style(EditField::Status)),
        ]),
        Line::from(vec![
            label("Email"),
            Span::styled(panel.edit.email.clone(), focus_style(EditField::Email)),
            if panel.focus == EditField::Email {
                Span::styled("█", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("")
            },
        ]),
    ];

    if let Some(err) = &panel.email_error {
        lines.push(Line::styled(
            format!("{:<14}{}", "", err),
            Style::default().fg(Color::Red),
        ));
    }

    lines
}

pub fn render_detail_panel(
    f: &mut Frame,
    area: Rect,
    lead: &Lead,
    panel: &DetailPanelState,
    can_convert: bool,
) {
    let mut lines = vec![
        Line::styled(
            lead.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];
    lines.extend(info_lines(lead));
    lines.push(Line::raw(""));

    if panel.editing {
        lines.extend(edit_lines(panel));
    } else {
        lines.push(field_line("Status", badges::status_badge(lead.status)));
        lines.push(field_line("Email", Span::raw(lead.email.clone())));
    }

    if panel.saving {
        lines.push(Line::raw(""));
        lines.push(Line::styled("Saving...", Style::default().fg(Color::Yellow)));
    }

    if let Some(err) = &panel.error {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("✗ {}", err),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    lines.push(Line::raw(""));
    let mut actions = Vec::new();
    if panel.editing {
        actions.extend([
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(":Field  "),
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(":Status  "),
        ]);
    } else if !panel.saving {
        actions.extend([
            Span::styled("e", Style::default().fg(Color::Yellow)),
            Span::raw(":Edit  "),
        ]);
        if can_convert {
            actions.extend([
                Span::styled("c", Style::default().fg(Color::Yellow)),
                Span::raw(":Convert to Opportunity  "),
            ]);
        }
    }
    lines.push(Line::from(actions));
    lines.push(Line::styled(
        detail_panel_hint(panel.editing),
        Style::default().fg(Color::DarkGray),
    ));

    let title = if panel.editing {
        " Lead Details (editing) "
    } else {
        " Lead Details "
    };
    let border_color = if panel.editing {
        Color::Cyan
    } else {
        Color::Gray
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
