use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use sellertui::model::{ConvertField, ConvertFormState};

use super::{badges, layout::centered_rect};

fn field_label(field: ConvertField) -> &'static str {
    match field {
        ConvertField::Name => "Opportunity name *",
        ConvertField::AccountName => "Account name *",
        ConvertField::Stage => "Stage *",
        ConvertField::Amount => "Amount (optional)",
    }
}

/// Lines for one form field: label, value, and the error if any
fn field_lines(form: &ConvertFormState, field: ConvertField) -> Vec<Line<'static>> {
    let focused = form.focus == field && !form.converting;
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let value: Vec<Span<'static>> = match field {
        ConvertField::Stage => match form.stage {
            Some(stage) => vec![
                Span::styled("◀ ", label_style),
                badges::stage_badge(stage),
                Span::styled(" ▶", label_style),
            ],
            None => vec![Span::styled(
                "◀ Select a stage ▶",
                Style::default().fg(Color::DarkGray),
            )],
        },
        ConvertField::Name => vec![Span::raw(form.name.clone())],
        ConvertField::AccountName => vec![Span::raw(form.account_name.clone())],
        ConvertField::Amount if form.amount.is_empty() && !focused => {
            vec![Span::styled("0,00", Style::default().fg(Color::DarkGray))]
        }
        ConvertField::Amount => vec![Span::raw(form.amount.clone())],
    };

    let mut value_line = vec![Span::styled(
        if focused { "> " } else { "  " },
        label_style,
    )];
    value_line.extend(value);
    if focused && field != ConvertField::Stage {
        value_line.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }

    let mut lines = vec![
        Line::styled(field_label(field), label_style),
        Line::from(value_line),
    ];
    if let Some(err) = form.field_errors.get(field) {
        lines.push(Line::styled(
            format!("  {}", err),
            Style::default().fg(Color::Red),
        ));
    }
    lines
}

/// Render the lead conversion dialog
pub fn render_convert_dialog(f: &mut Frame, form: &ConvertFormState) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Lead: ", Style::default().fg(Color::Gray)),
            Span::styled(
                form.lead_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
    ];
    for field in ConvertField::ORDER {
        lines.extend(field_lines(form, field));
        lines.push(Line::raw(""));
    }

    if let Some(err) = &form.error {
        lines.push(Line::styled(
            format!("✗ {}", err),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    if form.converting {
        lines.push(Line::styled(
            "Converting...",
            Style::default().fg(Color::Yellow),
        ));
    } else {
        lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":Convert  "),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(":Next field  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(":Cancel"),
        ]));
    }

    let height = lines.len() as u16 + 2;
    let area = centered_rect(f.area(), 56, height);

    let dialog = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Convert to Opportunity ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

/// Key binding reference
fn help_lines(vim_mode: bool) -> Vec<Line<'static>> {
    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let entry = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", keys), Style::default().fg(Color::Yellow)),
            Span::raw(action),
        ])
    };

    let mut lines = vec![
        section("Navigation"),
        entry("↑/↓", "Move selection"),
        entry("PgUp/PgDn", "Move by a page"),
        entry("Home/End", "First / last row"),
    ];
    if vim_mode {
        lines.extend([
            entry("j/k", "Move selection"),
            entry("^u/^d", "Move by a page"),
            entry("gg/G", "First / last row"),
        ]);
    }
    lines.extend([
        entry("Tab", "Switch Leads / Opportunities"),
        entry("r", "Refresh current view"),
        Line::raw(""),
        section("Leads"),
        entry("Enter", "Open lead details"),
        entry(if vim_mode { "/" } else { "/ or ^F" }, "Search name or company"),
        entry("f / F", "Next / previous status filter"),
        entry("1 2 3 4", "Sort by score, name, company, date"),
        entry("x", "Clear all filters"),
        entry("c", "Convert to opportunity"),
        Line::raw(""),
        section("Lead details"),
        entry("e", "Edit status and email"),
        entry("Tab", "Switch field"),
        entry("←/→", "Change status"),
        entry("^S / Enter", "Save"),
        entry("Esc", "Cancel / close"),
        Line::raw(""),
        entry("q / ^C", "Quit"),
    ]);
    lines
}

/// Render the help overlay
pub fn render_help(f: &mut Frame, vim_mode: bool) {
    let lines = help_lines(vim_mode);
    let area = centered_rect(f.area(), 58, lines.len() as u16 + 2);

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help (Esc to close) ")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
