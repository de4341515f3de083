//! Search and Filter Box
//!
//! Renders the search input, status filter, sort and the active-filters line.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use sellertui::model::{FilterState, StatusFilter};

use super::badges;

/// Render the filter box above the lead table
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `filters`: Current search/status/sort preferences
/// - `active`: Whether search input is receiving keystrokes
/// - `vim_mode`: Whether vim keybindings are enabled
pub fn render_filter_bar(
    f: &mut Frame,
    area: Rect,
    filters: &FilterState,
    active: bool,
    vim_mode: bool,
) {
    let title = if active {
        " Search - Enter to keep, Esc to cancel ".to_string()
    } else {
        let search_key = if vim_mode { "/" } else { "/ or ^F" };
        format!(" Search ({}) ", search_key)
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let mut search_line = vec![Span::styled("Search: ", Style::default().fg(Color::Gray))];
    if filters.search.is_empty() && !active {
        search_line.push(Span::styled(
            "Search by name or company...",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        search_line.push(Span::raw(filters.search.clone()));
    }
    if active {
        search_line.push(Span::styled("█", cursor_style));
    }
    search_line.extend(vec![
        Span::raw("   "),
        Span::styled("Status: ", Style::default().fg(Color::Gray)),
        Span::raw(filters.status.label()),
        Span::raw("   "),
        Span::styled("Sort: ", Style::default().fg(Color::Gray)),
        Span::raw(format!(
            "{}{}",
            filters.sort_by.as_str(),
            filters.sort_order.arrow()
        )),
    ]);

    let paragraph = Paragraph::new(vec![
        Line::from(search_line),
        active_filters_line(filters),
    ])
    .block(block);

    f.render_widget(paragraph, area);
}

/// "Active filters" summary; empty when nothing narrows the list
fn active_filters_line(filters: &FilterState) -> Line<'static> {
    let mut spans = Vec::new();

    if !filters.search.is_empty() || filters.status != StatusFilter::All {
        spans.push(Span::styled(
            "Active filters: ",
            Style::default().fg(Color::Gray),
        ));
    }
    if !filters.search.is_empty() {
        spans.push(Span::styled(
            format!("Search: \"{}\"", filters.search),
            Style::default().fg(Color::Blue),
        ));
        spans.push(Span::raw(" "));
    }
    if let StatusFilter::Only(status) = filters.status {
        spans.push(badges::status_badge(status));
        spans.push(Span::raw(" "));
    }
    if !spans.is_empty() {
        spans.push(Span::styled(
            " x:Clear all",
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sellertui::api::LeadStatus;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_no_active_filters_line_by_default() {
        let line = active_filters_line(&FilterState::default());
        assert!(line.spans.is_empty());
    }

    #[test]
    fn test_active_filters_line_lists_search_and_status() {
        let filters = FilterState {
            search: "acme".to_string(),
            status: StatusFilter::Only(LeadStatus::Qualified),
            ..Default::default()
        };
        let text = line_text(&active_filters_line(&filters));
        assert!(text.contains("Search: \"acme\""));
        assert!(text.contains("Qualified"));
        assert!(text.contains("Clear all"));
    }
}
