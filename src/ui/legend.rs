use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Which keys are live right now
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendContext {
    Leads,
    Opportunities,
    Search,
    Panel,
    Editing,
    Convert,
    Help,
}

fn key(label: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    context: LegendContext,
    has_search_query: bool,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    match context {
        LegendContext::Help => {
            hotkey_spans.extend(key("Esc/?", ":Close help"));
            return hotkey_spans;
        }
        LegendContext::Convert => {
            hotkey_spans.extend(key("Tab", ":Next field  "));
            hotkey_spans.extend(key("←/→", ":Stage  "));
            hotkey_spans.extend(key("Enter", ":Convert  "));
            hotkey_spans.extend(key("Esc", ":Cancel"));
            return hotkey_spans;
        }
        LegendContext::Search => {
            hotkey_spans.extend(key("Enter", ":Keep search  "));
            hotkey_spans.extend(key("Esc", ":Clear search"));
            return hotkey_spans;
        }
        LegendContext::Editing => {
            hotkey_spans.extend(key("Tab", ":Field  "));
            hotkey_spans.extend(key("←/→", ":Status  "));
            hotkey_spans.extend(key("^S", ":Save  "));
            hotkey_spans.extend(key("Esc", ":Cancel"));
            return hotkey_spans;
        }
        _ => {}
    }

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(key("j/k", ":Nav  "));
        hotkey_spans.extend(key("gg/G", ":First/Last  "));
        hotkey_spans.extend(key("^d/^u", ":Page  "));
    } else {
        hotkey_spans.extend(key("↑/↓", ":Nav  "));
        hotkey_spans.extend(key("Home/End", ":First/Last  "));
    }

    match context {
        LegendContext::Panel => {
            hotkey_spans.extend(key("e", ":Edit  "));
            hotkey_spans.extend(key("c", ":Convert  "));
            hotkey_spans.extend(key("Esc", ":Close  "));
        }
        LegendContext::Leads => {
            hotkey_spans.extend(key("Enter", ":Details  "));
            if has_search_query {
                hotkey_spans.extend(key("Esc", ":Clear Search  "));
            } else if vim_mode {
                hotkey_spans.extend(key("/", ":Search  "));
            } else {
                hotkey_spans.extend(key("^F", ":Search  "));
            }
            hotkey_spans.extend(key("f/F", ":Status  "));
            hotkey_spans.extend(key("1-4", ":Sort  "));
            hotkey_spans.extend(key("x", ":Clear filters  "));
            hotkey_spans.extend(key("c", ":Convert  "));
        }
        _ => {}
    }

    hotkey_spans.extend(key("Tab", ":Switch view  "));
    hotkey_spans.extend(key("r", ":Refresh  "));
    hotkey_spans.extend(key("?", ":Help  "));

    // Quit - always available outside dialogs
    hotkey_spans.extend(key("q", ":Quit"));

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    vim_mode: bool,
    context: LegendContext,
    has_search_query: bool,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, context, has_search_query));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    context: LegendContext,
    has_search_query: bool,
) {
    let legend = build_legend_paragraph(vim_mode, context, has_search_query);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    context: LegendContext,
    has_search_query: bool,
) -> u16 {
    // line_count() miscounts when a block is attached, so count the bare text
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, context, has_search_query));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}
