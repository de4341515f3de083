use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Title bar with view tabs
    pub header_area: Rect,
    /// Search and filter box (lead view only)
    pub filter_area: Option<Rect>,
    /// List/table area
    pub content_area: Rect,
    /// Lead detail side panel (if open)
    pub detail_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Rows of the filter box: border, search line, active-filters line, border
const FILTER_HEIGHT: u16 = 4;

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    show_filters: bool,
    detail_open: bool,
    legend_height: u16,
) -> LayoutInfo {
    let filter_height = if show_filters { FILTER_HEIGHT } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header (border, text, border)
            Constraint::Length(filter_height), // Filters (hidden in pipeline view)
            Constraint::Min(5),                // Content
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(1),             // Status bar
        ])
        .split(terminal_size);

    let body = main_chunks[2];
    let (content_area, detail_area) = if detail_open {
        // Panel takes the right side; never narrower than the form needs
        let panel_width = (body.width * 2 / 5).max(44).min(body.width);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(panel_width)])
            .split(body);
        (chunks[0], Some(chunks[1]))
    } else {
        (body, None)
    };

    LayoutInfo {
        header_area: main_chunks[0],
        filter_area: show_filters.then_some(main_chunks[1]),
        content_area,
        detail_area,
        legend_area: main_chunks[3],
        status_area: main_chunks[4],
    }
}

/// Rect of `width` x `height` centered in `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
