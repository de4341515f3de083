use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use sellertui::model::{Toast, ToastKind};

/// Render a toast notification in the top-right corner
///
/// `queued` is how many more toasts wait behind this one.
pub fn render_toast(f: &mut Frame, area: Rect, toast: &Toast, queued: usize) {
    let max_width = (area.width as usize).min(60);
    let toast_width = (toast.message.width() + 6).min(max_width) as u16;
    let toast_height = 3;

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width + 1),
        y: area.y + 1,
        width: toast_width,
        height: toast_height.min(area.height),
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let (icon, color) = match toast.kind {
        ToastKind::Success => ("✓ ", Color::Green),
        ToastKind::Error => ("✗ ", Color::Red),
    };

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(toast.message.clone()),
    ]);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    if queued > 0 {
        block = block.title(format!(" +{} ", queued));
    }

    let toast_text = Paragraph::new(vec![toast_line])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}
