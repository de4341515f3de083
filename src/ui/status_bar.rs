use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use sellertui::logic::formatting::format_currency;
use sellertui::model::{LoadState, Model, View};

fn load_label(state: &LoadState) -> &'static str {
    match state {
        LoadState::Idle => "Idle",
        LoadState::Loading => "Loading...",
        LoadState::Refreshing => "Refreshing...",
        LoadState::Ready => "Ready",
        LoadState::Failed(_) => "Failed",
    }
}

/// Text of the bottom line (extracted for testability)
fn status_text(model: &Model) -> String {
    match model.navigation.view {
        View::Leads => {
            let selected = model
                .selected_lead()
                .map(|lead| format!("Lead: {} ({})", lead.name, lead.company))
                .unwrap_or_else(|| "No lead selected".to_string());
            format!(
                "{:<40} │ {:>14} │ Sort: {}{} │ {}",
                selected,
                load_label(&model.leads.load_state),
                model.ui.filters.sort_by.as_str(),
                model.ui.filters.sort_order.arrow(),
                if model.ui.vim_mode { "vim" } else { "" },
            )
        }
        View::Opportunities => {
            let selected = model
                .selected_opportunity()
                .map(|opp| format!("Opportunity: {}", opp.name))
                .unwrap_or_else(|| "No opportunity selected".to_string());
            format!(
                "{:<40} │ {:>14} │ Pipeline: {} │ {}",
                selected,
                load_label(&model.pipeline.load_state),
                format_currency(Some(model.pipeline.pipeline_value())),
                if model.ui.vim_mode { "vim" } else { "" },
            )
        }
    }
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model) {
    let line = Line::from(vec![Span::styled(
        status_text(model),
        Style::default().fg(Color::Gray),
    )]);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Black)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_text_without_selection() {
        let model = Model::new(false, Duration::from_secs(3));
        let text = status_text(&model);
        assert!(text.contains("No lead selected"));
        assert!(text.contains("Idle"));
    }

    #[test]
    fn test_status_text_in_pipeline_view() {
        let mut model = Model::new(true, Duration::from_secs(3));
        model.navigation.toggle_view();
        let text = status_text(&model);
        assert!(text.contains("No opportunity selected"));
        assert!(text.contains("Pipeline: —"));
        assert!(text.ends_with("vim"));
    }
}
