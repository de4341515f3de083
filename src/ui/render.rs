use crate::App;
use ratatui::Frame;

use sellertui::model::{Model, View};

use super::{
    detail_panel, dialogs, header, layout, lead_table, legend, legend::LegendContext,
    opportunities, search, status_bar, toast,
};

/// Hotkeys to advertise for the current input layer
fn legend_context(model: &Model) -> LegendContext {
    if model.ui.show_help {
        LegendContext::Help
    } else if model.ui.convert.is_some() {
        LegendContext::Convert
    } else if model.ui.search_mode {
        LegendContext::Search
    } else if model.active_detail().is_some_and(|panel| panel.editing) {
        LegendContext::Editing
    } else if model.active_detail().is_some() {
        LegendContext::Panel
    } else if model.navigation.view == View::Opportunities {
        LegendContext::Opportunities
    } else {
        LegendContext::Leads
    }
}

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let model = &app.model;
    let size = f.area();

    let in_leads = model.navigation.view == View::Leads;
    let context = legend_context(model);
    let has_search_query = !model.ui.filters.search.is_empty();
    let legend_height =
        legend::calculate_legend_height(size.width, model.ui.vim_mode, context, has_search_query);

    let detail = model.active_detail().zip(model.detail_lead());

    let layout_info = layout::calculate_layout(size, in_leads, detail.is_some(), legend_height);

    header::render_header(
        f,
        layout_info.header_area,
        model.navigation.view,
        model.leads.records.len(),
        model.pipeline.opportunities.len(),
    );

    if let Some(filter_area) = layout_info.filter_area {
        search::render_filter_bar(
            f,
            filter_area,
            &model.ui.filters,
            model.ui.search_mode,
            model.ui.vim_mode,
        );
    }

    match model.navigation.view {
        View::Leads => {
            let focused = detail.is_none() && !model.has_modal();
            lead_table::render_lead_table(f, layout_info.content_area, model, focused)
        }
        View::Opportunities => opportunities::render_opportunities(f, layout_info.content_area, model),
    }

    if let (Some(area), Some((panel, lead))) = (layout_info.detail_area, detail) {
        detail_panel::render_detail_panel(f, area, lead, panel, model.can_convert());
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        context,
        has_search_query,
    );

    status_bar::render_status_bar(f, layout_info.status_area, model);

    // Dialogs draw over everything else
    if let Some(form) = &model.ui.convert {
        dialogs::render_convert_dialog(f, form);
    }
    if model.ui.show_help {
        dialogs::render_help(f, model.ui.vim_mode);
    }

    if let Some(current) = model.ui.toasts.current() {
        toast::render_toast(f, size, current, model.ui.toasts.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_legend_context_layers() {
        let mut model = Model::new(false, Duration::from_secs(3));
        assert_eq!(legend_context(&model), LegendContext::Leads);

        model.ui.search_mode = true;
        assert_eq!(legend_context(&model), LegendContext::Search);

        model.ui.show_help = true;
        assert_eq!(legend_context(&model), LegendContext::Help);

        model.ui.show_help = false;
        model.ui.search_mode = false;
        model.navigation.toggle_view();
        assert_eq!(legend_context(&model), LegendContext::Opportunities);
    }
}
