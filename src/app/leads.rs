//! Lead list orchestration methods
//!
//! Fetching the collection and moving the cursor of the active view.

use sellertui::model::View;

use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Start a leads fetch unless one is already running
    pub(crate) fn request_leads(&mut self) {
        if !self.model.begin_leads_fetch() {
            tracing::debug!("leads fetch already pending");
            return;
        }
        self.send(ApiRequest::GetLeads);
    }

    /// Reload whatever the active view shows
    pub(crate) fn refresh_current_view(&mut self) {
        match self.model.navigation.view {
            View::Leads => self.request_leads(),
            View::Opportunities => self.request_opportunities(),
        }
    }

    pub(crate) fn move_selection(&mut self, delta: isize) {
        match self.model.navigation.view {
            View::Leads => self.model.move_lead_selection(delta),
            View::Opportunities => self.model.move_opportunity_selection(delta),
        }
    }

    pub(crate) fn select_first(&mut self) {
        match self.model.navigation.view {
            View::Leads => self.model.select_first_lead(),
            View::Opportunities => {
                let len = self.model.pipeline.opportunities.len();
                self.model.navigation.opportunity_selection = (len > 0).then_some(0);
            }
        }
    }

    pub(crate) fn select_last(&mut self) {
        match self.model.navigation.view {
            View::Leads => self.model.select_last_lead(),
            View::Opportunities => {
                let len = self.model.pipeline.opportunities.len();
                self.model.navigation.opportunity_selection = len.checked_sub(1);
            }
        }
    }

    /// Move the list cursor and show the newly selected lead in the panel
    pub(crate) fn follow_in_panel(&mut self, delta: isize) {
        self.model.move_lead_selection(delta);
        let same_lead = match (&self.model.ui.detail, self.model.selected_lead()) {
            (Some(panel), Some(lead)) => panel.lead_id == lead.id,
            _ => false,
        };
        if !same_lead {
            self.model.open_detail();
        }
    }
}
