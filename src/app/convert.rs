//! Conversion orchestration methods
//!
//! Opening the dialog for a warm lead and submitting the create request.

use sellertui::model::ToastKind;

use crate::services::api::ApiRequest;
use crate::App;

impl App {
    pub(crate) fn start_conversion(&mut self) {
        if self.model.open_convert() {
            return;
        }
        // Explain why nothing opened when a lead is selected
        if let Some(lead) = self.model.detail_lead().or(self.model.selected_lead()) {
            if !lead.status.can_convert() {
                let message = format!("{} leads cannot be converted", lead.status);
                self.model.show_toast(message, ToastKind::Error);
            }
        }
    }

    pub(crate) fn submit_conversion(&mut self) {
        let Some(draft) = self.model.begin_conversion() else {
            return;
        };
        tracing::debug!(lead_id = %draft.lead_id, stage = %draft.stage, "creating opportunity");
        self.send(ApiRequest::CreateOpportunity { draft });
    }
}
