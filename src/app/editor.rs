//! Lead edit orchestration methods
//!
//! The detail panel's edit form: typing and the optimistic save.

use chrono::Utc;
use sellertui::model::SaveBlocked;

use crate::services::api::ApiRequest;
use crate::App;

impl App {
    pub(crate) fn edit_email_input(&mut self, c: char) {
        if let Some(mut email) = self.editing_email() {
            email.push(c);
            self.model.set_edit_email(email);
        }
    }

    pub(crate) fn edit_email_backspace(&mut self) {
        if let Some(mut email) = self.editing_email() {
            email.pop();
            self.model.set_edit_email(email);
        }
    }

    fn editing_email(&self) -> Option<String> {
        self.model
            .ui
            .detail
            .as_ref()
            .filter(|panel| panel.editing)
            .map(|panel| panel.edit.email.clone())
    }

    /// Apply the edit locally and send the update
    pub(crate) fn save_lead(&mut self) {
        match self.model.begin_lead_save(Utc::now()) {
            Ok(pending) => {
                tracing::debug!(lead_id = %pending.lead_id, "optimistic update applied");
                self.send(ApiRequest::UpdateLead {
                    lead_id: pending.lead_id,
                    patch: pending.patch,
                });
            }
            Err(SaveBlocked::InvalidEmail) => {
                tracing::debug!("save blocked by invalid email");
            }
            Err(reason) => {
                tracing::debug!(?reason, "save ignored");
            }
        }
    }
}
