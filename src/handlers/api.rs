//! API Response Handler
//!
//! Settles fetches and mutations returned by the background worker.

use sellertui::logic::errors::{format_error_chain, format_error_message};

use crate::services::api::ApiResponse;
use crate::App;

/// Turn a worker result into the model's `Result<T, String>`, logging failures
fn user_result<T>(action: &str, result: anyhow::Result<T>) -> Result<T, String> {
    result.map_err(|e| {
        tracing::warn!(action, error = %format_error_chain(&e), "API call failed");
        format_error_message(&e)
    })
}

/// Handle API response from background worker
///
/// Response types:
/// - LeadsResult: Full lead collection (initial load or refresh)
/// - UpdateLeadResult: Confirmation or failure of an optimistic edit
/// - CreateOpportunityResult: Outcome of a lead conversion
/// - OpportunitiesResult: Opportunities known to the backend
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::LeadsResult { leads } => {
            let leads = user_result("get_leads", leads);
            if let Ok(leads) = &leads {
                tracing::info!(count = leads.len(), "leads loaded");
            }
            app.model.apply_fetched_leads(leads);
        }

        ApiResponse::UpdateLeadResult { lead_id, lead } => {
            let lead = user_result("update_lead", lead);
            if lead.is_err() {
                tracing::debug!(lead_id = %lead_id, "rolling back optimistic edit");
            }
            app.model.finish_lead_save(&lead_id, lead);
        }

        ApiResponse::CreateOpportunityResult { opportunity } => {
            let opportunity = user_result("create_opportunity", opportunity);
            if let Ok(opp) = &opportunity {
                tracing::info!(id = %opp.id, lead_id = %opp.lead_id, "opportunity created");
            }
            if app.model.finish_conversion(opportunity) {
                app.persist_opportunities();
            }
        }

        ApiResponse::OpportunitiesResult { opportunities } => {
            let opportunities = user_result("get_opportunities", opportunities);
            let added = app.model.apply_fetched_opportunities(opportunities);
            if added > 0 {
                app.persist_opportunities();
            }
        }
    }
}
