//! Opportunity pipeline orchestration methods

use crate::services::api::ApiRequest;
use crate::App;

impl App {
    pub(crate) fn request_opportunities(&mut self) {
        if !self.model.begin_opportunities_fetch() {
            tracing::debug!("opportunities fetch already pending");
            return;
        }
        self.send(ApiRequest::GetOpportunities);
    }

    /// Write the whole opportunity collection to the key-value store
    pub(crate) fn persist_opportunities(&self) {
        let Some(store) = &self.store else {
            return;
        };
        match store.save_opportunities(&self.model.pipeline.opportunities) {
            Ok(()) => tracing::debug!(
                count = self.model.pipeline.opportunities.len(),
                "opportunities persisted"
            ),
            Err(e) => tracing::warn!(error = %format!("{:#}", e), "failed to persist opportunities"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{app_with_store, settle, temp_store_path};
    use sellertui::api::LeadStatus;
    use sellertui::model::StatusFilter;
    use sellertui::storage::KvStore;

    #[tokio::test]
    async fn test_conversion_result_is_written_to_the_store() {
        let path = temp_store_path("opportunities-persist");
        let mut app = app_with_store(&path);
        settle(&mut app, 2).await;

        app.model
            .set_status_filter(StatusFilter::Only(LeadStatus::Qualified));
        app.model.select_first_lead();
        app.start_conversion();
        assert!(app.model.ui.convert.is_some());
        app.model.convert_cycle_stage(true);
        app.submit_conversion();
        settle(&mut app, 1).await;

        assert_eq!(app.model.pipeline.opportunities.len(), 1);
        let stored = KvStore::open(Some(&path)).unwrap().load_opportunities();
        assert_eq!(stored, app.model.pipeline.opportunities);

        let _ = std::fs::remove_file(&path);
    }
}
