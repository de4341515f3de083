//! Filter orchestration methods
//!
//! Every change to search, status filter or sort is applied to the view
//! and written to the key-value store.

use sellertui::SortKey;

use crate::App;

impl App {
    pub(crate) fn set_search(&mut self, query: String) {
        self.model.set_search(query);
        self.persist_filters();
    }

    pub(crate) fn cycle_status_filter(&mut self, forward: bool) {
        self.model.cycle_status_filter(forward);
        self.persist_filters();
    }

    pub(crate) fn sort_by(&mut self, key: SortKey) {
        self.model.toggle_sort(key);
        self.persist_filters();
    }

    pub(crate) fn clear_filters(&mut self) {
        self.model.clear_filters();
        self.persist_filters();
    }

    fn persist_filters(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save_filters(&self.model.ui.filters) {
            tracing::warn!(error = %format!("{:#}", e), "failed to persist filters");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{app_with_store, settle, temp_store_path};
    use sellertui::storage::KvStore;
    use sellertui::{SortKey, SortOrder};

    #[tokio::test]
    async fn test_every_filter_change_is_written_to_the_store() {
        let path = temp_store_path("filters-persist");
        let mut app = app_with_store(&path);
        settle(&mut app, 2).await;

        app.sort_by(SortKey::Company);
        app.set_search("acme".to_string());
        app.cycle_status_filter(true);

        let stored = KvStore::open(Some(&path)).unwrap().load_filters();
        assert_eq!(stored, app.model.ui.filters);
        assert_eq!(stored.sort_by, SortKey::Company);
        assert_eq!(stored.sort_order, SortOrder::Desc);
        assert_eq!(stored.search, "acme");

        app.clear_filters();
        let stored = KvStore::open(Some(&path)).unwrap().load_filters();
        assert_eq!(stored, Default::default());

        // A restart picks the preferences back up
        app.sort_by(SortKey::Name);
        drop(app);
        let restarted = app_with_store(&path);
        assert_eq!(restarted.model.ui.filters.sort_by, SortKey::Name);

        let _ = std::fs::remove_file(&path);
    }
}
