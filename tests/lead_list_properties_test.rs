//! Tests for lead list filtering and sorting
//!
//! The visible list is derived from the full collection on every change to
//! search, status filter or sort. These tests run the derivation through the
//! Model, the same path key presses take.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use sellertui::api::{parse_leads, Lead, LeadSource, LeadStatus};
use sellertui::model::{Model, StatusFilter};
use sellertui::{SortKey, SortOrder};

fn lead(id: &str, name: &str, company: &str, score: u8, status: LeadStatus) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        email: format!("{}@example.com", id),
        source: LeadSource::Website,
        score,
        status,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        last_activity: None,
    }
}

/// Model loaded with the bundled dataset
fn dataset_model() -> Model {
    let leads = parse_leads(include_str!("../data/leads.json")).expect("dataset parses");
    let mut model = Model::new(false, Duration::from_secs(3));
    model.begin_leads_fetch();
    model.apply_fetched_leads(Ok(leads));
    model
}

fn visible_ids(model: &Model) -> Vec<String> {
    model.visible_leads().map(|l| l.id.clone()).collect()
}

#[test]
fn test_status_filter_yields_only_that_status() {
    let mut model = dataset_model();

    for status in LeadStatus::ALL {
        model.set_status_filter(StatusFilter::Only(status));
        assert!(
            model.visible_leads().all(|l| l.status == status),
            "filter {:?} leaked other statuses",
            status
        );
        assert_eq!(model.leads.visible.len(), model.status_count(status));
    }
}

#[test]
fn test_search_matches_name_or_company_and_excludes_the_rest() {
    let mut model = dataset_model();

    for query in ["acme", "ANA", "tech", "zzz-no-match"] {
        model.set_search(query.to_string());
        let needle = query.to_lowercase();
        let visible = visible_ids(&model);

        for lead in &model.leads.records {
            let matches = lead.name.to_lowercase().contains(&needle)
                || lead.company.to_lowercase().contains(&needle);
            assert_eq!(
                visible.contains(&lead.id),
                matches,
                "query {:?} misclassified {} ({} / {})",
                query,
                lead.id,
                lead.name,
                lead.company
            );
        }
    }
}

#[test]
fn test_score_sort_directions_are_reversed() {
    let mut model = Model::new(false, Duration::from_secs(3));
    model.apply_fetched_leads(Ok(vec![
        lead("a", "Alpha", "One", 40, LeadStatus::New),
        lead("b", "Bravo", "Two", 95, LeadStatus::Qualified),
        lead("c", "Charlie", "Three", 12, LeadStatus::Contacted),
        lead("d", "Delta", "Four", 71, LeadStatus::New),
    ]));

    assert_eq!(model.ui.filters.sort_by, SortKey::Score);
    assert_eq!(model.ui.filters.sort_order, SortOrder::Desc);
    let desc = visible_ids(&model);
    assert_eq!(desc, vec!["b", "d", "a", "c"]);

    // Same key again flips the direction
    model.toggle_sort(SortKey::Score);
    assert_eq!(model.ui.filters.sort_order, SortOrder::Asc);
    let mut asc = visible_ids(&model);
    asc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn test_filters_combine_and_clear() {
    let mut model = dataset_model();
    let total = model.leads.records.len();

    model.set_search("acme".to_string());
    model.set_status_filter(StatusFilter::Only(LeadStatus::Qualified));
    assert!(model.has_active_filters());
    assert!(model
        .visible_leads()
        .all(|l| l.status == LeadStatus::Qualified
            && (l.name.to_lowercase().contains("acme")
                || l.company.to_lowercase().contains("acme"))));

    model.clear_filters();
    assert!(!model.has_active_filters());
    assert_eq!(model.leads.visible.len(), total);
}

#[test]
fn test_selection_follows_lead_across_resort() {
    let mut model = Model::new(false, Duration::from_secs(3));
    model.apply_fetched_leads(Ok(vec![
        lead("a", "Alpha", "One", 40, LeadStatus::New),
        lead("b", "Bravo", "Two", 95, LeadStatus::Qualified),
        lead("c", "Charlie", "Three", 12, LeadStatus::Contacted),
    ]));

    // Descending score: b, a, c; put the cursor on "a"
    model.move_lead_selection(1);
    assert_eq!(model.selected_lead().unwrap().id, "a");

    model.toggle_sort(SortKey::Name);
    assert_eq!(model.selected_lead().unwrap().id, "a");
}
