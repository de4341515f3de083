//! Tests for lead → opportunity conversion
//!
//! Covers the dialog validation, the create call against the simulated API,
//! and persisting the resulting opportunity list.

use std::time::Duration;

use sellertui::api::{ApiSettings, LeadStatus, OpportunityStage, SimulatedApi};
use sellertui::model::{ConvertField, Model, StatusFilter};
use sellertui::storage::KvStore;

/// Model with the bundled dataset and the cursor on "Ana Souza" of Acme Corp
async fn model_on_acme(api: &SimulatedApi) -> Model {
    let mut model = Model::new(false, Duration::from_secs(3));
    model.begin_leads_fetch();
    model.apply_fetched_leads(api.get_leads().await.map_err(|e| e.to_string()));
    model.set_search("Acme Corp".to_string());
    model.select_first_lead();
    assert_eq!(model.selected_lead().unwrap().company, "Acme Corp");
    model
}

#[tokio::test]
async fn test_acme_conversion_creates_matching_opportunity() {
    let api = SimulatedApi::with_embedded_dataset(ApiSettings::instant(0.0)).unwrap();
    let mut model = model_on_acme(&api).await;

    assert!(model.open_convert());
    {
        let form = model.ui.convert.as_mut().unwrap();
        form.name = "Acme Corp Lead".to_string();
        form.account_name = "Acme Corp".to_string();
        form.stage = Some(OpportunityStage::Proposal);
        form.amount = "5000".to_string();
    }

    let draft = model.begin_conversion().expect("form is valid");
    assert!(model.ui.convert.as_ref().unwrap().converting);

    let result = api.create_opportunity(draft).await;
    assert!(model.finish_conversion(result.map_err(|e| e.to_string())));

    assert!(model.ui.convert.is_none());
    let opp = &model.pipeline.opportunities[0];
    assert_eq!(opp.name, "Acme Corp Lead");
    assert_eq!(opp.account_name, "Acme Corp");
    assert_eq!(opp.stage, OpportunityStage::Proposal);
    assert_eq!(opp.amount, Some(5000.0));
    assert!(opp.id.starts_with("opp-"));
    assert_eq!(
        model.ui.toasts.current().unwrap().message,
        "Opportunity \"Acme Corp Lead\" created"
    );
}

#[tokio::test]
async fn test_missing_stage_and_bad_amount_block_conversion() {
    let api = SimulatedApi::with_embedded_dataset(ApiSettings::instant(0.0)).unwrap();
    let mut model = model_on_acme(&api).await;
    model.open_convert();

    // Tab to the amount field and type something that is not a number
    for _ in 0..3 {
        model.convert_move_focus(true);
    }
    assert_eq!(model.ui.convert.as_ref().unwrap().focus, ConvertField::Amount);
    for c in "12abc".chars() {
        model.convert_input(c);
    }

    assert!(model.begin_conversion().is_none());
    let form = model.ui.convert.as_ref().unwrap();
    assert!(!form.converting);
    assert_eq!(form.field_errors.stage.as_deref(), Some("Stage is required"));
    assert_eq!(
        form.field_errors.amount.as_deref(),
        Some("Amount must be a valid number")
    );
    assert!(form.field_errors.name.is_none());
    assert!(model.pipeline.opportunities.is_empty());
}

#[tokio::test]
async fn test_failed_create_keeps_dialog_open_with_error() {
    let api = SimulatedApi::with_embedded_dataset(ApiSettings::instant(0.0)).unwrap();
    let mut model = model_on_acme(&api).await;
    model.open_convert();
    model.convert_move_focus(true);
    model.convert_move_focus(true);
    model.convert_cycle_stage(true);

    let draft = model.begin_conversion().unwrap();
    let failing = SimulatedApi::new(Vec::new(), ApiSettings::instant(1.0));
    let result = failing.create_opportunity(draft).await;
    assert!(!model.finish_conversion(result.map_err(|e| e.to_string())));

    let form = model.ui.convert.as_ref().unwrap();
    assert!(!form.converting);
    assert_eq!(
        form.error.as_deref(),
        Some("Failed to create opportunity. Please try again.")
    );
    assert!(model.pipeline.opportunities.is_empty());
}

#[tokio::test]
async fn test_only_qualified_or_contacted_leads_convert() {
    let api = SimulatedApi::with_embedded_dataset(ApiSettings::instant(0.0)).unwrap();
    let mut model = Model::new(false, Duration::from_secs(3));
    model.apply_fetched_leads(api.get_leads().await.map_err(|e| e.to_string()));

    for status in LeadStatus::ALL {
        model.set_status_filter(StatusFilter::Only(status));
        model.select_first_lead();
        if model.selected_lead().is_none() {
            continue;
        }
        assert_eq!(model.can_convert(), status.can_convert(), "{:?}", status);
        assert_eq!(model.open_convert(), status.can_convert(), "{:?}", status);
        model.ui.convert = None;
    }
}

#[tokio::test]
async fn test_converted_opportunities_survive_reopening_the_store() {
    let path = std::env::temp_dir().join(format!(
        "sellertui-conversion-test-{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let api = SimulatedApi::with_embedded_dataset(ApiSettings::instant(0.0)).unwrap();
    let mut model = model_on_acme(&api).await;
    model.open_convert();
    model.ui.convert.as_mut().unwrap().stage = Some(OpportunityStage::Negotiation);
    let draft = model.begin_conversion().unwrap();
    model.finish_conversion(api.create_opportunity(draft).await.map_err(|e| e.to_string()));

    {
        let store = KvStore::open(Some(&path)).unwrap();
        store.save_opportunities(&model.pipeline.opportunities).unwrap();
    }

    let reopened = KvStore::open(Some(&path)).unwrap();
    assert_eq!(reopened.load_opportunities(), model.pipeline.opportunities);

    let _ = std::fs::remove_file(&path);
}
