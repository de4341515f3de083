//! Tests for optimistic lead updates
//!
//! A save applies the edit to the visible record before the API answers.
//! When the call fails the record must read exactly as it did before the
//! save, whether or not the detail panel is still open.

use std::time::Duration;

use chrono::Utc;
use sellertui::api::{ApiSettings, LeadPatch, LeadStatus, SimulatedApi};
use sellertui::model::{Model, SaveBlocked, ToastKind};

/// Model and API sharing the bundled dataset, cursor on the first lead
async fn setup(failure_rate: f64) -> (Model, SimulatedApi) {
    let api = SimulatedApi::with_embedded_dataset(ApiSettings::instant(0.0)).unwrap();
    let mut model = Model::new(false, Duration::from_secs(3));
    model.begin_leads_fetch();
    model.apply_fetched_leads(api.get_leads().await.map_err(|e| e.to_string()));

    let failing = SimulatedApi::new(model.leads.records.clone(), ApiSettings::instant(failure_rate));
    (model, failing)
}

#[tokio::test]
async fn test_failed_update_restores_visible_record() {
    let (mut model, api) = setup(1.0).await;
    let before = model.selected_lead().unwrap().clone();

    assert!(model.open_detail());
    assert!(model.begin_edit());
    model.cycle_edit_status(true);
    model.set_edit_email("changed@example.com".to_string());

    let pending = model.begin_lead_save(Utc::now()).unwrap();
    // Edit is on screen while the call is in flight
    let optimistic = model.leads.find(&before.id).unwrap();
    assert_eq!(optimistic.email, "changed@example.com");
    assert_ne!(optimistic.status, before.status);

    let result = api.update_lead(&pending.lead_id, pending.patch).await;
    assert!(result.is_err());
    model.finish_lead_save(&pending.lead_id, result.map_err(|e| e.to_string()));

    assert_eq!(model.leads.find(&before.id), Some(&before));
    let panel = model.ui.detail.as_ref().unwrap();
    assert!(panel.editing, "form reopens for another try");
    assert!(!panel.saving);
    assert_eq!(
        panel.error.as_deref(),
        Some("Failed to update lead. Please try again.")
    );
}

#[tokio::test]
async fn test_failure_after_panel_closed_rolls_back_with_toast() {
    let (mut model, api) = setup(1.0).await;
    let before = model.selected_lead().unwrap().clone();

    model.open_detail();
    model.begin_edit();
    model.set_edit_email("other@example.com".to_string());
    let pending = model.begin_lead_save(Utc::now()).unwrap();
    model.close_detail();

    let result = api.update_lead(&pending.lead_id, pending.patch).await;
    model.finish_lead_save(&pending.lead_id, result.map_err(|e| e.to_string()));

    assert_eq!(model.leads.find(&before.id), Some(&before));
    let toast = model.ui.toasts.current().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
}

#[tokio::test]
async fn test_confirmed_update_keeps_the_edit() {
    let (mut model, api) = setup(0.0).await;
    let id = model.selected_lead().unwrap().id.clone();

    model.open_detail();
    model.begin_edit();
    model.set_edit_email("new.address@example.com".to_string());
    let pending = model.begin_lead_save(Utc::now()).unwrap();

    let result = api.update_lead(&pending.lead_id, pending.patch).await;
    model.finish_lead_save(&pending.lead_id, result.map_err(|e| e.to_string()));

    let lead = model.leads.find(&id).unwrap();
    assert_eq!(lead.email, "new.address@example.com");
    assert!(lead.last_activity.is_some());
    assert!(model.leads.save_snapshot.is_none());
    assert_eq!(model.ui.toasts.current().unwrap().message, "Lead updated");

    // The session copy of the dataset serves the confirmed record
    let refetched = api.get_leads().await.unwrap();
    let served = refetched.iter().find(|l| l.id == id).unwrap();
    assert_eq!(served.email, "new.address@example.com");
}

#[tokio::test]
async fn test_invalid_email_blocks_save_before_any_call() {
    let (mut model, _api) = setup(0.0).await;
    let before = model.selected_lead().unwrap().clone();

    model.open_detail();
    model.begin_edit();
    model.set_edit_email("not-an-email".to_string());
    assert!(!model.can_save());

    assert_eq!(
        model.begin_lead_save(Utc::now()),
        Err(SaveBlocked::InvalidEmail)
    );
    assert_eq!(model.leads.find(&before.id), Some(&before));
    assert!(model.leads.save_snapshot.is_none());
}

#[tokio::test]
async fn test_refresh_during_save_keeps_optimistic_record() {
    let (mut model, api) = setup(0.0).await;
    let id = model.selected_lead().unwrap().id.clone();

    model.open_detail();
    model.begin_edit();
    model.set_edit_email("pending@example.com".to_string());
    let _pending = model.begin_lead_save(Utc::now()).unwrap();

    // A fetch that lands before the update answers still carries the old email
    assert!(model.begin_leads_fetch());
    model.apply_fetched_leads(api.get_leads().await.map_err(|e| e.to_string()));

    assert_eq!(model.leads.find(&id).unwrap().email, "pending@example.com");
}

#[tokio::test]
async fn test_update_of_unknown_lead_is_not_found() {
    let api = SimulatedApi::with_embedded_dataset(ApiSettings::instant(0.0)).unwrap();
    let err = api
        .update_lead(
            "no-such-lead",
            LeadPatch {
                status: Some(LeadStatus::Lost),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Lead not found");
}
