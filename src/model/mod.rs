//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models for maintainability:
//!
//! - **LeadsModel**: Lead collection, fetch state, derived visible ordering
//! - **PipelineModel**: Opportunities and their fetch state
//! - **NavigationModel**: Active view and list cursors
//! - **UiModel**: Filter preferences, detail panel, conversion dialog, toasts
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No services: All I/O lives in the App and the API worker
//! - State transitions return what the App has to send or persist

pub mod leads;
pub mod navigation;
pub mod pipeline;
pub mod types;
pub mod ui;

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

pub use leads::LeadsModel;
pub use navigation::NavigationModel;
pub use pipeline::PipelineModel;
pub use types::*;
pub use ui::UiModel;

use crate::api::{Lead, LeadPatch, LeadStatus, NewOpportunity, Opportunity, OpportunityStage};
use crate::logic::{filter, navigation as nav, pipeline as pipe, sorting, validation};
use crate::SortKey;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Lead collection and derived view
    pub leads: LeadsModel,

    /// Opportunities
    pub pipeline: PipelineModel,

    /// Navigation state (view, selection)
    pub navigation: NavigationModel,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool, toast_duration: Duration) -> Self {
        Self {
            leads: LeadsModel::new(),
            pipeline: PipelineModel::new(Vec::new()),
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode, toast_duration),
        }
    }

    // ============================================
    // LEAD LIST
    // ============================================

    /// Recompute the visible ordering, keeping the cursor on the same lead
    pub fn refresh_view(&mut self) {
        self.leads.visible = filter::visible_indices(&self.leads.records, &self.ui.filters);

        let followed = self
            .navigation
            .selected_lead_id
            .as_deref()
            .and_then(|id| self.leads.visible_position(id));
        let selection = followed.or_else(|| {
            nav::clamp_selection(self.navigation.lead_selection, self.leads.visible.len())
        });
        self.set_lead_selection(selection);
    }

    fn set_lead_selection(&mut self, selection: Option<usize>) {
        self.navigation.lead_selection = selection;
        self.navigation.selected_lead_id = selection
            .and_then(|pos| self.leads.visible_at(pos))
            .map(|lead| lead.id.clone());
    }

    pub fn move_lead_selection(&mut self, delta: isize) {
        let next = nav::move_selection(
            self.navigation.lead_selection,
            self.leads.visible.len(),
            delta,
        );
        self.set_lead_selection(next);
    }

    pub fn select_first_lead(&mut self) {
        let first = (!self.leads.visible.is_empty()).then_some(0);
        self.set_lead_selection(first);
    }

    pub fn select_last_lead(&mut self) {
        let last = self.leads.visible.len().checked_sub(1);
        self.set_lead_selection(last);
    }

    /// Leads in display order
    pub fn visible_leads(&self) -> impl Iterator<Item = &Lead> + '_ {
        self.leads
            .visible
            .iter()
            .filter_map(|&idx| self.leads.records.get(idx))
    }

    pub fn selected_lead(&self) -> Option<&Lead> {
        self.navigation
            .lead_selection
            .and_then(|pos| self.leads.visible_at(pos))
    }

    /// Mark a leads fetch as started; false if one is already running
    pub fn begin_leads_fetch(&mut self) -> bool {
        if self.leads.load_state.is_pending() {
            return false;
        }
        self.leads.load_state = if self.leads.records.is_empty() {
            LoadState::Loading
        } else {
            LoadState::Refreshing
        };
        true
    }

    pub fn apply_fetched_leads(&mut self, result: Result<Vec<Lead>, String>) {
        match result {
            Ok(mut fetched) => {
                // An optimistic edit awaiting confirmation stays on screen
                if let Some(snapshot) = &self.leads.save_snapshot {
                    let local = self.leads.find(&snapshot.id).cloned();
                    if let Some(local) = local {
                        if let Some(slot) = fetched.iter_mut().find(|lead| lead.id == local.id) {
                            *slot = local;
                        }
                    }
                }

                self.leads.records = fetched;
                self.leads.load_state = LoadState::Ready;

                let panel_lead_gone = self
                    .ui
                    .detail
                    .as_ref()
                    .is_some_and(|panel| self.leads.find(&panel.lead_id).is_none());
                if panel_lead_gone {
                    self.ui.detail = None;
                }

                self.refresh_view();
            }
            Err(message) => {
                self.leads.load_state = LoadState::Failed(message);
            }
        }
    }

    /// Count of leads with `status` in the whole collection
    pub fn status_count(&self, status: LeadStatus) -> usize {
        self.leads.status_count(status)
    }

    // ============================================
    // FILTERS
    // ============================================

    pub fn set_search(&mut self, query: String) {
        self.ui.filters.search = query;
        self.refresh_view();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.ui.filters.status = status;
        self.refresh_view();
    }

    pub fn cycle_status_filter(&mut self, forward: bool) {
        let current = self.ui.filters.status;
        let next = if forward {
            current.next()
        } else {
            current.prev()
        };
        self.set_status_filter(next);
    }

    /// Sort by `key`; the current key flips direction, a new key starts descending
    pub fn toggle_sort(&mut self, key: SortKey) {
        let filters = &mut self.ui.filters;
        let (sort_by, sort_order) = sorting::toggle_sort(filters.sort_by, filters.sort_order, key);
        filters.sort_by = sort_by;
        filters.sort_order = sort_order;
        self.refresh_view();
    }

    pub fn clear_filters(&mut self) {
        self.ui.filters = FilterState::default();
        self.refresh_view();
    }

    pub fn has_active_filters(&self) -> bool {
        filter::has_active_filters(&self.ui.filters)
    }

    // ============================================
    // DETAIL PANEL
    // ============================================

    /// Open the panel on the lead under the cursor
    pub fn open_detail(&mut self) -> bool {
        let Some(lead) = self.selected_lead() else {
            return false;
        };
        let panel = DetailPanelState::new(lead);
        self.ui.detail = Some(panel);
        true
    }

    pub fn close_detail(&mut self) {
        self.ui.detail = None;
    }

    /// The panel, if it is open and the lead view is on screen
    ///
    /// The panel stays open across a switch to the pipeline view but only
    /// takes keys again once the lead view is back.
    pub fn active_detail(&self) -> Option<&DetailPanelState> {
        self.ui
            .detail
            .as_ref()
            .filter(|_| self.navigation.view == View::Leads)
    }

    /// Lead shown in the panel
    pub fn detail_lead(&self) -> Option<&Lead> {
        self.ui
            .detail
            .as_ref()
            .and_then(|panel| self.leads.find(&panel.lead_id))
    }

    pub fn begin_edit(&mut self) -> bool {
        let Some(panel) = self.ui.detail.as_mut() else {
            return false;
        };
        if panel.editing || panel.saving {
            return false;
        }
        let Some(lead) = self.leads.find(&panel.lead_id) else {
            return false;
        };

        panel.edit = EditState::from_lead(lead);
        panel.editing = true;
        panel.focus = EditField::Status;
        panel.error = None;
        panel.email_error = None;
        true
    }

    /// Discard the form, restoring the values of the record
    pub fn cancel_edit(&mut self) {
        let Some(panel) = self.ui.detail.as_mut() else {
            return;
        };
        if let Some(lead) = self.leads.find(&panel.lead_id) {
            panel.edit = EditState::from_lead(lead);
        }
        panel.editing = false;
        panel.error = None;
        panel.email_error = None;
    }

    /// Replace the email being edited and validate it live
    pub fn set_edit_email(&mut self, email: String) {
        let Some(panel) = self.ui.detail.as_mut().filter(|p| p.editing) else {
            return;
        };
        panel.email_error = (!email.is_empty() && !validation::validate_email(&email))
            .then(|| validation::INVALID_EMAIL.to_string());
        panel.edit.email = email;
    }

    pub fn cycle_edit_status(&mut self, forward: bool) {
        if let Some(panel) = self.ui.detail.as_mut().filter(|p| p.editing) {
            panel.edit.status = nav::cycle(&LeadStatus::ALL, panel.edit.status, forward);
        }
    }

    pub fn toggle_edit_focus(&mut self) {
        if let Some(panel) = self.ui.detail.as_mut().filter(|p| p.editing) {
            panel.focus = match panel.focus {
                EditField::Status => EditField::Email,
                EditField::Email => EditField::Status,
            };
        }
    }

    /// Whether the save action is available
    pub fn can_save(&self) -> bool {
        self.ui.detail.as_ref().is_some_and(|panel| {
            panel.editing
                && !panel.saving
                && panel.email_error.is_none()
                && self.leads.save_snapshot.is_none()
        })
    }

    /// Validate the edit form and apply it optimistically
    ///
    /// On success the record on screen already carries the edit and the
    /// returned request must be sent to the API. An invalid email stops here
    /// with an inline error and leaves the record untouched.
    pub fn begin_lead_save(&mut self, now: DateTime<Utc>) -> Result<PendingSave, SaveBlocked> {
        let Some(panel) = self.ui.detail.as_mut() else {
            return Err(SaveBlocked::NoPanel);
        };
        if !panel.editing {
            return Err(SaveBlocked::NotEditing);
        }
        if panel.saving || self.leads.save_snapshot.is_some() {
            return Err(SaveBlocked::AlreadySaving);
        }
        if !validation::validate_email(&panel.edit.email) {
            panel.email_error = Some(validation::INVALID_EMAIL.to_string());
            return Err(SaveBlocked::InvalidEmail);
        }
        let Some(lead) = self.leads.find_mut(&panel.lead_id) else {
            return Err(SaveBlocked::LeadMissing);
        };

        let patch = LeadPatch {
            status: Some(panel.edit.status),
            email: Some(panel.edit.email.clone()),
            last_activity: Some(now),
        };
        let snapshot = lead.clone();
        patch.apply_to(lead);
        self.leads.save_snapshot = Some(snapshot);

        panel.editing = false;
        panel.saving = true;
        panel.error = None;

        let pending = PendingSave {
            lead_id: panel.lead_id.clone(),
            patch,
        };
        self.refresh_view();
        Ok(pending)
    }

    /// Settle a save: commit the confirmed record, or roll back to the snapshot
    pub fn finish_lead_save(&mut self, lead_id: &str, result: Result<Lead, String>) {
        let snapshot = match &self.leads.save_snapshot {
            Some(snapshot) if snapshot.id == lead_id => self.leads.save_snapshot.take(),
            _ => None,
        };

        match result {
            Ok(confirmed) => {
                let panel = self.ui.detail.as_mut().filter(|p| p.lead_id == lead_id);
                if let Some(panel) = panel {
                    panel.saving = false;
                    panel.edit = EditState::from_lead(&confirmed);
                }
                self.leads.replace(confirmed);
                self.show_toast("Lead updated", ToastKind::Success);
            }
            Err(message) => {
                if let Some(snapshot) = &snapshot {
                    self.leads.replace(snapshot.clone());
                }

                let panel = self.ui.detail.as_mut().filter(|p| p.lead_id == lead_id);
                match panel {
                    Some(panel) => {
                        panel.saving = false;
                        panel.editing = true;
                        if let Some(snapshot) = &snapshot {
                            panel.edit = EditState::from_lead(snapshot);
                        }
                        panel.email_error = None;
                        panel.error = Some(message);
                    }
                    // Panel was closed meanwhile; the toast is the only feedback left
                    None => self.show_toast(message, ToastKind::Error),
                }
            }
        }

        self.refresh_view();
    }

    // ============================================
    // CONVERSION
    // ============================================

    /// Lead a conversion would start from: the panel's lead, else the cursor
    fn conversion_candidate(&self) -> Option<&Lead> {
        match &self.ui.detail {
            Some(panel) if panel.editing || panel.saving => None,
            Some(_) => self.detail_lead(),
            None => self.selected_lead(),
        }
    }

    pub fn can_convert(&self) -> bool {
        self.conversion_candidate()
            .is_some_and(|lead| lead.status.can_convert())
    }

    pub fn open_convert(&mut self) -> bool {
        let form = self
            .conversion_candidate()
            .filter(|lead| lead.status.can_convert())
            .map(ConvertFormState::for_lead);

        match form {
            Some(form) => {
                self.ui.convert = Some(form);
                true
            }
            None => false,
        }
    }

    /// Close the dialog unless a create call is in flight
    pub fn close_convert(&mut self) {
        if self.ui.convert.as_ref().is_some_and(|form| !form.converting) {
            self.ui.convert = None;
        }
    }

    fn editable_form(&mut self) -> Option<&mut ConvertFormState> {
        self.ui.convert.as_mut().filter(|form| !form.converting)
    }

    pub fn convert_move_focus(&mut self, forward: bool) {
        if let Some(form) = self.editable_form() {
            form.focus = nav::cycle(&ConvertField::ORDER, form.focus, forward);
        }
    }

    /// Type into the focused text field
    pub fn convert_input(&mut self, c: char) {
        if let Some(form) = self.editable_form() {
            let focus = form.focus;
            if let Some(text) = form.text_mut(focus) {
                text.push(c);
                form.field_errors.clear(focus);
            }
        }
    }

    pub fn convert_backspace(&mut self) {
        if let Some(form) = self.editable_form() {
            let focus = form.focus;
            if let Some(text) = form.text_mut(focus) {
                text.pop();
                form.field_errors.clear(focus);
            }
        }
    }

    pub fn convert_cycle_stage(&mut self, forward: bool) {
        if let Some(form) = self.editable_form() {
            let all = &OpportunityStage::ALL;
            form.stage = Some(match form.stage {
                Some(stage) => nav::cycle(all, stage, forward),
                None if forward => all[0],
                None => all[all.len() - 1],
            });
            form.field_errors.clear(ConvertField::Stage);
        }
    }

    /// Validate the dialog; on success mark it converting and return the request
    pub fn begin_conversion(&mut self) -> Option<NewOpportunity> {
        let form = self.editable_form()?;

        match validation::validate_conversion(form) {
            Ok(draft) => {
                form.field_errors = FieldErrors::default();
                form.error = None;
                form.converting = true;
                Some(draft)
            }
            Err(errors) => {
                form.field_errors = errors;
                None
            }
        }
    }

    /// Settle a create call; true when the opportunity list changed
    pub fn finish_conversion(&mut self, result: Result<Opportunity, String>) -> bool {
        match result {
            Ok(opportunity) => {
                let message = format!("Opportunity \"{}\" created", opportunity.name);
                self.pipeline.opportunities.push(opportunity);
                self.ui.convert = None;
                self.show_toast(message, ToastKind::Success);
                true
            }
            Err(message) => {
                match self.ui.convert.as_mut() {
                    Some(form) => {
                        form.converting = false;
                        form.error = Some(message);
                    }
                    None => self.show_toast(message, ToastKind::Error),
                }
                false
            }
        }
    }

    // ============================================
    // OPPORTUNITIES
    // ============================================

    pub fn begin_opportunities_fetch(&mut self) -> bool {
        if self.pipeline.load_state.is_pending() {
            return false;
        }
        self.pipeline.load_state = if self.pipeline.opportunities.is_empty() {
            LoadState::Loading
        } else {
            LoadState::Refreshing
        };
        true
    }

    /// Merge fetched opportunities by id; returns the number added
    pub fn apply_fetched_opportunities(&mut self, result: Result<Vec<Opportunity>, String>) -> usize {
        match result {
            Ok(fetched) => {
                self.pipeline.load_state = LoadState::Ready;
                pipe::merge_opportunities(&mut self.pipeline.opportunities, fetched)
            }
            Err(message) => {
                self.pipeline.load_state = LoadState::Failed(message);
                0
            }
        }
    }

    pub fn move_opportunity_selection(&mut self, delta: isize) {
        self.navigation.opportunity_selection = nav::move_selection(
            self.navigation.opportunity_selection,
            self.pipeline.opportunities.len(),
            delta,
        );
    }

    pub fn selected_opportunity(&self) -> Option<&Opportunity> {
        self.navigation
            .opportunity_selection
            .and_then(|idx| self.pipeline.opportunities.get(idx))
    }

    // ============================================
    // TOASTS & MODALS
    // ============================================

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.ui.toasts.push(message, kind);
    }

    pub fn expire_toasts(&mut self, now: Instant) {
        self.ui.toasts.expire(now);
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }
}
