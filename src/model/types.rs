//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::api::{Lead, LeadPatch, LeadStatus, OpportunityStage};
use crate::{SortKey, SortOrder};

/// Progress of a fetch that backs a view
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Idle,
    /// First load, nothing to show yet (skeleton)
    Loading,
    /// Reload while existing rows stay visible
    Refreshing,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Loading | LoadState::Refreshing)
    }
}

/// Top-level screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Leads,
    Opportunities,
}

/// Status filter of the lead list: everything, or exactly one status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StatusFilter {
    All,
    Only(LeadStatus),
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// All → New → … → Lost → All
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(LeadStatus::ALL[0]),
            StatusFilter::Only(status) => {
                let idx = LeadStatus::ALL.iter().position(|s| *s == status).unwrap_or(0);
                match LeadStatus::ALL.get(idx + 1) {
                    Some(next) => StatusFilter::Only(*next),
                    None => StatusFilter::All,
                }
            }
        }
    }

    pub fn prev(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(LeadStatus::ALL[LeadStatus::ALL.len() - 1]),
            StatusFilter::Only(status) => {
                match LeadStatus::ALL.iter().position(|s| *s == status) {
                    Some(0) | None => StatusFilter::All,
                    Some(idx) => StatusFilter::Only(LeadStatus::ALL[idx - 1]),
                }
            }
        }
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::All => "All".to_string(),
            StatusFilter::Only(status) => status.as_str().to_string(),
        }
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "All" {
            return Ok(StatusFilter::All);
        }
        LeadStatus::ALL
            .iter()
            .find(|s| s.as_str() == value)
            .map(|s| StatusFilter::Only(*s))
            .ok_or_else(|| format!("unknown status filter '{}'", value))
    }
}

/// Lead list preferences, persisted on every change
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search: String,
    pub status: StatusFilter,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            sort_by: SortKey::Score,
            sort_order: SortOrder::Desc,
        }
    }
}

/// Editable field of the lead detail panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditField {
    Status,
    Email,
}

/// Values in the lead edit form
#[derive(Clone, Debug, PartialEq)]
pub struct EditState {
    pub status: LeadStatus,
    pub email: String,
}

impl EditState {
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            status: lead.status,
            email: lead.email.clone(),
        }
    }
}

/// Lead detail side panel
#[derive(Clone, Debug)]
pub struct DetailPanelState {
    pub lead_id: String,
    pub editing: bool,
    pub edit: EditState,
    pub focus: EditField,
    /// An update request is in flight
    pub saving: bool,
    /// Last save failure, shown inline
    pub error: Option<String>,
    /// Live email validation message
    pub email_error: Option<String>,
}

impl DetailPanelState {
    pub fn new(lead: &Lead) -> Self {
        Self {
            lead_id: lead.id.clone(),
            editing: false,
            edit: EditState::from_lead(lead),
            focus: EditField::Status,
            saving: false,
            error: None,
            email_error: None,
        }
    }
}

/// Update request produced by an accepted save
#[derive(Clone, Debug, PartialEq)]
pub struct PendingSave {
    pub lead_id: String,
    pub patch: LeadPatch,
}

/// Why a save did not start
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveBlocked {
    NoPanel,
    NotEditing,
    AlreadySaving,
    LeadMissing,
    InvalidEmail,
}

/// Field of the conversion form, in tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvertField {
    Name,
    AccountName,
    Stage,
    Amount,
}

impl ConvertField {
    pub const ORDER: [ConvertField; 4] = [
        ConvertField::Name,
        ConvertField::AccountName,
        ConvertField::Stage,
        ConvertField::Amount,
    ];
}

/// Per-field validation messages of the conversion form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub account_name: Option<String>,
    pub stage: Option<String>,
    pub amount: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.account_name.is_none()
            && self.stage.is_none()
            && self.amount.is_none()
    }

    pub fn get(&self, field: ConvertField) -> Option<&str> {
        match field {
            ConvertField::Name => self.name.as_deref(),
            ConvertField::AccountName => self.account_name.as_deref(),
            ConvertField::Stage => self.stage.as_deref(),
            ConvertField::Amount => self.amount.as_deref(),
        }
    }

    pub fn clear(&mut self, field: ConvertField) {
        match field {
            ConvertField::Name => self.name = None,
            ConvertField::AccountName => self.account_name = None,
            ConvertField::Stage => self.stage = None,
            ConvertField::Amount => self.amount = None,
        }
    }
}

/// Lead → opportunity conversion dialog
#[derive(Clone, Debug)]
pub struct ConvertFormState {
    pub lead_id: String,
    pub lead_name: String,
    pub name: String,
    pub account_name: String,
    pub stage: Option<OpportunityStage>,
    /// Raw text; parsed on submit
    pub amount: String,
    pub focus: ConvertField,
    pub field_errors: FieldErrors,
    pub converting: bool,
    pub error: Option<String>,
}

impl ConvertFormState {
    pub fn for_lead(lead: &Lead) -> Self {
        Self {
            lead_id: lead.id.clone(),
            lead_name: lead.name.clone(),
            name: lead.name.clone(),
            account_name: lead.company.clone(),
            stage: None,
            amount: String::new(),
            focus: ConvertField::Name,
            field_errors: FieldErrors::default(),
            converting: false,
            error: None,
        }
    }

    /// Text buffer behind a free-text field (`None` for the stage selector)
    pub fn text_mut(&mut self, field: ConvertField) -> Option<&mut String> {
        match field {
            ConvertField::Name => Some(&mut self.name),
            ConvertField::AccountName => Some(&mut self.account_name),
            ConvertField::Amount => Some(&mut self.amount),
            ConvertField::Stage => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

/// FIFO of transient notifications
#[derive(Clone, Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    capacity: usize,
    duration: Duration,
}

impl ToastQueue {
    pub fn new(capacity: usize, duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            capacity: capacity.max(1),
            duration,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        if self.toasts.len() >= self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Drop expired toasts
    pub fn expire(&mut self, now: Instant) {
        let duration_ms = self.duration.as_millis();
        self.toasts.retain(|toast| {
            let elapsed = now.saturating_duration_since(toast.shown_at).as_millis();
            !crate::logic::ui::should_dismiss_toast(elapsed, duration_ms)
        });
    }

    /// Oldest live toast, the one on screen
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.front()
    }

    pub fn dismiss_current(&mut self) {
        self.toasts.pop_front();
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
