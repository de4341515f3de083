//! Leads Model
//!
//! This sub-model holds the lead collection as last fetched (with local
//! optimistic edits applied) and the derived visible ordering.

use super::types::LoadState;
use crate::api::{Lead, LeadStatus};

/// Lead collection and its fetch state
#[derive(Clone, Debug)]
pub struct LeadsModel {
    /// Every lead known to the session, in dataset order
    pub records: Vec<Lead>,

    /// Progress of the leads fetch
    pub load_state: LoadState,

    /// Indices into `records` after filtering and sorting
    pub visible: Vec<usize>,

    /// Record as it was before the optimistic apply of the save in flight
    pub save_snapshot: Option<Lead>,
}

impl LeadsModel {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            load_state: LoadState::Idle,
            visible: Vec::new(),
            save_snapshot: None,
        }
    }

    pub fn find(&self, lead_id: &str) -> Option<&Lead> {
        self.records.iter().find(|lead| lead.id == lead_id)
    }

    pub fn find_mut(&mut self, lead_id: &str) -> Option<&mut Lead> {
        self.records.iter_mut().find(|lead| lead.id == lead_id)
    }

    /// Replace the record with the same id; returns false if it is unknown
    pub fn replace(&mut self, lead: Lead) -> bool {
        match self.find_mut(&lead.id) {
            Some(slot) => {
                *slot = lead;
                true
            }
            None => false,
        }
    }

    /// Number of leads with `status` across the whole collection
    pub fn status_count(&self, status: LeadStatus) -> usize {
        self.records.iter().filter(|lead| lead.status == status).count()
    }

    /// Lead at a position of the visible ordering
    pub fn visible_at(&self, position: usize) -> Option<&Lead> {
        self.visible
            .get(position)
            .and_then(|&idx| self.records.get(idx))
    }

    /// Position of a lead in the visible ordering
    pub fn visible_position(&self, lead_id: &str) -> Option<usize> {
        self.visible
            .iter()
            .position(|&idx| self.records.get(idx).is_some_and(|lead| lead.id == lead_id))
    }
}

impl Default for LeadsModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LeadSource;
    use chrono::Utc;

    fn lead(id: &str, status: LeadStatus) -> Lead {
        Lead {
            id: id.to_string(),
            name: format!("Person {}", id),
            company: "Initech".to_string(),
            email: format!("{}@initech.com", id),
            source: LeadSource::Referral,
            score: 50,
            status,
            created_at: Utc::now(),
            last_activity: None,
        }
    }

    #[test]
    fn test_leads_model_creation() {
        let model = LeadsModel::new();
        assert!(model.records.is_empty());
        assert_eq!(model.load_state, LoadState::Idle);
    }

    #[test]
    fn test_replace_known_and_unknown() {
        let mut model = LeadsModel::new();
        model.records = vec![lead("a", LeadStatus::New)];

        assert!(model.replace(lead("a", LeadStatus::Qualified)));
        assert_eq!(model.find("a").unwrap().status, LeadStatus::Qualified);
        assert!(!model.replace(lead("b", LeadStatus::New)));
        assert_eq!(model.records.len(), 1);
    }

    #[test]
    fn test_status_count_ignores_visibility() {
        let mut model = LeadsModel::new();
        model.records = vec![
            lead("a", LeadStatus::New),
            lead("b", LeadStatus::New),
            lead("c", LeadStatus::Lost),
        ];
        model.visible = vec![2];

        assert_eq!(model.status_count(LeadStatus::New), 2);
        assert_eq!(model.visible_at(0).unwrap().id, "c");
        assert_eq!(model.visible_position("c"), Some(0));
        assert_eq!(model.visible_position("a"), None);
    }
}
