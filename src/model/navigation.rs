//! Navigation Model
//!
//! This sub-model contains all state related to navigation:
//! the active view and the cursor of each list.

use super::types::View;

/// Navigation state (view, selection)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Screen currently shown
    pub view: View,

    /// Cursor in the visible lead ordering
    pub lead_selection: Option<usize>,

    /// Id of the lead under the cursor, used to follow it across re-sorts
    pub selected_lead_id: Option<String>,

    /// Cursor in the opportunities list
    pub opportunity_selection: Option<usize>,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self {
            view: View::Leads,
            lead_selection: None,
            selected_lead_id: None,
            opportunity_selection: None,
        }
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Leads => View::Opportunities,
            View::Opportunities => View::Leads,
        };
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}
