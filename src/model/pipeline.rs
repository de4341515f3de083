//! Pipeline Model
//!
//! Opportunities created in this and earlier sessions.

use super::types::LoadState;
use crate::api::Opportunity;
use crate::logic::pipeline;

#[derive(Clone, Debug)]
pub struct PipelineModel {
    /// Opportunities in creation order
    pub opportunities: Vec<Opportunity>,

    /// Progress of the opportunities fetch
    pub load_state: LoadState,
}

impl PipelineModel {
    pub fn new(opportunities: Vec<Opportunity>) -> Self {
        Self {
            opportunities,
            load_state: LoadState::Idle,
        }
    }

    pub fn pipeline_value(&self) -> f64 {
        pipeline::pipeline_value(&self.opportunities)
    }

    pub fn won_value(&self) -> f64 {
        pipeline::won_value(&self.opportunities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OpportunityStage;
    use chrono::Utc;

    #[test]
    fn test_totals_delegate_to_logic() {
        let model = PipelineModel::new(vec![Opportunity {
            id: "opp-1".to_string(),
            name: "Globex renewal".to_string(),
            stage: OpportunityStage::ClosedWon,
            amount: Some(1200.0),
            account_name: "Globex".to_string(),
            created_at: Utc::now(),
            lead_id: "lead-002".to_string(),
        }]);

        assert_eq!(model.pipeline_value(), 1200.0);
        assert_eq!(model.won_value(), 1200.0);
        assert_eq!(model.load_state, LoadState::Idle);
    }
}
