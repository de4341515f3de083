//! Opportunity pipeline aggregates

use crate::api::{Opportunity, OpportunityStage};

/// Sum of amounts still in play (everything except Closed Lost)
pub fn pipeline_value(opportunities: &[Opportunity]) -> f64 {
    opportunities
        .iter()
        .filter(|opp| opp.stage != OpportunityStage::ClosedLost)
        .filter_map(|opp| opp.amount)
        .sum()
}

/// Sum of amounts in Closed Won
pub fn won_value(opportunities: &[Opportunity]) -> f64 {
    opportunities
        .iter()
        .filter(|opp| opp.stage == OpportunityStage::ClosedWon)
        .filter_map(|opp| opp.amount)
        .sum()
}

pub fn count_in_stage(opportunities: &[Opportunity], stage: OpportunityStage) -> usize {
    opportunities.iter().filter(|opp| opp.stage == stage).count()
}

/// Append fetched opportunities that are not already known (by id)
///
/// Returns the number of records added.
pub fn merge_opportunities(existing: &mut Vec<Opportunity>, fetched: Vec<Opportunity>) -> usize {
    let mut added = 0;
    for opp in fetched {
        if !existing.iter().any(|known| known.id == opp.id) {
            existing.push(opp);
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn opp(id: &str, stage: OpportunityStage, amount: Option<f64>) -> Opportunity {
        Opportunity {
            id: id.to_string(),
            name: format!("Deal {}", id),
            stage,
            amount,
            account_name: "Acme".to_string(),
            created_at: Utc::now(),
            lead_id: "lead-1".to_string(),
        }
    }

    #[test]
    fn test_pipeline_excludes_closed_lost() {
        let list = vec![
            opp("1", OpportunityStage::Proposal, Some(5000.0)),
            opp("2", OpportunityStage::ClosedLost, Some(9000.0)),
            opp("3", OpportunityStage::ClosedWon, Some(1000.0)),
            opp("4", OpportunityStage::Negotiation, None),
        ];
        assert_eq!(pipeline_value(&list), 6000.0);
        assert_eq!(won_value(&list), 1000.0);
    }

    #[test]
    fn test_empty_totals() {
        assert_eq!(pipeline_value(&[]), 0.0);
        assert_eq!(won_value(&[]), 0.0);
    }

    #[test]
    fn test_count_in_stage() {
        let list = vec![
            opp("1", OpportunityStage::Proposal, None),
            opp("2", OpportunityStage::Proposal, None),
            opp("3", OpportunityStage::ClosedWon, None),
        ];
        assert_eq!(count_in_stage(&list, OpportunityStage::Proposal), 2);
        assert_eq!(count_in_stage(&list, OpportunityStage::Prospecting), 0);
    }

    #[test]
    fn test_merge_skips_known_ids() {
        let mut existing = vec![opp("1", OpportunityStage::Proposal, None)];
        let added = merge_opportunities(
            &mut existing,
            vec![
                opp("1", OpportunityStage::ClosedWon, None),
                opp("2", OpportunityStage::Prospecting, None),
            ],
        );
        assert_eq!(added, 1);
        assert_eq!(existing.len(), 2);
        assert_eq!(existing[0].stage, OpportunityStage::Proposal);
    }
}
