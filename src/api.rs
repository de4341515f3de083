use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Bundled lead dataset served by the simulated API
const EMBEDDED_LEADS: &str = include_str!("../data/leads.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadSource {
    Website,
    LinkedIn,
    #[serde(rename = "Cold Call")]
    ColdCall,
    Referral,
    #[serde(rename = "Email Campaign")]
    EmailCampaign,
    #[serde(rename = "Trade Show")]
    TradeShow,
}

impl LeadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Website => "Website",
            LeadSource::LinkedIn => "LinkedIn",
            LeadSource::ColdCall => "Cold Call",
            LeadSource::Referral => "Referral",
            LeadSource::EmailCampaign => "Email Campaign",
            LeadSource::TradeShow => "Trade Show",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualification status of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Unqualified,
    Lost,
}

impl LeadStatus {
    /// All statuses in the order they are offered in selectors
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Unqualified,
        LeadStatus::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Unqualified => "Unqualified",
            LeadStatus::Lost => "Lost",
        }
    }

    /// Only warm leads can be turned into opportunities
    pub fn can_convert(&self) -> bool {
        matches!(self, LeadStatus::Qualified | LeadStatus::Contacted)
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline position of an opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpportunityStage {
    Prospecting,
    Qualification,
    Proposal,
    Negotiation,
    #[serde(rename = "Closed Won")]
    ClosedWon,
    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl OpportunityStage {
    pub const ALL: [OpportunityStage; 6] = [
        OpportunityStage::Prospecting,
        OpportunityStage::Qualification,
        OpportunityStage::Proposal,
        OpportunityStage::Negotiation,
        OpportunityStage::ClosedWon,
        OpportunityStage::ClosedLost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityStage::Prospecting => "Prospecting",
            OpportunityStage::Qualification => "Qualification",
            OpportunityStage::Proposal => "Proposal",
            OpportunityStage::Negotiation => "Negotiation",
            OpportunityStage::ClosedWon => "Closed Won",
            OpportunityStage::ClosedLost => "Closed Lost",
        }
    }
}

impl fmt::Display for OpportunityStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub source: LeadSource,
    pub score: u8,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub name: String,
    pub stage: OpportunityStage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub account_name: String,
    pub created_at: DateTime<Utc>,
    /// Lead this opportunity was converted from (not re-validated later)
    pub lead_id: String,
}

/// Partial update for a lead; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadPatch {
    pub status: Option<LeadStatus>,
    pub email: Option<String>,
    pub last_activity: Option<DateTime<Utc>>,
}

impl LeadPatch {
    pub fn apply_to(&self, lead: &mut Lead) {
        if let Some(status) = self.status {
            lead.status = status;
        }
        if let Some(email) = &self.email {
            lead.email = email.clone();
        }
        if let Some(at) = self.last_activity {
            lead.last_activity = Some(at);
        }
    }
}

/// Opportunity fields supplied by the caller; id and creation time are assigned by the API
#[derive(Debug, Clone, PartialEq)]
pub struct NewOpportunity {
    pub name: String,
    pub stage: OpportunityStage,
    pub amount: Option<f64>,
    pub account_name: String,
    pub lead_id: String,
}

/// Artificial latency and failure behaviour of the simulated API
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Independent probability (0.0..=1.0) that any call fails
    pub failure_rate: f64,
    pub fetch_leads_delay: Duration,
    pub update_lead_delay: Duration,
    pub create_opportunity_delay: Duration,
    pub fetch_opportunities_delay: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            failure_rate: 0.1,
            fetch_leads_delay: Duration::from_millis(800),
            update_lead_delay: Duration::from_millis(500),
            create_opportunity_delay: Duration::from_millis(600),
            fetch_opportunities_delay: Duration::from_millis(400),
        }
    }
}

impl ApiSettings {
    /// No latency, fixed failure rate (used by tests)
    pub fn instant(failure_rate: f64) -> Self {
        Self {
            failure_rate,
            fetch_leads_delay: Duration::ZERO,
            update_lead_delay: Duration::ZERO,
            create_opportunity_delay: Duration::ZERO,
            fetch_opportunities_delay: Duration::ZERO,
        }
    }
}

/// Parse and validate a lead dataset
pub fn parse_leads(json: &str) -> Result<Vec<Lead>> {
    let leads: Vec<Lead> = serde_json::from_str(json).context("Failed to parse lead dataset")?;

    for lead in &leads {
        if lead.score > 100 {
            bail!("Lead {} has score {} outside 0-100", lead.id, lead.score);
        }
    }

    Ok(leads)
}

/// In-process stand-in for the lead management backend
///
/// Every call sleeps for its configured latency and then fails with the
/// configured probability. Confirmed lead updates are kept in the session copy
/// of the dataset, so a later fetch returns them.
#[derive(Clone)]
pub struct SimulatedApi {
    leads: Arc<Mutex<Vec<Lead>>>,
    settings: ApiSettings,
}

impl SimulatedApi {
    pub fn new(leads: Vec<Lead>, mut settings: ApiSettings) -> Self {
        settings.failure_rate = settings.failure_rate.clamp(0.0, 1.0);
        Self {
            leads: Arc::new(Mutex::new(leads)),
            settings,
        }
    }

    /// Serve the dataset bundled with the binary
    pub fn with_embedded_dataset(settings: ApiSettings) -> Result<Self> {
        Ok(Self::new(parse_leads(EMBEDDED_LEADS)?, settings))
    }

    /// Serve a dataset read from disk
    pub fn with_dataset_file(path: &Path, settings: ApiSettings) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;
        Ok(Self::new(parse_leads(&json)?, settings))
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    fn should_fail(&self) -> bool {
        rand::random::<f64>() < self.settings.failure_rate
    }

    fn dataset(&self) -> Result<std::sync::MutexGuard<'_, Vec<Lead>>> {
        self.leads
            .lock()
            .map_err(|_| anyhow::anyhow!("Lead dataset lock poisoned"))
    }

    pub async fn get_leads(&self) -> Result<Vec<Lead>> {
        tokio::time::sleep(self.settings.fetch_leads_delay).await;

        if self.should_fail() {
            bail!("Failed to fetch leads. Please try again.");
        }

        Ok(self.dataset()?.clone())
    }

    pub async fn update_lead(&self, lead_id: &str, patch: LeadPatch) -> Result<Lead> {
        tokio::time::sleep(self.settings.update_lead_delay).await;

        if self.should_fail() {
            bail!("Failed to update lead. Please try again.");
        }

        let mut leads = self.dataset()?;
        let Some(lead) = leads.iter_mut().find(|lead| lead.id == lead_id) else {
            bail!("Lead not found");
        };

        patch.apply_to(lead);
        Ok(lead.clone())
    }

    pub async fn create_opportunity(&self, draft: NewOpportunity) -> Result<Opportunity> {
        tokio::time::sleep(self.settings.create_opportunity_delay).await;

        if self.should_fail() {
            bail!("Failed to create opportunity. Please try again.");
        }

        let now = Utc::now();
        Ok(Opportunity {
            id: format!("opp-{}", now.timestamp_millis()),
            name: draft.name,
            stage: draft.stage,
            amount: draft.amount,
            account_name: draft.account_name,
            created_at: now,
            lead_id: draft.lead_id,
        })
    }

    /// The backend keeps no opportunities of its own; the console's list lives in local storage
    pub async fn get_opportunities(&self) -> Result<Vec<Opportunity>> {
        tokio::time::sleep(self.settings.fetch_opportunities_delay).await;

        if self.should_fail() {
            bail!("Failed to fetch opportunities. Please try again.");
        }

        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_parses() {
        let leads = parse_leads(EMBEDDED_LEADS).unwrap();
        assert!(!leads.is_empty());
        assert!(leads.iter().all(|l| l.score <= 100));
    }

    #[test]
    fn test_parse_rejects_out_of_range_score() {
        let json = r#"[{"id":"x","name":"n","company":"c","email":"a@b.c","source":"Website",
            "score":140,"status":"New","createdAt":"2024-01-01T00:00:00Z"}]"#;
        let err = parse_leads(json).unwrap_err();
        assert!(err.to_string().contains("outside 0-100"));
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let json = r#"[{"id":"x","name":"n","company":"c","email":"a@b.c","source":"Website",
            "score":40,"status":"Hot","createdAt":"2024-01-01T00:00:00Z"}]"#;
        assert!(parse_leads(json).is_err());
    }

    #[test]
    fn test_multi_word_enums_use_display_names_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&LeadSource::ColdCall).unwrap(),
            "\"Cold Call\""
        );
        assert_eq!(
            serde_json::from_str::<OpportunityStage>("\"Closed Won\"").unwrap(),
            OpportunityStage::ClosedWon
        );
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let mut lead = parse_leads(EMBEDDED_LEADS).unwrap().remove(0);
        let before = lead.clone();

        LeadPatch {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        }
        .apply_to(&mut lead);

        assert_eq!(lead.email, "new@example.com");
        assert_eq!(lead.status, before.status);
        assert_eq!(lead.last_activity, before.last_activity);
    }

    #[test]
    fn test_can_convert() {
        assert!(LeadStatus::Qualified.can_convert());
        assert!(LeadStatus::Contacted.can_convert());
        assert!(!LeadStatus::New.can_convert());
        assert!(!LeadStatus::Lost.can_convert());
    }
}
