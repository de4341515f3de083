use std::collections::{HashSet, VecDeque};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use sellertui::api::{Lead, LeadPatch, NewOpportunity, Opportunity, SimulatedApi};

/// One outstanding call per action kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    FetchLeads,
    UpdateLead,
    CreateOpportunity,
    FetchOpportunities,
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Load the full lead collection
    GetLeads,

    /// Persist an edit of status/email
    UpdateLead { lead_id: String, patch: LeadPatch },

    /// Create an opportunity from a converted lead
    CreateOpportunity { draft: NewOpportunity },

    /// Load opportunities known to the backend
    GetOpportunities,
}

impl ApiRequest {
    fn key(&self) -> RequestKey {
        match self {
            ApiRequest::GetLeads => RequestKey::FetchLeads,
            ApiRequest::UpdateLead { .. } => RequestKey::UpdateLead,
            ApiRequest::CreateOpportunity { .. } => RequestKey::CreateOpportunity,
            ApiRequest::GetOpportunities => RequestKey::FetchOpportunities,
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    LeadsResult {
        leads: Result<Vec<Lead>, anyhow::Error>,
    },

    UpdateLeadResult {
        lead_id: String,
        lead: Result<Lead, anyhow::Error>,
    },

    CreateOpportunityResult {
        opportunity: Result<Opportunity, anyhow::Error>,
    },

    OpportunitiesResult {
        opportunities: Result<Vec<Opportunity>, anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that runs simulated calls in the background
pub struct ApiService {
    api: SimulatedApi,
    request_queue: VecDeque<ApiRequest>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
}

impl ApiService {
    pub(crate) fn new(
        api: SimulatedApi,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            api,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
        }
    }

    /// Add a request to the queue unless the same action is queued or running
    fn enqueue(&mut self, request: ApiRequest) {
        let key = request.key();
        let queued = self.request_queue.iter().any(|r| r.key() == key);

        if self.in_flight.contains(&key) || queued {
            tracing::debug!(?key, "dropping duplicate request");
            return;
        }

        self.request_queue.push_back(request);
    }

    /// Start the next queued request
    fn process_next(&mut self) {
        let Some(request) = self.request_queue.pop_front() else {
            return;
        };

        let key = request.key();
        self.in_flight.insert(key);

        let api = self.api.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        // No retries, no cancellation: the call runs to completion
        tokio::spawn(async move {
            let response = Self::execute_request(&api, request).await;
            // Free the key before the UI can see the answer and ask again
            let _ = completion_tx.send(InternalMessage::Completed(key));
            let _ = response_tx.send(response);
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(api: &SimulatedApi, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::GetLeads => {
                let leads = api.get_leads().await;
                tracing::debug!(ok = leads.is_ok(), "get_leads finished");
                ApiResponse::LeadsResult { leads }
            }

            ApiRequest::UpdateLead { lead_id, patch } => {
                let lead = api.update_lead(&lead_id, patch).await;
                if let Err(e) = &lead {
                    tracing::warn!(lead_id = %lead_id, error = %e, "update_lead failed");
                }
                ApiResponse::UpdateLeadResult { lead_id, lead }
            }

            ApiRequest::CreateOpportunity { draft } => {
                let lead_id = draft.lead_id.clone();
                let opportunity = api.create_opportunity(draft).await;
                if let Err(e) = &opportunity {
                    tracing::warn!(lead_id = %lead_id, error = %e, "create_opportunity failed");
                }
                ApiResponse::CreateOpportunityResult { opportunity }
            }

            ApiRequest::GetOpportunities => {
                let opportunities = api.get_opportunities().await;
                ApiResponse::OpportunitiesResult { opportunities }
            }
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    api: SimulatedApi,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(api, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            // Completions first, so a request sent after its previous
            // answer never meets a stale in-flight key
            tokio::select! {
                biased;

                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                }

                request = request_rx.recv() => {
                    match request {
                        Some(request) => service.enqueue(request),
                        // UI side is gone
                        None => break,
                    }
                }

                _ = tick.tick() => {
                    while !service.request_queue.is_empty() {
                        service.process_next();
                    }
                }
            }
        }

        tracing::debug!("API service stopped");
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sellertui::api::{parse_leads, ApiSettings};

    fn test_api() -> SimulatedApi {
        let json = r#"[{"id":"lead-1","name":"Ana","company":"Acme","email":"ana@acme.com",
            "source":"Website","score":90,"status":"Qualified","createdAt":"2024-01-01T00:00:00Z"}]"#;
        SimulatedApi::new(parse_leads(json).unwrap(), ApiSettings::instant(0.0))
    }

    #[test]
    fn test_request_keys_per_action() {
        let update = ApiRequest::UpdateLead {
            lead_id: "a".to_string(),
            patch: LeadPatch::default(),
        };
        let other_update = ApiRequest::UpdateLead {
            lead_id: "b".to_string(),
            patch: LeadPatch::default(),
        };
        assert_eq!(update.key(), other_update.key());
        assert_ne!(ApiRequest::GetLeads.key(), ApiRequest::GetOpportunities.key());
    }

    #[tokio::test]
    async fn test_enqueue_drops_duplicate_actions() {
        let (response_tx, _response_rx) = mpsc::unbounded_channel();
        let (completion_tx, _completion_rx) = mpsc::unbounded_channel();
        let mut service = ApiService::new(test_api(), response_tx, completion_tx);

        service.enqueue(ApiRequest::GetLeads);
        service.enqueue(ApiRequest::GetLeads);
        assert_eq!(service.request_queue.len(), 1);

        service.process_next();
        assert!(service.in_flight.contains(&RequestKey::FetchLeads));

        // Still running: a new fetch is dropped, other actions are not
        service.enqueue(ApiRequest::GetLeads);
        service.enqueue(ApiRequest::GetOpportunities);
        assert_eq!(service.request_queue.len(), 1);
    }

    #[tokio::test]
    async fn test_worker_round_trip() {
        let (request_tx, mut response_rx) = spawn_api_service(test_api());
        request_tx.send(ApiRequest::GetLeads).unwrap();

        match response_rx.recv().await {
            Some(ApiResponse::LeadsResult { leads }) => assert_eq!(leads.unwrap().len(), 1),
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_right_after_its_answer_is_served() {
        let (request_tx, mut response_rx) = spawn_api_service(test_api());

        // The UI asks again as soon as each answer lands
        for round in 0..50 {
            request_tx.send(ApiRequest::GetLeads).unwrap();
            let response = tokio::time::timeout(Duration::from_secs(2), response_rx.recv())
                .await
                .unwrap_or_else(|_| panic!("fetch {} was dropped as a duplicate", round));
            assert!(matches!(response, Some(ApiResponse::LeadsResult { .. })));
        }
    }
}
