//! Shared test support: a scriptable in-memory draft service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jiff::Timestamp;

use fundry_core::{
    cache::DraftCache,
    models::{Campaign, CampaignStatus, Draft, DraftStatus},
    service::{DraftService, ServiceError, ServiceResult},
    store::DraftStore,
    ServiceErrorKind,
};

/// Operations whose failure can be scripted independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Create,
    Update,
    Fetch,
    List,
    Publish,
    CreateCampaign,
}

#[derive(Default)]
struct MockState {
    drafts: HashMap<String, Draft>,
    campaigns: Vec<Campaign>,
    failures: HashMap<Op, ServiceErrorKind>,
    calls: HashMap<Op, usize>,
    next_id: u64,
}

/// In-memory [`DraftService`] double with per-operation failure switches
/// and call counters.
#[derive(Default)]
pub struct MockService {
    state: Mutex<MockState>,
}

impl MockService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes one operation fail with the given classification.
    pub fn fail(&self, op: Op, kind: ServiceErrorKind) {
        self.state.lock().unwrap().failures.insert(op, kind);
    }

    /// Makes every operation fail with a network error.
    pub fn fail_all(&self) {
        let mut state = self.state.lock().unwrap();
        for op in [
            Op::Create,
            Op::Update,
            Op::Fetch,
            Op::List,
            Op::Publish,
            Op::CreateCampaign,
        ] {
            state.failures.insert(op, ServiceErrorKind::Network);
        }
    }

    /// Clears all scripted failures.
    pub fn heal(&self) {
        self.state.lock().unwrap().failures.clear();
    }

    pub fn calls(&self, op: Op) -> usize {
        *self.state.lock().unwrap().calls.get(&op).unwrap_or(&0)
    }

    pub fn campaign_count(&self) -> usize {
        self.state.lock().unwrap().campaigns.len()
    }

    fn enter(&self, op: Op) -> ServiceResult<()> {
        let mut state = self.state.lock().unwrap();
        *state.calls.entry(op).or_insert(0) += 1;
        match state.failures.get(&op) {
            Some(kind) => Err(ServiceError::new(*kind, "scripted failure")),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DraftService for MockService {
    async fn create(&self, draft: &Draft) -> ServiceResult<Draft> {
        self.enter(Op::Create)?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("d-{}", state.next_id);

        let mut stored = draft.clone();
        stored.id = Some(id.clone());
        stored.local_key = None;
        let now = Timestamp::now();
        stored.created_at = now;
        stored.updated_at = now;

        state.drafts.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: &str, draft: &Draft) -> ServiceResult<Draft> {
        self.enter(Op::Update)?;
        let mut state = self.state.lock().unwrap();
        if !state.drafts.contains_key(id) {
            return Err(ServiceError::new(ServiceErrorKind::NotFound, "no such draft"));
        }

        let mut stored = draft.clone();
        stored.id = Some(id.to_string());
        stored.local_key = None;
        stored.updated_at = Timestamp::now();

        state.drafts.insert(id.to_string(), stored.clone());
        Ok(stored)
    }

    async fn fetch(&self, id: &str) -> ServiceResult<Draft> {
        self.enter(Op::Fetch)?;
        let state = self.state.lock().unwrap();
        state
            .drafts
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::new(ServiceErrorKind::NotFound, "no such draft"))
    }

    async fn list(&self) -> ServiceResult<Vec<Draft>> {
        self.enter(Op::List)?;
        let state = self.state.lock().unwrap();
        Ok(state.drafts.values().cloned().collect())
    }

    async fn publish(&self, id: &str) -> ServiceResult<Campaign> {
        self.enter(Op::Publish)?;
        let mut state = self.state.lock().unwrap();
        let Some(draft) = state.drafts.get(id).cloned() else {
            return Err(ServiceError::new(ServiceErrorKind::NotFound, "no such draft"));
        };

        state.next_id += 1;
        let campaign = Campaign {
            id: format!("c-{}", state.next_id),
            owner_id: draft.owner_id.clone(),
            step_data: draft.step_data.clone(),
            status: CampaignStatus::PendingReview,
            created_at: Timestamp::now(),
        };

        if let Some(stored) = state.drafts.get_mut(id) {
            stored.status = DraftStatus::Published;
        }
        state.campaigns.push(campaign.clone());
        Ok(campaign)
    }

    async fn create_campaign(&self, draft: &Draft) -> ServiceResult<Campaign> {
        self.enter(Op::CreateCampaign)?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let campaign = Campaign {
            id: format!("c-{}", state.next_id),
            owner_id: draft.owner_id.clone(),
            step_data: draft.step_data.clone(),
            status: CampaignStatus::PendingReview,
            created_at: Timestamp::now(),
        };
        state.campaigns.push(campaign.clone());
        Ok(campaign)
    }
}

/// Builds a store over the mock service and a cache file inside `dir`.
pub async fn store_with(service: Arc<MockService>, dir: &std::path::Path) -> DraftStore {
    let cache = DraftCache::open(Some(dir.join("drafts.db")))
        .await
        .expect("Failed to open cache");
    DraftStore::new(service, cache)
}

/// A draft whose every step passes validation (the EcoCharge scenario).
pub fn complete_draft(owner: &str) -> Draft {
    use fundry_core::models::{
        Financials, MediaItem, MediaKind, Milestone, Risk, TeamMember,
    };

    let mut draft = Draft::new(owner);
    draft.step_data.basics = fundry_core::models::Basics {
        title: "EcoCharge".to_string(),
        tagline: "Solar microgrids for every neighbourhood".to_string(),
        description: "Community-owned solar microgrids".to_string(),
        category: "Energy".to_string(),
        location: "Lagos".to_string(),
        problem: "Unreliable grid power".to_string(),
        solution: "Battery-backed neighbourhood solar".to_string(),
    };
    draft.step_data.media = vec![MediaItem {
        kind: MediaKind::Image,
        url: "https://cdn.example.com/hero.jpg".to_string(),
        caption: Some("Pilot installation".to_string()),
    }];
    draft.step_data.financials = Financials {
        funding_target: 1_500_000,
        currency: "USD".to_string(),
        milestones: vec![Milestone {
            title: "Pilot site".to_string(),
            amount: 500_000,
            description: None,
        }],
    };
    draft.step_data.team = vec![TeamMember {
        name: "Ada Obi".to_string(),
        role: "CTO".to_string(),
        bio: "Ten years in grid-scale storage".to_string(),
        photo_url: None,
    }];
    draft.step_data.risks = vec![Risk {
        category: "Supply chain".to_string(),
        description: "Panel lead times may slip".to_string(),
        mitigation: "Second supplier under contract".to_string(),
    }];
    draft
}
