//! Campaign model definition.

use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::StepData;

/// Review/visibility status of a published campaign.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    /// Awaiting admin review; the state every fresh publish lands in
    #[default]
    PendingReview,

    /// Approved and visible to investors
    Live,

    /// Rejected during review
    Rejected,
}

impl FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending_review" | "pendingreview" => Ok(CampaignStatus::PendingReview),
            "live" => Ok(CampaignStatus::Live),
            "rejected" => Ok(CampaignStatus::Rejected),
            _ => Err(format!("Invalid campaign status: {s}")),
        }
    }
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::PendingReview => "pending_review",
            CampaignStatus::Live => "live",
            CampaignStatus::Rejected => "rejected",
        }
    }
}

/// The immutable, published artifact created from exactly one draft.
///
/// Owns a snapshot of the draft's step data at publish time. Further edits
/// go through a new draft with `original_campaign_id` set; the campaign
/// itself is never mutated through this workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    /// Unique identifier assigned by the backend
    pub id: String,

    /// Identity of the founding user
    pub owner_id: String,

    /// Snapshot of the draft's step data at publish time
    pub step_data: StepData,

    /// Review status; a fresh publish is always pending review
    #[serde(default)]
    pub status: CampaignStatus,

    /// Timestamp when the campaign was created (UTC)
    pub created_at: Timestamp,
}
