//! Wizard step sequence and per-step form payloads.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed, ordered list of wizard steps.
///
/// A later step may be filled in before an earlier one is complete; only
/// forward navigation and launch are gated on validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Basics,
    Media,
    Financials,
    Team,
    Risks,
    Review,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Basics,
        WizardStep::Media,
        WizardStep::Financials,
        WizardStep::Team,
        WizardStep::Risks,
        WizardStep::Review,
    ];

    /// The step after this one, or `None` from the final step.
    pub fn next(&self) -> Option<WizardStep> {
        let idx = Self::ALL.iter().position(|s| s == self)?;
        Self::ALL.get(idx + 1).copied()
    }

    /// The step before this one, or `None` from the first step.
    pub fn prev(&self) -> Option<WizardStep> {
        let idx = Self::ALL.iter().position(|s| s == self)?;
        idx.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }

    /// Convert to storage string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Basics => "basics",
            WizardStep::Media => "media",
            WizardStep::Financials => "financials",
            WizardStep::Team => "team",
            WizardStep::Risks => "risks",
            WizardStep::Review => "review",
        }
    }
}

impl FromStr for WizardStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basics" => Ok(WizardStep::Basics),
            "media" => Ok(WizardStep::Media),
            "financials" => Ok(WizardStep::Financials),
            "team" => Ok(WizardStep::Team),
            "risks" => Ok(WizardStep::Risks),
            "review" => Ok(WizardStep::Review),
            _ => Err(format!("Invalid wizard step: {s}")),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete set of per-step form payloads for one draft.
///
/// Each field is an independently-validatable sub-document; the `review`
/// step has no payload of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StepData {
    #[serde(default)]
    pub basics: Basics,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaItem>,

    #[serde(default)]
    pub financials: Financials,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team: Vec<TeamMember>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risks: Vec<Risk>,
}

/// Payload for the `basics` step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Basics {
    /// Campaign title (required; also gates autosave)
    pub title: String,

    /// One-line pitch shown in listings
    #[serde(default)]
    pub tagline: String,

    /// Long-form campaign description
    pub description: String,

    /// Category the campaign is listed under (e.g. "Energy")
    pub category: String,

    /// Where the campaign is based
    pub location: String,

    /// The problem the campaign addresses
    pub problem: String,

    /// How the campaign solves it
    pub solution: String,
}

/// Kind of media attachment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A single media attachment on the `media` step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Payload for the `financials` step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Financials {
    /// Funding goal in minor currency units
    pub funding_target: u64,

    /// ISO currency code
    #[serde(default)]
    pub currency: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub milestones: Vec<Milestone>,
}

/// A funding milestone within the financials payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    pub title: String,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A member entry on the `team` step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// A disclosed risk on the `risks` step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Risk {
    pub category: String,
    pub description: String,
    pub mitigation: String,
}
