use crate::domain::{Deadline, ImageAsset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Challenge ID (unique within the store)
pub type ChallengeId = Uuid;

/// Challenge lifecycle state
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    /// Still being worked on
    #[default]
    Active,
    /// Marked as completed
    Completed,
    /// Marked as failed
    Failed,
}

impl ChallengeStatus {
    /// All statuses in tab order
    pub const ALL: [ChallengeStatus; 3] = [
        ChallengeStatus::Active,
        ChallengeStatus::Completed,
        ChallengeStatus::Failed,
    ];

    /// Lowercase identifier used in serialized form and CSS classes
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeStatus::Active => "active",
            ChallengeStatus::Completed => "completed",
            ChallengeStatus::Failed => "failed",
        }
    }

    /// Human readable tab label
    pub fn label(&self) -> &'static str {
        match self {
            ChallengeStatus::Active => "Active",
            ChallengeStatus::Completed => "Completed",
            ChallengeStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for ChallengeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Unknown challenge status: {0}")]
pub struct ParseStatusError(String);

impl FromStr for ChallengeStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ChallengeStatus::Active),
            "completed" => Ok(ChallengeStatus::Completed),
            "failed" => Ok(ChallengeStatus::Failed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Input for creating a challenge (everything except id and status)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewChallenge {
    pub title: String,
    pub description: String,
    pub deadline: Deadline,
    pub image: ImageAsset,
}

impl NewChallenge {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        deadline: impl Into<Deadline>,
        image: ImageAsset,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            deadline: deadline.into(),
            image,
        }
    }
}

/// A personal goal with a deadline.
///
/// Everything but the status is fixed at creation. Status changes go through
/// [`Challenge::with_status`], which returns an updated copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Challenge {
    id: ChallengeId,
    title: String,
    description: String,
    deadline: Deadline,
    image: ImageAsset,
    status: ChallengeStatus,
}

impl Challenge {
    /// Create a new active challenge with a random ID
    pub fn new(input: NewChallenge) -> Self {
        Self::with_id(Uuid::new_v4(), input)
    }

    /// Create a new active challenge with a specific ID (replays and tests)
    pub fn with_id(id: ChallengeId, input: NewChallenge) -> Self {
        let NewChallenge {
            title,
            description,
            deadline,
            image,
        } = input;

        Challenge {
            id,
            title,
            description,
            deadline,
            image,
            status: ChallengeStatus::Active,
        }
    }

    /// Copy of this challenge carrying a different status
    pub fn with_status(&self, status: ChallengeStatus) -> Self {
        Challenge {
            status,
            ..self.clone()
        }
    }

    // Getters

    pub fn id(&self) -> ChallengeId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    pub fn image(&self) -> &ImageAsset {
        &self.image
    }

    pub fn status(&self) -> ChallengeStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, ChallengeStatus::Active)
    }
}
