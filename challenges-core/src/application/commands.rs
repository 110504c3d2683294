use crate::application::FormField;
use crate::domain::{ChallengeId, ChallengeStatus, ImageAsset, NewChallenge};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Commands that can be executed against the challenge board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum ChallengeCommand {
    /// Append a challenge directly (no validation)
    AddChallenge {
        /// Fixed ID for replays; generated when absent
        #[serde(default)]
        id: Option<ChallengeId>,
        input: NewChallenge,
    },

    /// Mark a challenge as completed/failed (or back to active)
    UpdateChallengeStatus {
        id: ChallengeId,
        status: ChallengeStatus,
    },

    /// Switch the displayed tab
    SelectType { status: ChallengeStatus },

    /// Open or close a challenge's detail panel
    ToggleDetails { id: ChallengeId },

    /// Open the creation dialog
    OpenForm,

    /// Type into one of the dialog's inputs (image: alt text)
    SetFormField { field: FormField, value: String },

    /// Pick one of the catalog images
    SelectImage { image: ImageAsset },

    /// Validate the dialog and create the challenge
    SubmitForm,

    /// Close the dialog without saving
    CancelForm,
}

impl ChallengeCommand {
    /// Variant name, used in failure events and logs
    pub fn name(&self) -> &'static str {
        match self {
            ChallengeCommand::AddChallenge { .. } => "AddChallenge",
            ChallengeCommand::UpdateChallengeStatus { .. } => "UpdateChallengeStatus",
            ChallengeCommand::SelectType { .. } => "SelectType",
            ChallengeCommand::ToggleDetails { .. } => "ToggleDetails",
            ChallengeCommand::OpenForm => "OpenForm",
            ChallengeCommand::SetFormField { .. } => "SetFormField",
            ChallengeCommand::SelectImage { .. } => "SelectImage",
            ChallengeCommand::SubmitForm => "SubmitForm",
            ChallengeCommand::CancelForm => "CancelForm",
        }
    }
}
