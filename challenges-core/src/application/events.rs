use crate::application::FormField;
use crate::domain::{Challenge, ChallengeId, ChallengeStatus, ImageAsset};
use serde::{Deserialize, Serialize};

/// Events emitted by the board after each command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ChallengeEvent {
    /// A challenge was appended to the store
    ChallengeAdded { challenge: Challenge },

    /// A challenge moved to another status
    ChallengeStatusChanged {
        id: ChallengeId,
        from: ChallengeStatus,
        to: ChallengeStatus,
    },

    /// The displayed tab changed
    TypeSelected { status: ChallengeStatus },

    /// Detail panel toggled; `expanded` is the open challenge afterwards
    DetailsToggled {
        id: ChallengeId,
        expanded: Option<ChallengeId>,
    },

    /// Creation dialog opened
    FormOpened,

    /// A dialog input changed
    FormFieldChanged { field: FormField },

    /// A catalog image was chosen in the dialog
    ImageSelected { image: ImageAsset },

    /// Submit failed validation; the dialog stays open
    FormRejected { missing: Vec<FormField> },

    /// Dialog closed without creating anything
    FormClosed,

    /// Command failed
    CommandFailed { command: String, reason: String },
}

impl ChallengeEvent {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ChallengeEvent::CommandFailed { .. } | ChallengeEvent::FormRejected { .. }
        )
    }
}
