use crate::domain::ChallengeStatus;

/// Which partition is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelection {
    selected: ChallengeStatus,
}

impl TabSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> ChallengeStatus {
        self.selected
    }

    pub fn is_selected(&self, status: ChallengeStatus) -> bool {
        self.selected == status
    }

    /// Overwrite the selection unconditionally
    pub fn select_type(&mut self, status: ChallengeStatus) {
        self.selected = status;
    }

    /// Cycle forward (Active → Completed → Failed → Active)
    pub fn next(&mut self) -> ChallengeStatus {
        self.selected = match self.selected {
            ChallengeStatus::Active => ChallengeStatus::Completed,
            ChallengeStatus::Completed => ChallengeStatus::Failed,
            ChallengeStatus::Failed => ChallengeStatus::Active,
        };
        self.selected
    }

    /// Cycle backward
    pub fn previous(&mut self) -> ChallengeStatus {
        self.selected = match self.selected {
            ChallengeStatus::Active => ChallengeStatus::Failed,
            ChallengeStatus::Completed => ChallengeStatus::Active,
            ChallengeStatus::Failed => ChallengeStatus::Completed,
        };
        self.selected
    }
}
