use crate::domain::{Challenge, ChallengeStatus};

/// Challenges split by status, each part in creation order.
///
/// Borrowed from the canonical list and recomputed on demand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChallengePartition<'a> {
    active: Vec<&'a Challenge>,
    completed: Vec<&'a Challenge>,
    failed: Vec<&'a Challenge>,
}

/// Number of challenges per status (tab badges)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub active: usize,
    pub completed: usize,
    pub failed: usize,
}

impl StatusCounts {
    pub fn get(&self, status: ChallengeStatus) -> usize {
        match status {
            ChallengeStatus::Active => self.active,
            ChallengeStatus::Completed => self.completed,
            ChallengeStatus::Failed => self.failed,
        }
    }
}

impl<'a> ChallengePartition<'a> {
    /// Single pass over the list
    pub fn new(challenges: &'a [Challenge]) -> Self {
        let mut partition = Self::default();

        for challenge in challenges {
            match challenge.status() {
                ChallengeStatus::Active => partition.active.push(challenge),
                ChallengeStatus::Completed => partition.completed.push(challenge),
                ChallengeStatus::Failed => partition.failed.push(challenge),
            }
        }

        partition
    }

    pub fn get(&self, status: ChallengeStatus) -> &[&'a Challenge] {
        match status {
            ChallengeStatus::Active => &self.active,
            ChallengeStatus::Completed => &self.completed,
            ChallengeStatus::Failed => &self.failed,
        }
    }

    pub fn active(&self) -> &[&'a Challenge] {
        &self.active
    }

    pub fn completed(&self) -> &[&'a Challenge] {
        &self.completed
    }

    pub fn failed(&self) -> &[&'a Challenge] {
        &self.failed
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts {
            active: self.active.len(),
            completed: self.completed.len(),
            failed: self.failed.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.completed.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
