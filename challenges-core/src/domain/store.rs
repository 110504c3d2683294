use crate::domain::{Challenge, ChallengeId, ChallengePartition, ChallengeStatus, NewChallenge};
use std::sync::Arc;

/// Immutable view of the store's collection at one point in time
pub type ChallengeSnapshot = Arc<Vec<Challenge>>;

/// Errors that can occur in store operations
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ChallengeStoreError {
    #[error("Challenge not found: {0}")]
    NotFound(ChallengeId),

    #[error("Challenge already exists: {0}")]
    DuplicateId(ChallengeId),
}

/// Owner of the canonical challenge list.
///
/// The list is kept behind an [`Arc`]; every write goes through
/// [`Arc::make_mut`], so a snapshot handed out earlier never changes under
/// its holder.
#[derive(Debug, Clone, Default)]
pub struct ChallengeStore {
    challenges: ChallengeSnapshot,
}

impl ChallengeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new active challenge. Performs no validation.
    pub fn add_challenge(&mut self, input: NewChallenge) -> ChallengeId {
        let challenge = Challenge::new(input);
        let id = challenge.id();

        tracing::debug!(%id, title = challenge.title(), "Adding challenge");
        Arc::make_mut(&mut self.challenges).push(challenge);

        id
    }

    /// Append a prepared challenge, keeping IDs unique
    pub fn insert(&mut self, challenge: Challenge) -> Result<(), ChallengeStoreError> {
        if self.get(challenge.id()).is_some() {
            return Err(ChallengeStoreError::DuplicateId(challenge.id()));
        }

        tracing::debug!(id = %challenge.id(), title = challenge.title(), "Inserting challenge");
        Arc::make_mut(&mut self.challenges).push(challenge);
        Ok(())
    }

    /// Replace the status of one challenge and return the previous status.
    ///
    /// An unknown ID leaves the collection untouched.
    pub fn update_challenge_status(
        &mut self,
        id: ChallengeId,
        status: ChallengeStatus,
    ) -> Result<ChallengeStatus, ChallengeStoreError> {
        let index = self
            .challenges
            .iter()
            .position(|c| c.id() == id)
            .ok_or(ChallengeStoreError::NotFound(id))?;

        let challenges = Arc::make_mut(&mut self.challenges);
        let previous = challenges[index].status();
        challenges[index] = challenges[index].with_status(status);

        tracing::debug!(%id, from = %previous, to = %status, "Challenge status updated");
        Ok(previous)
    }

    // ===== Queries =====

    /// All challenges in creation order
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Shared handle to the current collection
    pub fn snapshot(&self) -> ChallengeSnapshot {
        Arc::clone(&self.challenges)
    }

    pub fn get(&self, id: ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id() == id)
    }

    pub fn partition(&self) -> ChallengePartition<'_> {
        ChallengePartition::new(&self.challenges)
    }

    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}

impl PartialEq for ChallengeStore {
    fn eq(&self, other: &Self) -> bool {
        self.challenges == other.challenges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageCatalog;
    use std::collections::HashSet;

    fn input(title: &str) -> NewChallenge {
        let image = ImageCatalog::default().images()[0].clone();
        NewChallenge::new(title, "Every morning", "2024-12-01", image)
    }

    #[test]
    fn test_add_challenges_unique_and_active() {
        let mut store = ChallengeStore::new();

        let ids: Vec<_> = (0..10)
            .map(|i| store.add_challenge(input(&format!("Challenge {}", i))))
            .collect();

        assert_eq!(store.len(), 10);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 10);
        assert!(store.challenges().iter().all(|c| c.is_active()));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = ChallengeStore::new();
        store.add_challenge(input("First"));
        store.add_challenge(input("Second"));
        store.add_challenge(input("Third"));

        let titles: Vec<_> = store.challenges().iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_add_does_not_validate() {
        let mut store = ChallengeStore::new();
        let image = ImageCatalog::default().images()[1].clone();
        store.add_challenge(NewChallenge::new("", "", "", image));

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_status_changes_only_target() {
        let mut store = ChallengeStore::new();
        let first = store.add_challenge(input("First"));
        let second = store.add_challenge(input("Second"));
        let third = store.add_challenge(input("Third"));

        let before = store.snapshot();
        let previous = store
            .update_challenge_status(second, ChallengeStatus::Completed)
            .unwrap();

        assert_eq!(previous, ChallengeStatus::Active);
        assert_eq!(
            store.get(second).unwrap().status(),
            ChallengeStatus::Completed
        );
        assert_eq!(store.get(first), before.iter().find(|c| c.id() == first));
        assert_eq!(store.get(third), before.iter().find(|c| c.id() == third));
    }

    #[test]
    fn test_snapshot_is_not_mutated() {
        let mut store = ChallengeStore::new();
        let id = store.add_challenge(input("Run 5k"));

        let snapshot = store.snapshot();
        store
            .update_challenge_status(id, ChallengeStatus::Failed)
            .unwrap();
        store.add_challenge(input("Swim"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].status(), ChallengeStatus::Active);
        assert_eq!(store.len(), 2);
        assert!(!Arc::ptr_eq(&snapshot, &store.snapshot()));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = ChallengeStore::new();
        store.add_challenge(input("Run 5k"));
        let before = store.clone();
        let snapshot = store.snapshot();

        let unknown = uuid::Uuid::new_v4();
        let result = store.update_challenge_status(unknown, ChallengeStatus::Completed);

        assert_eq!(result, Err(ChallengeStoreError::NotFound(unknown)));
        assert_eq!(store, before);
        assert!(Arc::ptr_eq(&snapshot, &store.snapshot()));
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let challenge = Challenge::new(input("Run 5k"));
        let id = challenge.id();

        let mut store = ChallengeStore::new();
        store.insert(challenge.clone()).unwrap();

        assert_eq!(
            store.insert(challenge),
            Err(ChallengeStoreError::DuplicateId(id))
        );
        assert_eq!(store.len(), 1);
    }
}
