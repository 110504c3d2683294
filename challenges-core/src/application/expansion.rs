use crate::domain::ChallengeId;

/// The one challenge whose details are open, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpansionState {
    expanded: Option<ChallengeId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> Option<ChallengeId> {
        self.expanded
    }

    pub fn is_expanded(&self, id: ChallengeId) -> bool {
        self.expanded == Some(id)
    }

    /// Collapse `id` if it is open, otherwise open it (closing any other).
    /// Returns the new state.
    pub fn toggle_details(&mut self, id: ChallengeId) -> Option<ChallengeId> {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_initially_none() {
        assert_eq!(ExpansionState::new().expanded(), None);
    }

    #[test]
    fn test_toggle_twice_collapses() {
        let mut expansion = ExpansionState::new();
        let id = Uuid::new_v4();

        assert_eq!(expansion.toggle_details(id), Some(id));
        assert!(expansion.is_expanded(id));
        assert_eq!(expansion.toggle_details(id), None);
        assert!(!expansion.is_expanded(id));
    }

    #[test]
    fn test_expanding_another_replaces() {
        let mut expansion = ExpansionState::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        expansion.toggle_details(first);
        expansion.toggle_details(second);

        assert!(expansion.is_expanded(second));
        assert!(!expansion.is_expanded(first));
    }

    #[test]
    fn test_at_most_one_expanded_after_any_sequence() {
        let mut expansion = ExpansionState::new();
        let ids: Vec<_> = (0..4).map(|_| Uuid::new_v4()).collect();

        for step in 0..25 {
            let id = ids[(step * 7 + step / 3) % ids.len()];
            expansion.toggle_details(id);

            let open = ids.iter().filter(|id| expansion.is_expanded(**id)).count();
            assert!(open <= 1);
        }
    }
}
