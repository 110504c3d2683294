use challenges_core::{
    Challenge, ChallengeCommand, ChallengeEvent, ChallengeEventLoop, ChallengeId, ChallengeStore,
    ImageAsset,
};
use cucumber::World;
use std::collections::HashMap;

#[derive(Debug, World, Default)]
pub struct ChallengeWorld {
    /// Command loop (the system under test)
    pub event_loop: ChallengeEventLoop,

    /// Last command executed (for debugging)
    pub last_command: Option<ChallengeCommand>,

    /// Last event emitted (for assertions)
    pub last_event: Option<ChallengeEvent>,

    /// Challenge ids by title
    pub challenge_ids: HashMap<String, ChallengeId>,

    /// Store captured by a "remember the store" step
    pub snapshot: Option<ChallengeStore>,

    /// Reason of the last CommandFailed
    pub last_error: Option<String>,
}

impl ChallengeWorld {
    /// Execute a command and store the result
    pub fn execute(&mut self, command: ChallengeCommand) -> &ChallengeEvent {
        self.last_command = Some(command.clone());
        let event = self.event_loop.handle_command(command);

        match &event {
            ChallengeEvent::CommandFailed { reason, .. } => {
                self.last_error = Some(reason.clone());
            }
            ChallengeEvent::ChallengeAdded { challenge } => {
                self.challenge_ids
                    .insert(challenge.title().to_string(), challenge.id());
            }
            _ => {}
        }

        self.last_event.insert(event)
    }

    /// Get the last event (panics if none)
    pub fn last_event(&self) -> &ChallengeEvent {
        self.last_event.as_ref().expect("No event executed yet")
    }

    /// Get challenge id by title
    pub fn challenge_id(&self, title: &str) -> ChallengeId {
        *self
            .challenge_ids
            .get(title)
            .unwrap_or_else(|| panic!("Challenge '{}' not found", title))
    }

    /// Get a challenge by title
    pub fn challenge(&self, title: &str) -> &Challenge {
        let id = self.challenge_id(title);
        self.event_loop
            .store()
            .get(id)
            .unwrap_or_else(|| panic!("Challenge '{}' not in store", title))
    }

    /// Catalog image by alt text (panics if unknown)
    pub fn image(&self, alt: &str) -> ImageAsset {
        self.event_loop
            .catalog()
            .find(alt)
            .cloned()
            .unwrap_or_else(|| panic!("Image '{}' not in catalog", alt))
    }

    /// First catalog image
    pub fn any_image(&self) -> ImageAsset {
        self.event_loop.catalog().images()[0].clone()
    }

    /// Check if last event was a failure
    pub fn last_command_failed(&self) -> bool {
        matches!(self.last_event, Some(ChallengeEvent::CommandFailed { .. }))
    }

    /// Get last error message
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
