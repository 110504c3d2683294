mod challenges_provider;

pub use challenges_provider::{BoardState, ChallengesProvider, ChallengesProviderProps};
