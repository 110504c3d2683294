mod use_challenges;
mod use_presence;

pub use use_challenges::{use_challenges, ChallengesContext};
pub use use_presence::{use_presence, Presence};
