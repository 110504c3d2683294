//! # Challenges Yew
//!
//! Browser front end for the challenge board: welcome page, tabbed
//! challenge list and the creation dialog.

pub mod app;
pub mod components;
pub mod hooks;
pub mod motion;
pub mod pages;
pub mod providers;

// Re-exports for convenience
pub use app::{App, AppProps, AppState};
pub use components::{ChallengeItem, ChallengeTabs, Challenges, Header, Modal, NewChallenge};
pub use hooks::{use_challenges, use_presence, ChallengesContext, Presence};
pub use motion::{
    cues_for, current_cues, interpolate, leaving_challenge, MotionCue, ScrollTransform,
};
pub use pages::{ChallengesScreen, WelcomeScreen};
pub use providers::{BoardState, ChallengesProvider, ChallengesProviderProps};
