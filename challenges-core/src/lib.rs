//! # Challenges Core
//!
//! Domain model and command loop for tracking personal challenges.
//! Holds no presentation code; the browser and terminal front ends drive it
//! through [`ChallengeCommand`]s.

pub mod application;
pub mod domain;

pub use application::{
    ChallengeCommand, ChallengeEvent, ChallengeEventLoop, CreationForm, ExpansionState, FormDraft,
    FormError, FormField, TabSelection,
};
pub use domain::{
    Challenge, ChallengeId, ChallengePartition, ChallengeSnapshot, ChallengeStatus,
    ChallengeStore, ChallengeStoreError, Deadline, ImageAsset, ImageCatalog, NewChallenge,
    StatusCounts,
};
