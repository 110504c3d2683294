//! UI components for the challenge board

mod badge;
mod challenge_item;
mod challenge_list;
mod challenge_tabs;
mod header;
mod modal;
mod new_challenge;

pub use badge::Badge;
pub use challenge_item::ChallengeItem;
pub use challenge_list::{Challenges, EMPTY_NOTICE};
pub use challenge_tabs::ChallengeTabs;
pub use header::Header;
pub use modal::{Modal, MODAL_HOST_ID};
pub use new_challenge::NewChallenge;
