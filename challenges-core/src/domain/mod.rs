pub mod challenge;
pub mod deadline;
pub mod image;
pub mod partition;
pub mod store;

pub use challenge::{Challenge, ChallengeId, ChallengeStatus, NewChallenge, ParseStatusError};
pub use deadline::{Deadline, INVALID_DATE};
pub use image::{ImageAsset, ImageCatalog};
pub use partition::{ChallengePartition, StatusCounts};
pub use store::{ChallengeSnapshot, ChallengeStore, ChallengeStoreError};
