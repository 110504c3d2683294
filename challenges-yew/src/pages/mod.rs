mod challenges_screen;
mod welcome_screen;

pub use challenges_screen::ChallengesScreen;
pub use welcome_screen::{ParallaxStyles, WelcomeScreen};
