use crate::providers::BoardState;
use challenges_core::ChallengeCommand;
use yew::prelude::*;

/// Board state accessible via hook
#[derive(Clone)]
pub struct ChallengesContext {
    pub state: UseReducerHandle<BoardState>,

    /// Send commands to the board
    pub send_command: Callback<ChallengeCommand>,
}

impl ChallengesContext {
    /// Returns a callback that sends a fixed command, ignoring its argument
    pub fn command<T: 'static>(&self, command: ChallengeCommand) -> Callback<T> {
        let send_command = self.send_command.clone();
        Callback::from(move |_: T| send_command.emit(command.clone()))
    }
}

impl PartialEq for ChallengesContext {
    fn eq(&self, other: &Self) -> bool {
        self.state.revision == other.state.revision
    }
}

/// Hook to access the challenge board
///
/// # Example
///
/// ```rust,no_run
/// use challenges_yew::use_challenges;
/// use challenges_core::{ChallengeCommand, ChallengeStatus};
/// # use yew::prelude::*;
/// # #[function_component]
/// # fn Example() -> Html {
///
/// let challenges = use_challenges();
///
/// // Switch to the failed tab
/// challenges.send_command.emit(ChallengeCommand::SelectType {
///     status: ChallengeStatus::Failed,
/// });
/// # html! {}
/// # }
/// ```
#[hook]
pub fn use_challenges() -> ChallengesContext {
    use_context::<ChallengesContext>()
        .expect("use_challenges must be used within a ChallengesProvider")
}
