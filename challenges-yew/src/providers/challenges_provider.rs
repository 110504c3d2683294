use crate::hooks::ChallengesContext;
use challenges_core::{ChallengeCommand, ChallengeEvent, ChallengeEventLoop, ImageCatalog};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChallengesProviderProps {
    /// Images offered by the creation dialog
    #[prop_or_default]
    pub catalog: Option<ImageCatalog>,
    pub children: Children,
}

/// Board state held by the provider; every command produces a new value
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    pub board: ChallengeEventLoop,
    pub last_event: Option<ChallengeEvent>,
    /// Bumped on every command, so repeated identical events are still seen
    pub revision: u64,
}

impl BoardState {
    pub fn new(board: ChallengeEventLoop) -> Self {
        Self {
            board,
            last_event: None,
            revision: 0,
        }
    }
}

impl Reducible for BoardState {
    type Action = ChallengeCommand;

    fn reduce(self: Rc<Self>, command: ChallengeCommand) -> Rc<Self> {
        let mut board = self.board.clone();
        let event = board.handle_command(command);

        if event.is_failure() {
            tracing::debug!("Command rejected: {:?}", event);
        } else {
            tracing::debug!("Board event: {:?}", event);
        }

        Rc::new(BoardState {
            board,
            last_event: Some(event),
            revision: self.revision + 1,
        })
    }
}

#[function_component(ChallengesProvider)]
pub fn challenges_provider(props: &ChallengesProviderProps) -> Html {
    let catalog = props.catalog.clone();
    let state = use_reducer(move || {
        let board = match catalog {
            Some(catalog) => ChallengeEventLoop::with_catalog(catalog),
            None => ChallengeEventLoop::new(),
        };
        BoardState::new(board)
    });

    let send_command = {
        let dispatcher = state.dispatcher();
        Callback::from(move |cmd: ChallengeCommand| {
            tracing::debug!("📤 Command: {}", cmd.name());
            dispatcher.dispatch(cmd);
        })
    };

    let context = ChallengesContext {
        state,
        send_command,
    };

    html! {
        <ContextProvider<ChallengesContext> {context}>
            {props.children.clone()}
        </ContextProvider<ChallengesContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{current_cues, leaving_challenge, MotionCue};
    use challenges_core::{ChallengeStatus, NewChallenge};

    fn reduce(state: BoardState, command: ChallengeCommand) -> BoardState {
        (*Rc::new(state).reduce(command)).clone()
    }

    #[test]
    fn test_reduce_bumps_revision_and_records_event() {
        let state = BoardState::default();
        let next = reduce(state, ChallengeCommand::OpenForm);

        assert_eq!(next.revision, 1);
        assert_eq!(next.last_event, Some(ChallengeEvent::FormOpened));
        assert!(next.board.form().is_open());
    }

    #[test]
    fn test_reduce_leaves_previous_state_untouched() {
        let state = Rc::new(BoardState::default());
        let image = state.board.catalog().images()[0].clone();

        let next = state.clone().reduce(ChallengeCommand::AddChallenge {
            id: None,
            input: NewChallenge::new("Run 5k", "Every morning", "2024-12-01", image),
        });

        assert!(state.board.store().is_empty());
        assert_eq!(next.board.partition().get(ChallengeStatus::Active).len(), 1);
    }

    #[test]
    fn test_completing_plays_item_exit_on_active_list() {
        let state = BoardState::default();
        let image = state.board.catalog().images()[0].clone();
        let state = reduce(
            state,
            ChallengeCommand::AddChallenge {
                id: None,
                input: NewChallenge::new("Run 5k", "Every morning", "2024-12-01", image),
            },
        );
        let id = state.board.store().challenges()[0].id();

        let next = reduce(
            state,
            ChallengeCommand::UpdateChallengeStatus {
                id,
                status: ChallengeStatus::Completed,
            },
        );

        assert!(current_cues(next.last_event.as_ref()).contains(&MotionCue::ItemExit));
        assert_eq!(
            leaving_challenge(next.last_event.as_ref(), ChallengeStatus::Active),
            Some(id)
        );
        assert!(next.board.displayed().is_empty());
    }
}
