mod commands;
mod creation_form;
mod event_loop;
mod events;
mod expansion;
mod tab_selection;

pub use commands::ChallengeCommand;
pub use creation_form::{CreationForm, FormDraft, FormError, FormField};
pub use event_loop::ChallengeEventLoop;
pub use events::ChallengeEvent;
pub use expansion::ExpansionState;
pub use tab_selection::TabSelection;
