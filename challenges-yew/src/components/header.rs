use crate::components::{Modal, NewChallenge};
use crate::hooks::{use_challenges, use_presence};
use crate::motion::{current_cues, MotionCue};
use challenges_core::ChallengeCommand;
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    let ctx = use_challenges();
    let is_creating = ctx.state.board.form().is_open();
    let closing = current_cues(ctx.state.last_event.as_ref()).contains(&MotionCue::ModalExit);
    let dialog = use_presence(is_creating, MotionCue::ModalExit, closing);

    let on_start_add = ctx.command::<MouseEvent>(ChallengeCommand::OpenForm);
    let on_close = ctx.command::<()>(ChallengeCommand::CancelForm);

    html! {
        <>
            {if let Some(cue) = dialog.cue(MotionCue::ModalEnter, MotionCue::ModalExit) {
                html! {
                    <Modal title="New Challenge" {on_close} {cue}>
                        <NewChallenge />
                    </Modal>
                }
            } else {
                html! {}
            }}
            <header id="main-header">
                <h1>{"Your Challenges"}</h1>
                <button onclick={on_start_add} class="button">
                    {"Add Challenge"}
                </button>
            </header>
        </>
    }
}
