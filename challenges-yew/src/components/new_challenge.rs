use crate::hooks::use_challenges;
use crate::motion::{current_cues, MotionCue, SHAKE_STAGGER_MS};
use challenges_core::{ChallengeCommand, FormField};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Inline style staggering the shake of the n-th input
fn shake_delay(index: u32) -> String {
    format!("animation-delay: {}ms", index * SHAKE_STAGGER_MS)
}

/// Creation dialog body: text inputs, image picker and actions
#[function_component(NewChallenge)]
pub fn new_challenge() -> Html {
    let ctx = use_challenges();
    let shaking = use_state(|| false);

    // A rejected submit shakes the inputs for one cue duration
    {
        let shaking = shaking.clone();
        let rejected = current_cues(ctx.state.last_event.as_ref()).contains(&MotionCue::Shake);
        use_effect_with(ctx.state.revision, move |_| {
            if rejected {
                shaking.set(true);
                let shaking = shaking.clone();
                Timeout::new(MotionCue::Shake.duration_ms(), move || shaking.set(false)).forget();
            }
        });
    }

    let form = ctx.state.board.form();
    let draft = form.draft().cloned().unwrap_or_default();
    let catalog = ctx.state.board.catalog().clone();

    let on_field = |field: FormField| {
        let send_command = ctx.send_command.clone();
        move |value: String| {
            send_command.emit(ChallengeCommand::SetFormField { field, value });
        }
    };

    let on_title = {
        let emit = on_field(FormField::Title);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            emit(input.value());
        })
    };

    let on_description = {
        let emit = on_field(FormField::Description);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            emit(input.value());
        })
    };

    let on_deadline = {
        let emit = on_field(FormField::Deadline);
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            emit(input.value());
        })
    };

    let on_submit = {
        let send_command = ctx.send_command.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send_command.emit(ChallengeCommand::SubmitForm);
        })
    };

    let on_cancel = {
        let send_command = ctx.send_command.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            send_command.emit(ChallengeCommand::CancelForm);
        })
    };

    let shake_class = (*shaking).then_some(MotionCue::Shake.class());

    html! {
        <form id="new-challenge" onsubmit={on_submit}>
            <p class={classes!(shake_class)} style={shake_delay(0)}>
                <label for="title">{"Title"}</label>
                <input
                    type="text"
                    name="title"
                    id="title"
                    value={draft.title.clone()}
                    oninput={on_title}
                />
            </p>

            <p class={classes!(shake_class)} style={shake_delay(1)}>
                <label for="description">{"Description"}</label>
                <textarea
                    name="description"
                    id="description"
                    value={draft.description.clone()}
                    oninput={on_description}
                />
            </p>

            <p class={classes!(shake_class)} style={shake_delay(2)}>
                <label for="deadline">{"Deadline"}</label>
                <input
                    type="date"
                    name="deadline"
                    id="deadline"
                    value={draft.deadline.clone()}
                    oninput={on_deadline}
                />
            </p>

            <ul id="new-challenge-images">
                {for catalog.images().iter().map(|image| {
                    let is_selected = draft.image.as_ref() == Some(image);
                    let on_select = ctx.command::<MouseEvent>(ChallengeCommand::SelectImage {
                        image: image.clone(),
                    });
                    html! {
                        <li
                            key={image.alt.clone()}
                            onclick={on_select}
                            class={classes!(is_selected.then_some("selected"))}
                        >
                            <img src={image.src.clone()} alt={image.alt.clone()} />
                        </li>
                    }
                })}
            </ul>

            <p class="new-challenge-actions">
                <button type="button" onclick={on_cancel}>{"Cancel"}</button>
                <button type="submit">{"Add Challenge"}</button>
            </p>
        </form>
    }
}
