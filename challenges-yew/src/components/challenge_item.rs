use crate::hooks::use_presence;
use crate::motion::MotionCue;
use challenges_core::{Challenge, ChallengeStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChallengeItemProps {
    pub challenge: Challenge,
    pub is_expanded: bool,
    /// Left its list; rendered only while the exit plays
    #[prop_or_default]
    pub is_leaving: bool,
    pub on_view_details: Callback<()>,
    pub on_update_status: Callback<ChallengeStatus>,
}

fn entry_class(is_leaving: bool) -> Option<&'static str> {
    is_leaving.then_some(MotionCue::ItemExit.class())
}

#[function_component(ChallengeItem)]
pub fn challenge_item(props: &ChallengeItemProps) -> Html {
    let challenge = &props.challenge;
    let image = challenge.image();

    let on_fail = props
        .on_update_status
        .reform(|_: MouseEvent| ChallengeStatus::Failed);
    let on_complete = props
        .on_update_status
        .reform(|_: MouseEvent| ChallengeStatus::Completed);
    let on_view_details = props.on_view_details.reform(|_: MouseEvent| ());

    let details = use_presence(props.is_expanded, MotionCue::DetailsCollapse, true);

    html! {
        <li class={classes!("challenge-item-entry", entry_class(props.is_leaving))}>
            <article class="challenge-item">
                <header>
                    <img src={image.src.clone()} alt={image.alt.clone()} />
                    <div class="challenge-item-meta">
                        <h2>{challenge.title()}</h2>
                        <p>{format!("Complete until {}", challenge.deadline().formatted())}</p>
                        <p class="challenge-item-actions">
                            <button onclick={on_fail} class="btn-negative">
                                {"Mark as failed"}
                            </button>
                            <button onclick={on_complete}>{"Mark as completed"}</button>
                        </p>
                    </div>
                </header>
                <div class="challenge-item-details">
                    <p>
                        <button onclick={on_view_details}>
                            {"View Details "}
                            <span class={classes!(
                                "challenge-item-details-icon",
                                props.is_expanded.then_some("expanded")
                            )}>
                                {"▲"}
                            </span>
                        </button>
                    </p>
                    {if let Some(cue) = details.cue(MotionCue::DetailsExpand, MotionCue::DetailsCollapse) {
                        html! {
                            <div class={cue.class()}>
                                <p class="challenge-item-description">
                                    {challenge.description()}
                                </p>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </article>
        </li>
    }
}
