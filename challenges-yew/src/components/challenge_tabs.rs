use crate::components::Badge;
use challenges_core::{ChallengeStatus, StatusCounts};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct TabProps {
    is_selected: bool,
    on_select: Callback<MouseEvent>,
    badge_caption: usize,
    pulse: bool,
    label: AttrValue,
}

#[function_component(Tab)]
fn tab(props: &TabProps) -> Html {
    html! {
        <li>
            <button
                class={classes!(props.is_selected.then_some("selected"))}
                onclick={props.on_select.clone()}
            >
                {props.label.clone()}
                <Badge key={props.badge_caption} caption={props.badge_caption} pulse={props.pulse} />
            </button>
            {if props.is_selected {
                html! { <div class="active-tab-indicator" /> }
            } else {
                html! {}
            }}
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChallengeTabsProps {
    pub selected_type: ChallengeStatus,
    pub counts: StatusCounts,
    pub on_select_type: Callback<ChallengeStatus>,
    /// Counts just changed; remounted badges pulse
    #[prop_or_default]
    pub pulse: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Active / Completed / Failed tab bar with count badges
#[function_component(ChallengeTabs)]
pub fn challenge_tabs(props: &ChallengeTabsProps) -> Html {
    html! {
        <>
            <menu id="tabs">
                {for ChallengeStatus::ALL.iter().map(|status| {
                    let status = *status;
                    let on_select = props.on_select_type.reform(move |_: MouseEvent| status);
                    html! {
                        <Tab
                            key={status.as_str()}
                            is_selected={props.selected_type == status}
                            on_select={on_select}
                            badge_caption={props.counts.get(status)}
                            pulse={props.pulse}
                            label={status.label()}
                        />
                    }
                })}
            </menu>
            <div>{props.children.clone()}</div>
        </>
    }
}
