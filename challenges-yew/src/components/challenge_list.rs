use crate::components::{ChallengeItem, ChallengeTabs};
use crate::hooks::use_challenges;
use crate::motion::{current_cues, leaving_challenge, MotionCue};
use challenges_core::{Challenge, ChallengeCommand, ChallengeId, ChallengeStatus};
use gloo_timers::callback::Timeout;
use std::collections::HashSet;
use yew::prelude::*;

/// Shown when the selected tab has no challenges
pub const EMPTY_NOTICE: &str = "No challenges found.";

/// Item still playing its exit, and the last revision whose exit finished
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct ExitingItem {
    id: Option<ChallengeId>,
    settled: u64,
}

/// Rows to render in store order: the displayed challenges plus the one
/// leaving the list, flagged `true`
fn rows_with_leaving<'a>(
    all: &'a [Challenge],
    displayed: &[&Challenge],
    leaving: Option<ChallengeId>,
) -> Vec<(&'a Challenge, bool)> {
    let shown: HashSet<ChallengeId> = displayed.iter().map(|c| c.id()).collect();
    all.iter()
        .filter_map(|challenge| {
            let is_shown = shown.contains(&challenge.id());
            let is_leaving = !is_shown && leaving == Some(challenge.id());
            (is_shown || is_leaving).then_some((challenge, is_leaving))
        })
        .collect()
}

/// Tabs plus the challenges of the selected tab
#[function_component(Challenges)]
pub fn challenges() -> Html {
    let ctx = use_challenges();
    let board = &ctx.state.board;
    let revision = ctx.state.revision;
    let cues = current_cues(ctx.state.last_event.as_ref());

    let partition = board.partition();
    let selected_type = board.selected_type();

    // Tab whose list is on screen. Trails the selection while the old list exits.
    let shown_type = use_state_eq(|| selected_type);
    let list_timer = use_mut_ref(|| None::<Timeout>);
    {
        let shown_type = shown_type.clone();
        let animate = cues.contains(&MotionCue::ListExit);
        use_effect_with(selected_type, move |selected| {
            let selected = *selected;
            if animate && *shown_type != selected {
                *list_timer.borrow_mut() = Some(Timeout::new(
                    MotionCue::ListExit.duration_ms(),
                    move || shown_type.set(selected),
                ));
            } else {
                list_timer.borrow_mut().take();
                shown_type.set(selected);
            }
        });
    }
    let shown = *shown_type;
    let list_cue = if shown == selected_type {
        MotionCue::ListEnter
    } else {
        MotionCue::ListExit
    };

    let exiting = use_state_eq(ExitingItem::default);
    let item_timer = use_mut_ref(|| None::<Timeout>);
    let just_left = if revision > exiting.settled {
        leaving_challenge(ctx.state.last_event.as_ref(), shown)
    } else {
        None
    };
    {
        let exiting = exiting.clone();
        use_effect_with(revision, move |revision| {
            let revision = *revision;
            if let Some(id) = just_left {
                exiting.set(ExitingItem {
                    id: Some(id),
                    settled: exiting.settled,
                });
                let exiting = exiting.clone();
                *item_timer.borrow_mut() = Some(Timeout::new(
                    MotionCue::ItemExit.duration_ms(),
                    move || {
                        exiting.set(ExitingItem {
                            id: None,
                            settled: revision,
                        })
                    },
                ));
            }
        });
    }

    let displayed = partition.get(shown);
    let rows = rows_with_leaving(
        board.store().challenges(),
        displayed,
        just_left.or(exiting.id),
    );

    let on_select_type = {
        let send_command = ctx.send_command.clone();
        Callback::from(move |status: ChallengeStatus| {
            send_command.emit(ChallengeCommand::SelectType { status });
        })
    };

    let content = if rows.is_empty() {
        html! {
            <p key="fallback" class={list_cue.class()}>{EMPTY_NOTICE}</p>
        }
    } else {
        html! {
            <ol key="list" class={classes!("challenge-items", list_cue.class())}>
                {for rows.into_iter().map(|(challenge, is_leaving)| {
                    let id = challenge.id();
                    let on_view_details = ctx.command::<()>(ChallengeCommand::ToggleDetails { id });
                    let on_update_status = {
                        let send_command = ctx.send_command.clone();
                        Callback::from(move |status: ChallengeStatus| {
                            send_command.emit(ChallengeCommand::UpdateChallengeStatus { id, status });
                        })
                    };

                    html! {
                        <ChallengeItem
                            key={id.to_string()}
                            challenge={challenge.clone()}
                            is_expanded={board.is_expanded(id)}
                            {is_leaving}
                            {on_view_details}
                            {on_update_status}
                        />
                    }
                })}
            </ol>
        }
    };

    html! {
        <div id="challenges">
            <ChallengeTabs
                selected_type={selected_type}
                counts={partition.counts()}
                pulse={cues.contains(&MotionCue::BadgePulse)}
                on_select_type={on_select_type}
            >
                // Keyed by tab so switching replays the enter motion
                <div key={shown.as_str()}>
                    {content}
                </div>
            </ChallengeTabs>
        </div>
    }
}
