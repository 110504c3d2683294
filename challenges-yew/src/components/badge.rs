use crate::motion::MotionCue;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub caption: usize,
    /// Play the pulse when mounted
    #[prop_or_default]
    pub pulse: bool,
}

/// Count bubble on a tab. Parents key it by caption so that a new count
/// remounts it and the pulse runs again when asked to.
#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.pulse.then_some(MotionCue::BadgePulse.class()))}>
            {props.caption}
        </span>
    }
}
