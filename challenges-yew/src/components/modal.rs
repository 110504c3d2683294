use crate::motion::MotionCue;
use yew::prelude::*;

/// Id of the host element modals are portalled into
pub const MODAL_HOST_ID: &str = "modal";

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Motion applied to the dialog; switched to the exit cue while closing
    #[prop_or(MotionCue::ModalEnter)]
    pub cue: MotionCue,
    pub children: Children,
}

/// Backdrop plus dialog, rendered into the `#modal` host element.
///
/// Falls back to rendering in place when the host is missing.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());

    let content = html! {
        <>
            <div class="backdrop" onclick={on_backdrop} />
            <dialog open={true} class={classes!("modal", props.cue.class())}>
                <h2>{props.title.clone()}</h2>
                {props.children.clone()}
            </dialog>
        </>
    };

    match gloo::utils::document().get_element_by_id(MODAL_HOST_ID) {
        Some(host) => create_portal(content, host),
        None => {
            tracing::debug!("No #{} element, rendering modal inline", MODAL_HOST_ID);
            content
        }
    }
}
