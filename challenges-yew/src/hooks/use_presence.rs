use crate::motion::MotionCue;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Whether an element that animates out is on screen, and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present,
    /// Gone from the board but still mounted while its exit cue runs
    Exiting,
    Gone,
}

impl Presence {
    /// `was_present`: rendered as present last time. `exiting`: an exit
    /// timer is still running. `animate_exit`: the current event carries the
    /// exit cue.
    pub fn resolve(present: bool, was_present: bool, exiting: bool, animate_exit: bool) -> Self {
        if present {
            Presence::Present
        } else if exiting || (animate_exit && was_present) {
            Presence::Exiting
        } else {
            Presence::Gone
        }
    }

    pub fn is_rendered(&self) -> bool {
        !matches!(self, Presence::Gone)
    }

    pub fn cue(&self, enter: MotionCue, exit: MotionCue) -> Option<MotionCue> {
        match self {
            Presence::Present => Some(enter),
            Presence::Exiting => Some(exit),
            Presence::Gone => None,
        }
    }
}

/// Keeps an element mounted for `exit`'s duration after `present` turns
/// false, so its exit class can play.
#[hook]
pub fn use_presence(present: bool, exit: MotionCue, animate_exit: bool) -> Presence {
    let exiting = use_state_eq(|| false);
    let was_present = use_mut_ref(|| present);
    let timer = use_mut_ref(|| None::<Timeout>);

    let presence = Presence::resolve(present, *was_present.borrow(), *exiting, animate_exit);

    {
        let exiting = exiting.clone();
        use_effect_with(presence, move |presence| {
            let previously = was_present.replace(*presence == Presence::Present);
            match presence {
                Presence::Present => {
                    // Dropping the timeout cancels it
                    timer.borrow_mut().take();
                    exiting.set(false);
                }
                Presence::Exiting if previously => {
                    exiting.set(true);
                    let exiting = exiting.clone();
                    *timer.borrow_mut() =
                        Some(Timeout::new(exit.duration_ms(), move || exiting.set(false)));
                }
                Presence::Exiting | Presence::Gone => {}
            }
        });
    }

    presence
}
