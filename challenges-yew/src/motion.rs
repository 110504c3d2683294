//! Motion cues: the animation layer driven by board events.
//!
//! Cues map onto CSS classes defined in `styles.css`. Nothing here feeds back
//! into the board; dropping the stylesheet leaves the app fully functional.

use challenges_core::{ChallengeEvent, ChallengeId, ChallengeStatus};

/// Per-input delay of the shake cue
pub const SHAKE_STAGGER_MS: u32 = 50;

/// Inputs shaken on a rejected submit (title, description, deadline)
pub const SHAKEN_INPUTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionCue {
    /// Form inputs wiggle horizontally (-10, 0, 10, 0 px)
    Shake,
    /// Challenge list or empty notice slides down into place
    ListEnter,
    /// Challenge list or empty notice slides up and fades
    ListExit,
    /// A single item leaves its list
    ItemExit,
    /// Tab badge scales 1 → 1.2 → 1
    BadgePulse,
    /// Detail panel opens, arrow turns
    DetailsExpand,
    /// Detail panel closes, arrow turns back
    DetailsCollapse,
    /// Dialog drops in from above
    ModalEnter,
    /// Dialog lifts out
    ModalExit,
}

impl MotionCue {
    pub fn class(&self) -> &'static str {
        match self {
            MotionCue::Shake => "motion-shake",
            MotionCue::ListEnter => "motion-list-enter",
            MotionCue::ListExit => "motion-list-exit",
            MotionCue::ItemExit => "motion-item-exit",
            MotionCue::BadgePulse => "motion-badge-pulse",
            MotionCue::DetailsExpand => "motion-details-expand",
            MotionCue::DetailsCollapse => "motion-details-collapse",
            MotionCue::ModalEnter => "motion-modal-enter",
            MotionCue::ModalExit => "motion-modal-exit",
        }
    }

    /// How long the cue's class must stay applied
    pub fn duration_ms(&self) -> u32 {
        match self {
            MotionCue::Shake => 200 + SHAKE_STAGGER_MS * (SHAKEN_INPUTS - 1),
            MotionCue::BadgePulse => 300,
            MotionCue::ItemExit => 250,
            MotionCue::ListEnter
            | MotionCue::ListExit
            | MotionCue::DetailsExpand
            | MotionCue::DetailsCollapse
            | MotionCue::ModalEnter
            | MotionCue::ModalExit => 300,
        }
    }
}

/// Cues triggered by a board event
pub fn cues_for(event: &ChallengeEvent) -> Vec<MotionCue> {
    match event {
        ChallengeEvent::ChallengeAdded { .. } => vec![MotionCue::ModalExit, MotionCue::BadgePulse],
        ChallengeEvent::ChallengeStatusChanged { .. } => {
            vec![MotionCue::ItemExit, MotionCue::BadgePulse]
        }
        ChallengeEvent::TypeSelected { .. } => vec![MotionCue::ListExit, MotionCue::ListEnter],
        ChallengeEvent::DetailsToggled { expanded, .. } => match expanded {
            Some(_) => vec![MotionCue::DetailsExpand],
            None => vec![MotionCue::DetailsCollapse],
        },
        ChallengeEvent::FormOpened => vec![MotionCue::ModalEnter],
        ChallengeEvent::FormClosed => vec![MotionCue::ModalExit],
        ChallengeEvent::FormRejected { .. } => vec![MotionCue::Shake],
        ChallengeEvent::FormFieldChanged { .. }
        | ChallengeEvent::ImageSelected { .. }
        | ChallengeEvent::CommandFailed { .. } => Vec::new(),
    }
}

/// Cues of the latest event, empty before the first command
pub fn current_cues(event: Option<&ChallengeEvent>) -> Vec<MotionCue> {
    event.map(cues_for).unwrap_or_default()
}

/// Challenge that just left the list of `shown`, if the event plays an
/// item exit for it
pub fn leaving_challenge(
    event: Option<&ChallengeEvent>,
    shown: ChallengeStatus,
) -> Option<ChallengeId> {
    let event = event?;
    if !cues_for(event).contains(&MotionCue::ItemExit) {
        return None;
    }
    match event {
        ChallengeEvent::ChallengeStatusChanged { id, from, to } if *from == shown && from != to => {
            Some(*id)
        }
        _ => None,
    }
}

/// Piecewise-linear mapping of `value` from `inputs` onto `outputs`.
///
/// `inputs` must be ascending and the same length as `outputs`. Values
/// outside the input range clamp to the first/last output.
pub fn interpolate(value: f64, inputs: &[f64], outputs: &[f64]) -> f64 {
    let len = inputs.len().min(outputs.len());
    if len == 0 {
        return value;
    }
    if value <= inputs[0] {
        return outputs[0];
    }
    if value >= inputs[len - 1] {
        return outputs[len - 1];
    }

    for i in 1..len {
        let (x0, x1) = (inputs[i - 1], inputs[i]);
        if value <= x1 {
            let (y0, y1) = (outputs[i - 1], outputs[i]);
            if x1 == x0 {
                return y1;
            }
            return y0 + (value - x0) / (x1 - x0) * (y1 - y0);
        }
    }

    outputs[len - 1]
}

/// A scroll-linked value: scroll offset ranges mapped onto output values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTransform {
    pub inputs: &'static [f64],
    pub outputs: &'static [f64],
}

impl ScrollTransform {
    pub const fn new(inputs: &'static [f64], outputs: &'static [f64]) -> Self {
        Self { inputs, outputs }
    }

    pub fn at(&self, scroll_y: f64) -> f64 {
        interpolate(scroll_y, self.inputs, self.outputs)
    }
}
