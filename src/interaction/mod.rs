mod animation;
mod scrub;
mod transition;

use serde::{Deserialize, Serialize};

pub use animation::{
    AnimationSample, BeaconAnimation, Easing, SpringParams, TransitionConfig, TransitionDriver,
};
pub use scrub::{ReleaseBehavior, ScrubController, ScrubUpdate, resolve_nearest_index};
pub use transition::{TransitionDecision, TransitionRequest, decide_transition};

/// Pointer engagement as seen by the transition policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionState {
    /// No pointer engaged; the beacon may still pulse or follow live data.
    Idle,
    /// A pointer is down and moving.
    Scrubbing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScrubState {
    #[default]
    Disengaged,
    Engaged {
        index: usize,
    },
}

impl ScrubState {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Disengaged => None,
            Self::Engaged { index } => Some(index),
        }
    }

    #[must_use]
    pub fn is_engaged(self) -> bool {
        matches!(self, Self::Engaged { .. })
    }
}

/// Raw pointer input forwarded by the host gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Move { x: f64 },
    End,
}
