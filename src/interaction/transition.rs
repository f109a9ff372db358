use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;

use super::InteractionState;

/// How the beacon reaches a new target point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionDecision {
    /// Snap to the target immediately.
    Jump,
    /// Drive toward the target with the configured curve.
    Animate,
}

/// Built on every target recomputation, consumed immediately by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub from: Option<ScreenPoint>,
    pub to: ScreenPoint,
    pub previous_state: Option<InteractionState>,
    pub current_state: InteractionState,
}

impl TransitionRequest {
    #[must_use]
    pub fn decision(&self) -> TransitionDecision {
        decide_transition(self.previous_state, self.current_state)
    }
}

/// Only an idle-to-idle edge animates. The first target and every edge that
/// touches `Scrubbing` jump, so the beacon tracks the pointer without lag.
///
/// Positions play no part: an idle pulse at an unchanged target still animates.
#[must_use]
pub fn decide_transition(
    previous_state: Option<InteractionState>,
    current_state: InteractionState,
) -> TransitionDecision {
    match (previous_state, current_state) {
        (Some(InteractionState::Idle), InteractionState::Idle) => TransitionDecision::Animate,
        _ => TransitionDecision::Jump,
    }
}
