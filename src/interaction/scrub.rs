use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, ScreenPoint};

use super::{InteractionState, ScrubState, TransitionRequest};

/// What the beacon shows once the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReleaseBehavior {
    /// Stay at the last engaged index.
    #[default]
    RetainLastIndex,
    /// Go back to the most recent data index.
    ReturnToLatest,
    /// Hide until the next engagement.
    Hide,
}

/// Nearest data index under `pixel_x`, clamped to `[0, len - 1]`.
///
/// `None` for an empty series or a non-finite pixel.
#[must_use]
pub fn resolve_nearest_index(x_scale: LinearScale, pixel_x: f64, len: usize) -> Option<usize> {
    if len == 0 || !pixel_x.is_finite() {
        return None;
    }
    let position = x_scale.invert(pixel_x);
    if position.is_nan() {
        return None;
    }
    let last = (len - 1) as f64;
    Some(position.round().clamp(0.0, last) as usize)
}

/// Index and interaction state a target must be recomputed for.
///
/// `index == None` means the beacon has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrubUpdate {
    pub index: Option<usize>,
    pub state: InteractionState,
}

/// Owns the scrub index and the previous interaction state/target pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubController {
    state: ScrubState,
    release_behavior: ReleaseBehavior,
    idle_pulse: bool,
    series_len: usize,
    resting_index: Option<usize>,
    hidden: bool,
    last_interaction: Option<InteractionState>,
    last_target: Option<ScreenPoint>,
}

impl Default for ScrubController {
    fn default() -> Self {
        Self::new(ReleaseBehavior::default(), false)
    }
}

impl ScrubController {
    #[must_use]
    pub fn new(release_behavior: ReleaseBehavior, idle_pulse: bool) -> Self {
        Self {
            state: ScrubState::Disengaged,
            release_behavior,
            idle_pulse,
            series_len: 0,
            resting_index: None,
            hidden: false,
            last_interaction: None,
            last_target: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> ScrubState {
        self.state
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        if self.state.is_engaged() {
            InteractionState::Scrubbing
        } else {
            InteractionState::Idle
        }
    }

    #[must_use]
    pub fn last_interaction_state(&self) -> Option<InteractionState> {
        self.last_interaction
    }

    #[must_use]
    pub fn last_target(&self) -> Option<ScreenPoint> {
        self.last_target
    }

    #[must_use]
    pub fn series_len(&self) -> usize {
        self.series_len
    }

    #[must_use]
    pub fn release_behavior(&self) -> ReleaseBehavior {
        self.release_behavior
    }

    pub fn set_release_behavior(&mut self, behavior: ReleaseBehavior) {
        self.release_behavior = behavior;
    }

    #[must_use]
    pub fn idle_pulse(&self) -> bool {
        self.idle_pulse
    }

    pub fn set_idle_pulse(&mut self, enabled: bool) {
        self.idle_pulse = enabled;
    }

    /// Index the beacon currently sits at, if visible.
    #[must_use]
    pub fn display_index(&self) -> Option<usize> {
        match self.state {
            ScrubState::Engaged { index } => Some(index),
            ScrubState::Disengaged if self.hidden => None,
            ScrubState::Disengaged => self
                .resting_index
                .or_else(|| self.series_len.checked_sub(1)),
        }
    }

    /// Update describing the present state, for re-targeting after data or
    /// scale changes.
    #[must_use]
    pub fn current_update(&self) -> ScrubUpdate {
        ScrubUpdate {
            index: self.display_index(),
            state: self.interaction_state(),
        }
    }

    /// Clamps held indexes to a new series length. An empty series
    /// disengages.
    pub fn set_series_len(&mut self, len: usize) {
        self.series_len = len;
        let Some(last) = len.checked_sub(1) else {
            self.state = ScrubState::Disengaged;
            self.resting_index = None;
            return;
        };
        if let ScrubState::Engaged { index } = self.state {
            self.state = ScrubState::Engaged {
                index: index.min(last),
            };
        }
        self.resting_index = self.resting_index.map(|index| index.min(last));
    }

    pub fn on_pointer_move(&mut self, pixel_x: f64, x_scale: LinearScale) -> Option<ScrubUpdate> {
        let index = resolve_nearest_index(x_scale, pixel_x, self.series_len)?;
        let next = ScrubState::Engaged { index };
        if self.state == next && self.last_interaction == Some(InteractionState::Scrubbing) {
            return None;
        }

        self.state = next;
        self.hidden = false;
        Some(ScrubUpdate {
            index: Some(index),
            state: InteractionState::Scrubbing,
        })
    }

    pub fn on_pointer_end(&mut self) -> Option<ScrubUpdate> {
        let ScrubState::Engaged { index } = self.state else {
            return None;
        };

        // A release always ends a scrub, even if a pulse was committed as
        // idle while the pointer was down.
        self.last_interaction = Some(InteractionState::Scrubbing);
        self.state = ScrubState::Disengaged;
        match self.release_behavior {
            ReleaseBehavior::RetainLastIndex => self.resting_index = Some(index),
            ReleaseBehavior::ReturnToLatest => self.resting_index = None,
            ReleaseBehavior::Hide => {
                self.resting_index = None;
                self.hidden = true;
            }
        }

        Some(ScrubUpdate {
            index: self.display_index(),
            state: InteractionState::Idle,
        })
    }

    /// Re-emits the resting target as idle; only while disengaged with idle
    /// pulsing enabled.
    pub fn on_idle_pulse_tick(&mut self) -> Option<ScrubUpdate> {
        if !self.idle_pulse || self.state.is_engaged() {
            return None;
        }
        self.pulse()
    }

    /// Idle-style update at the displayed index, whatever the current state.
    pub fn pulse(&mut self) -> Option<ScrubUpdate> {
        let index = self.display_index()?;
        Some(ScrubUpdate {
            index: Some(index),
            state: InteractionState::Idle,
        })
    }

    /// Records the new target and state together and returns the request the
    /// transition policy consumes. No request is built for a missing target.
    pub fn commit(
        &mut self,
        target: Option<ScreenPoint>,
        state: InteractionState,
    ) -> Option<TransitionRequest> {
        let previous_state = self.last_interaction.replace(state);
        let from = std::mem::replace(&mut self.last_target, target);
        target.map(|to| TransitionRequest {
            from,
            to,
            previous_state,
            current_state: state,
        })
    }

    /// Back to the freshly-mounted state, keeping configuration and length.
    pub fn reset(&mut self) {
        self.state = ScrubState::Disengaged;
        self.resting_index = None;
        self.hidden = false;
        self.last_interaction = None;
        self.last_target = None;
    }
}
