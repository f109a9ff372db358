use tracing::{debug, trace};

use crate::core::Projector;
use crate::interaction::{InteractionState, PointerEvent, ScrubUpdate, TransitionDecision};

use super::{BeaconEngine, PulseHandle};

impl BeaconEngine {
    /// Drives the scrub controller from host pointer input.
    ///
    /// Moves before scales are set, moves over an empty series, and releases
    /// while disengaged are no-ops.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        let update = match event {
            PointerEvent::Move { x } => {
                let Some(x_scale) = self.projector.as_ref().map(Projector::x_scale) else {
                    trace!(x, "pointer move ignored before scales are set");
                    return;
                };
                self.scrub.on_pointer_move(x, x_scale)
            }
            PointerEvent::End => self.scrub.on_pointer_end(),
        };
        let Some(update) = update else {
            return;
        };

        if update.state == InteractionState::Idle {
            debug!(index = ?update.index, "scrub released");
            self.pulse_timer_ms = Some(self.clock_ms);
        }
        let decision = self.retarget(update);
        self.publish(decision);
    }

    pub fn pointer_move(&mut self, x: f64) {
        self.handle_pointer_event(PointerEvent::Move { x });
    }

    pub fn pointer_end(&mut self) {
        self.handle_pointer_event(PointerEvent::End);
    }

    /// Issues an idle-style transition at the displayed index right away,
    /// whatever the interaction state.
    pub fn pulse(&mut self) {
        let Some(update) = self.scrub.pulse() else {
            return;
        };
        let decision = self.run_pulse(update);
        self.publish(decision);
    }

    /// Handle that lets other components request a pulse without borrowing
    /// the engine; requests run on the next [`BeaconEngine::frame`].
    #[must_use]
    pub fn pulse_handle(&self) -> PulseHandle {
        PulseHandle::new(self.pulse_requests.clone())
    }

    /// Re-targets for a pulse update and starts a ring when it animates.
    pub(super) fn run_pulse(&mut self, update: ScrubUpdate) -> Option<TransitionDecision> {
        let decision = self.retarget(update);
        if decision == Some(TransitionDecision::Animate) {
            self.pulse_started_ms = Some(self.clock_ms);
        }
        decision
    }
}
