use tracing::trace;

use crate::interaction::{InteractionState, TransitionDecision};

use super::{BeaconEngine, BeaconFrame};

impl BeaconEngine {
    /// Advances the engine clock to `now_ms`, runs pending and scheduled
    /// pulses, samples the beacon position, and reports the frame to the
    /// subscriber.
    ///
    /// The clock never moves backwards; stale or non-finite timestamps reuse
    /// the last one.
    pub fn frame(&mut self, now_ms: f64) -> BeaconFrame {
        self.advance_clock(now_ms);

        if self.pulse_requests.replace(0) > 0 {
            if let Some(update) = self.scrub.pulse() {
                self.run_pulse(update);
            }
        }
        self.tick_idle_pulse();
        self.driver.sample(self.clock_ms);

        let frame = self.build_frame();
        self.emit(&frame);
        frame
    }

    /// Moves the engine clock forward without sampling or emitting.
    ///
    /// Animations started by setters and pointer events begin at the engine
    /// clock, so hosts that push data between frames call this first with
    /// the current time.
    pub fn advance_clock(&mut self, now_ms: f64) {
        if now_ms.is_finite() && now_ms > self.clock_ms {
            self.clock_ms = now_ms;
        }
    }

    fn tick_idle_pulse(&mut self) {
        let eligible = self.config.idle_pulse
            && !self.scrub.state().is_engaged()
            && self.target.is_some();
        if !eligible {
            self.pulse_timer_ms = None;
            return;
        }

        let Some(timer_ms) = self.pulse_timer_ms else {
            self.pulse_timer_ms = Some(self.clock_ms);
            return;
        };
        if self.clock_ms - timer_ms < self.config.pulse.interval_ms {
            return;
        }

        self.pulse_timer_ms = Some(self.clock_ms);
        if let Some(update) = self.scrub.on_idle_pulse_tick() {
            trace!(index = ?update.index, "idle pulse tick");
            self.run_pulse(update);
        }
    }

    pub(super) fn pulse_progress(&self) -> Option<f64> {
        let started_ms = self.pulse_started_ms?;
        let progress = (self.clock_ms - started_ms) / self.config.pulse.ring_duration_ms;
        (0.0..1.0).contains(&progress).then_some(progress)
    }

    pub(super) fn build_frame(&self) -> BeaconFrame {
        let interaction = self.scrub.interaction_state();
        BeaconFrame {
            timestamp_ms: self.clock_ms,
            target: self.target.clone(),
            position: self.driver.position(),
            interaction,
            overlay_visible: interaction == InteractionState::Scrubbing
                && !self.config.hide_overlay,
            pulse_progress: self.pulse_progress(),
            animating: self.driver.is_animating(),
        }
    }

    pub(super) fn emit(&mut self, frame: &BeaconFrame) {
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber(frame);
        }
    }

    /// Reports a state change synchronously. Animated changes are left to
    /// the next `frame`, which samples them.
    pub(super) fn publish(&mut self, decision: Option<TransitionDecision>) {
        if decision == Some(TransitionDecision::Animate) {
            return;
        }
        let frame = self.build_frame();
        self.emit(&frame);
    }
}
