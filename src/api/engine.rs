use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::core::{
    AxisScales, Projector, ScreenPoint, Series, Viewport, pad_series_to_common_length,
    validate_series_ids,
};
use crate::error::ChartResult;
use crate::interaction::{
    InteractionState, ScrubController, ScrubState, TransitionDecision, TransitionDriver,
};

use super::validation::validate_beacon_config;
use super::{BeaconConfig, BeaconFrame, BeaconTarget, LabelFormatterFn};

pub type FrameSubscriber = Box<dyn FnMut(&BeaconFrame) + 'static>;

/// Scrub beacon facade consumed by the surrounding chart component.
///
/// `BeaconEngine` reads series and scales owned by the chart, owns one scrub
/// controller and transition driver, and reports beacon frames to a single
/// subscriber. Everything runs on the host's UI timeline: pointer events,
/// pulses and `frame` calls are never concurrent.
pub struct BeaconEngine {
    pub(super) config: BeaconConfig,
    pub(super) series: Vec<Series>,
    pub(super) beacon_series: Option<usize>,
    pub(super) projector: Option<Projector>,
    pub(super) scrub: ScrubController,
    pub(super) driver: TransitionDriver,
    pub(super) target: Option<BeaconTarget>,
    pub(super) subscriber: Option<FrameSubscriber>,
    pub(super) label_formatter: Option<LabelFormatterFn>,
    pub(super) pulse_requests: Rc<Cell<u32>>,
    pub(super) clock_ms: f64,
    pub(super) pulse_timer_ms: Option<f64>,
    pub(super) pulse_started_ms: Option<f64>,
}

impl BeaconEngine {
    pub fn new(config: BeaconConfig) -> ChartResult<Self> {
        validate_beacon_config(&config)?;

        Ok(Self {
            scrub: ScrubController::new(config.release_behavior, config.idle_pulse),
            driver: TransitionDriver::new(config.transition),
            config,
            series: Vec::new(),
            beacon_series: None,
            projector: None,
            target: None,
            subscriber: None,
            label_formatter: None,
            pulse_requests: Rc::new(Cell::new(0)),
            clock_ms: 0.0,
            pulse_timer_ms: None,
            pulse_started_ms: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &BeaconConfig {
        &self.config
    }

    /// Applies a new configuration. Changing `series_id` resets scrub state;
    /// label changes relabel in place; other fields apply from the next
    /// event or frame.
    pub fn set_config(&mut self, config: BeaconConfig) -> ChartResult<()> {
        validate_beacon_config(&config)?;
        if config == self.config {
            return Ok(());
        }

        let series_changed = config.series_id != self.config.series_id;
        let label_changed = config.label_format != self.config.label_format;
        self.scrub.set_release_behavior(config.release_behavior);
        self.scrub.set_idle_pulse(config.idle_pulse);
        self.driver.set_config(config.transition);
        self.config = config;

        if series_changed {
            self.beacon_series = self.resolve_beacon_series();
            self.reset_interaction();
            let decision = self.retarget(self.scrub.current_update());
            self.publish(decision);
        } else if label_changed {
            self.relabel_target();
        }
        Ok(())
    }

    /// Replaces chart series. Unchanged input is a no-op.
    ///
    /// Shorter series are padded with gaps. A change in the set of series ids
    /// resets scrub state; value-only changes keep it and re-target.
    ///
    /// An animated re-target starts at [`BeaconEngine::clock_ms`], which only
    /// moves in `frame` and `advance_clock`.
    pub fn set_series(&mut self, mut series: Vec<Series>) -> ChartResult<()> {
        validate_series_ids(&series)?;
        let len = pad_series_to_common_length(&mut series);
        if series == self.series {
            return Ok(());
        }

        let identity_changed = series.len() != self.series.len()
            || series
                .iter()
                .zip(&self.series)
                .any(|(next, current)| next.id != current.id);
        debug!(series = series.len(), len, identity_changed, "set series");

        self.series = series;
        self.beacon_series = self.resolve_beacon_series();
        if identity_changed {
            self.reset_interaction();
        }
        self.scrub.set_series_len(len);

        let decision = self.retarget(self.scrub.current_update());
        self.publish(decision);
        Ok(())
    }

    /// Replaces the X-scale and Y-scales. Unchanged input is a no-op.
    ///
    /// Same clock contract as [`BeaconEngine::set_series`].
    pub fn set_scales(&mut self, scales: AxisScales) -> ChartResult<()> {
        if self
            .projector
            .as_ref()
            .is_some_and(|projector| projector.scales() == &scales)
        {
            return Ok(());
        }

        debug!(y_axes = scales.y.len(), "set scales");
        self.projector = Some(Projector::new(scales)?);
        let decision = self.retarget(self.scrub.current_update());
        self.publish(decision);
        Ok(())
    }

    /// Derives scales from the current series and applies them.
    pub fn fit_scales_to_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let scales = AxisScales::fit_to_series(&self.series, viewport)?;
        self.set_scales(scales)
    }

    /// Registers the per-frame callback, replacing any previous one.
    ///
    /// Returns `true` when a subscriber was replaced.
    pub fn subscribe<F>(&mut self, on_frame: F) -> bool
    where
        F: FnMut(&BeaconFrame) + 'static,
    {
        self.subscriber.replace(Box::new(on_frame)).is_some()
    }

    pub fn unsubscribe(&mut self) -> bool {
        self.subscriber.take().is_some()
    }

    #[must_use]
    pub fn has_subscriber(&self) -> bool {
        self.subscriber.is_some()
    }

    /// Returns scrub state to its freshly-mounted form and re-targets.
    pub fn reset(&mut self) {
        self.reset_interaction();
        let decision = self.retarget(self.scrub.current_update());
        self.publish(decision);
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn beacon_series(&self) -> Option<&Series> {
        self.beacon_series.and_then(|index| self.series.get(index))
    }

    #[must_use]
    pub fn scales(&self) -> Option<&AxisScales> {
        self.projector.as_ref().map(Projector::scales)
    }

    #[must_use]
    pub fn scrub_state(&self) -> ScrubState {
        self.scrub.state()
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.scrub.interaction_state()
    }

    #[must_use]
    pub fn last_interaction_state(&self) -> Option<InteractionState> {
        self.scrub.last_interaction_state()
    }

    #[must_use]
    pub fn target(&self) -> Option<&BeaconTarget> {
        self.target.as_ref()
    }

    /// Beacon position as of the last event or frame.
    #[must_use]
    pub fn position(&self) -> Option<ScreenPoint> {
        self.driver.position()
    }

    #[must_use]
    pub fn last_transition_decision(&self) -> Option<TransitionDecision> {
        self.driver.last_decision()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub(super) fn resolve_beacon_series(&self) -> Option<usize> {
        if self.series.is_empty() {
            return None;
        }
        let Some(series_id) = self.config.series_id.as_deref() else {
            return Some(0);
        };
        match self.series.iter().position(|series| series.id == series_id) {
            Some(index) => Some(index),
            None => {
                warn!(series_id, "beacon series not found, tracking first series");
                Some(0)
            }
        }
    }

    pub(super) fn reset_interaction(&mut self) {
        self.scrub.reset();
        self.driver.reset();
        self.target = None;
        self.pulse_timer_ms = None;
        self.pulse_started_ms = None;
        self.pulse_requests.set(0);
    }
}
