use tracing::trace;

use crate::interaction::{ScrubUpdate, TransitionDecision};

use super::{BeaconEngine, BeaconLabel, BeaconTarget, format_beacon_label};

impl BeaconEngine {
    /// Recomputes the target for `update` and hands the resulting request to
    /// the transition driver.
    ///
    /// Returns `None` when no request was built (hidden beacon, missing value
    /// or no scales yet); the driver is cleared in that case.
    pub(super) fn retarget(&mut self, update: ScrubUpdate) -> Option<TransitionDecision> {
        let target = update.index.and_then(|index| self.resolve_target(index));
        let point = target.as_ref().and_then(|target| target.projection.point());
        let request = self.scrub.commit(point, update.state);
        self.target = target;

        let Some(request) = request else {
            self.driver.hide();
            trace!(index = ?update.index, state = ?update.state, "beacon has no position");
            return None;
        };

        let decision = self.driver.apply(&request, self.clock_ms);
        trace!(
            index = ?update.index,
            previous = ?request.previous_state,
            current = ?request.current_state,
            ?decision,
            "beacon transition"
        );
        Some(decision)
    }

    pub(super) fn resolve_target(&self, index: usize) -> Option<BeaconTarget> {
        let series = self.beacon_series()?;
        let projector = self.projector.as_ref()?;
        let projection = projector.project_index(series, index);
        Some(BeaconTarget {
            series_id: series.id.clone(),
            index,
            projection,
            label: self.format_label(index, series.value_at(index)),
        })
    }

    pub(super) fn format_label(&self, index: usize, value: Option<f64>) -> BeaconLabel {
        match &self.label_formatter {
            Some(formatter) => formatter(index, value),
            None => format_beacon_label(index, value, &self.config.label_format),
        }
    }
}
