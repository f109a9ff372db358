use crate::error::{ChartError, ChartResult};

use super::{BeaconEngine, BeaconSnapshot};

impl BeaconEngine {
    #[must_use]
    pub fn snapshot(&self) -> BeaconSnapshot {
        BeaconSnapshot {
            clock_ms: self.clock_ms,
            series_ids: self.series.iter().map(|series| series.id.clone()).collect(),
            series_len: self.scrub.series_len(),
            beacon_series_id: self.beacon_series().map(|series| series.id.clone()),
            scrub_state: self.scrub.state(),
            interaction: self.scrub.interaction_state(),
            last_interaction: self.scrub.last_interaction_state(),
            last_decision: self.driver.last_decision(),
            target: self.target.clone(),
            position: self.driver.position(),
            animation: self.driver.animation().copied(),
            pulse_progress: self.pulse_progress(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
