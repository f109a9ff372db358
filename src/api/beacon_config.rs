use serde::{Deserialize, Serialize};

use crate::interaction::{ReleaseBehavior, TransitionConfig};

use super::LabelFormatConfig;

/// Idle pulse cadence and ring length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseTiming {
    pub interval_ms: f64,
    pub ring_duration_ms: f64,
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            interval_ms: 2_000.0,
            ring_duration_ms: 1_600.0,
        }
    }
}

/// Public beacon configuration.
///
/// Serializable so hosts can persist beacon setup alongside their chart
/// settings. Validated by [`super::BeaconEngine::new`] and
/// [`super::BeaconEngine::set_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BeaconConfig {
    /// Series tracked by the beacon; `None` tracks the first series.
    pub series_id: Option<String>,
    pub idle_pulse: bool,
    pub pulse: PulseTiming,
    /// Suppresses the dim overlay that otherwise accompanies scrubbing.
    pub hide_overlay: bool,
    pub release_behavior: ReleaseBehavior,
    /// Curve for idle-to-idle transitions.
    pub transition: TransitionConfig,
    pub label_format: LabelFormatConfig,
}

impl BeaconConfig {
    #[must_use]
    pub fn with_series_id(mut self, series_id: impl Into<String>) -> Self {
        self.series_id = Some(series_id.into());
        self
    }

    #[must_use]
    pub fn with_idle_pulse(mut self, enabled: bool) -> Self {
        self.idle_pulse = enabled;
        self
    }

    #[must_use]
    pub fn with_pulse_timing(mut self, pulse: PulseTiming) -> Self {
        self.pulse = pulse;
        self
    }

    #[must_use]
    pub fn with_hide_overlay(mut self, hide_overlay: bool) -> Self {
        self.hide_overlay = hide_overlay;
        self
    }

    #[must_use]
    pub fn with_release_behavior(mut self, behavior: ReleaseBehavior) -> Self {
        self.release_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    #[must_use]
    pub fn with_label_format(mut self, label_format: LabelFormatConfig) -> Self {
        self.label_format = label_format;
        self
    }
}
