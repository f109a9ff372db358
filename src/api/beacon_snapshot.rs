use serde::{Deserialize, Serialize};

use crate::core::ScreenPoint;
use crate::interaction::{BeaconAnimation, InteractionState, ScrubState, TransitionDecision};

use super::BeaconTarget;

/// Serializable deterministic engine state used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconSnapshot {
    pub clock_ms: f64,
    pub series_ids: Vec<String>,
    pub series_len: usize,
    pub beacon_series_id: Option<String>,
    pub scrub_state: ScrubState,
    pub interaction: InteractionState,
    pub last_interaction: Option<InteractionState>,
    pub last_decision: Option<TransitionDecision>,
    pub target: Option<BeaconTarget>,
    pub position: Option<ScreenPoint>,
    pub animation: Option<BeaconAnimation>,
    pub pulse_progress: Option<f64>,
}
