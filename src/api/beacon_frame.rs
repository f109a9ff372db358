use serde::{Deserialize, Serialize};

use crate::core::{ProjectedValue, ScreenPoint};
use crate::interaction::InteractionState;

use super::BeaconLabel;

/// Resolved scrub target: which sample the beacon points at and what it says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconTarget {
    pub series_id: String,
    pub index: usize,
    pub projection: ProjectedValue,
    pub label: BeaconLabel,
}

impl BeaconTarget {
    #[must_use]
    pub fn has_value(&self) -> bool {
        matches!(self.projection, ProjectedValue::Point(_))
    }
}

/// Everything the render callback needs to paint one frame.
///
/// `target == None` hides the beacon. A target with `position == None` is a
/// missing value: draw the scrub line and label at `target.projection.x()`,
/// but no beacon dot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconFrame {
    pub timestamp_ms: f64,
    pub target: Option<BeaconTarget>,
    pub position: Option<ScreenPoint>,
    pub interaction: InteractionState,
    pub overlay_visible: bool,
    /// Idle pulse ring progress in `[0, 1)` while a ring is running.
    pub pulse_progress: Option<f64>,
    pub animating: bool,
}
