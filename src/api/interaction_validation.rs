use crate::error::{ChartError, ChartResult};
use crate::interaction::TransitionConfig;

use super::PulseTiming;

pub(super) fn validate_transition_config(config: TransitionConfig) -> ChartResult<TransitionConfig> {
    match config {
        TransitionConfig::Timing { duration_ms, .. } => {
            if !duration_ms.is_finite() || duration_ms < 0.0 {
                return Err(ChartError::InvalidData(
                    "transition duration_ms must be finite and >= 0".to_owned(),
                ));
            }
        }
        TransitionConfig::Spring(params) => {
            for (field, value) in [
                ("stiffness", params.stiffness),
                ("damping", params.damping),
                ("mass", params.mass),
                ("rest_displacement_px", params.rest_displacement_px),
                ("rest_velocity_px_per_sec", params.rest_velocity_px_per_sec),
                ("max_duration_ms", params.max_duration_ms),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ChartError::InvalidData(format!(
                        "spring `{field}` must be finite and > 0"
                    )));
                }
            }
        }
    }
    Ok(config)
}

pub(super) fn validate_pulse_timing(pulse: PulseTiming) -> ChartResult<PulseTiming> {
    if !pulse.interval_ms.is_finite() || pulse.interval_ms <= 0.0 {
        return Err(ChartError::InvalidData(
            "pulse interval_ms must be finite and > 0".to_owned(),
        ));
    }
    if !pulse.ring_duration_ms.is_finite() || pulse.ring_duration_ms <= 0.0 {
        return Err(ChartError::InvalidData(
            "pulse ring_duration_ms must be finite and > 0".to_owned(),
        ));
    }
    Ok(pulse)
}
