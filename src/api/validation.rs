use crate::error::{ChartError, ChartResult};

use super::interaction_validation::{validate_pulse_timing, validate_transition_config};
use super::{BeaconConfig, LabelContext, LabelFormatConfig};

const MAX_LABEL_PRECISION: u8 = 12;
const MINUTES_PER_DAY: i32 = 1_440;

pub(super) fn validate_beacon_config(config: &BeaconConfig) -> ChartResult<()> {
    if config.series_id.as_deref().is_some_and(str::is_empty) {
        return Err(ChartError::InvalidData(
            "beacon series_id must not be empty".to_owned(),
        ));
    }
    validate_pulse_timing(config.pulse)?;
    validate_transition_config(config.transition)?;
    validate_label_format_config(&config.label_format)
}

pub(super) fn validate_label_format_config(config: &LabelFormatConfig) -> ChartResult<()> {
    if config.precision > MAX_LABEL_PRECISION {
        return Err(ChartError::InvalidData(format!(
            "label precision must be <= {MAX_LABEL_PRECISION}"
        )));
    }
    if let LabelContext::Timestamps {
        step_seconds,
        utc_offset_minutes,
        ..
    } = &config.context
    {
        if *step_seconds <= 0 {
            return Err(ChartError::InvalidData(
                "timestamp step_seconds must be > 0".to_owned(),
            ));
        }
        if i32::from(*utc_offset_minutes).abs() >= MINUTES_PER_DAY {
            return Err(ChartError::InvalidData(
                "timestamp utc_offset_minutes must be within one day".to_owned(),
            ));
        }
    }
    Ok(())
}
