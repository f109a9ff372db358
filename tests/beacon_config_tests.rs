use chart_scrub::api::{
    BeaconConfig, BeaconEngine, LabelContext, LabelFormatConfig, PulseTiming, TimestampPattern,
};
use chart_scrub::interaction::{Easing, ReleaseBehavior, SpringParams, TransitionConfig};
use chart_scrub::ChartError;

fn assert_invalid(config: BeaconConfig) {
    match BeaconEngine::new(config) {
        Err(ChartError::InvalidData(_)) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("config should be rejected"),
    }
}

#[test]
fn defaults_match_documented_values() {
    let config = BeaconConfig::default();

    assert_eq!(config.series_id, None);
    assert!(!config.idle_pulse);
    assert!(!config.hide_overlay);
    assert_eq!(config.pulse.interval_ms, 2_000.0);
    assert_eq!(config.pulse.ring_duration_ms, 1_600.0);
    assert_eq!(config.release_behavior, ReleaseBehavior::RetainLastIndex);
    assert_eq!(config.transition, TransitionConfig::Spring(SpringParams::default()));
    assert_eq!(config.label_format, LabelFormatConfig::default());

    let spring = SpringParams::default();
    assert_eq!(spring.stiffness, 170.0);
    assert_eq!(spring.damping, 26.0);
    assert_eq!(spring.mass, 1.0);
}

#[test]
fn empty_series_id_is_rejected() {
    assert_invalid(BeaconConfig::default().with_series_id(""));
}

#[test]
fn non_positive_pulse_timing_is_rejected() {
    assert_invalid(BeaconConfig::default().with_pulse_timing(PulseTiming {
        interval_ms: 0.0,
        ring_duration_ms: 1_600.0,
    }));
    assert_invalid(BeaconConfig::default().with_pulse_timing(PulseTiming {
        interval_ms: 2_000.0,
        ring_duration_ms: f64::NAN,
    }));
}

#[test]
fn invalid_transition_curves_are_rejected() {
    assert_invalid(BeaconConfig::default().with_transition(TransitionConfig::Timing {
        duration_ms: f64::NAN,
        easing: Easing::Linear,
    }));
    assert_invalid(BeaconConfig::default().with_transition(TransitionConfig::Timing {
        duration_ms: -1.0,
        easing: Easing::Linear,
    }));
    assert_invalid(
        BeaconConfig::default().with_transition(TransitionConfig::Spring(SpringParams {
            mass: 0.0,
            ..SpringParams::default()
        })),
    );

    assert!(
        BeaconEngine::new(BeaconConfig::default().with_transition(TransitionConfig::Timing {
            duration_ms: 0.0,
            easing: Easing::EaseInOutCubic,
        }))
        .is_ok()
    );
}

#[test]
fn invalid_label_formats_are_rejected() {
    assert_invalid(
        BeaconConfig::default().with_label_format(LabelFormatConfig::default().with_precision(13)),
    );

    let timestamps = |step_seconds, utc_offset_minutes| {
        LabelFormatConfig::default().with_context(LabelContext::Timestamps {
            start_unix_seconds: 0,
            step_seconds,
            pattern: TimestampPattern::Date,
            utc_offset_minutes,
        })
    };
    assert_invalid(BeaconConfig::default().with_label_format(timestamps(0, 0)));
    assert_invalid(BeaconConfig::default().with_label_format(timestamps(60, 1_440)));
    assert_invalid(BeaconConfig::default().with_label_format(timestamps(60, i16::MIN)));
    assert!(
        BeaconEngine::new(BeaconConfig::default().with_label_format(timestamps(60, -600))).is_ok()
    );
}

#[test]
fn rejected_set_config_keeps_previous_config() {
    let mut engine =
        BeaconEngine::new(BeaconConfig::default().with_idle_pulse(true)).expect("engine init");

    let result = engine.set_config(BeaconConfig::default().with_series_id(""));

    assert!(result.is_err());
    assert!(engine.config().idle_pulse);
}

#[test]
fn config_deserializes_with_defaults() {
    let config: BeaconConfig = serde_json::from_str("{}").expect("empty config");
    assert_eq!(config, BeaconConfig::default());

    let config: BeaconConfig = serde_json::from_str(
        r#"{
            "series_id": "price",
            "idle_pulse": true,
            "pulse": { "interval_ms": 1500.0 },
            "release_behavior": "ReturnToLatest",
            "transition": { "Spring": { "stiffness": 300.0 } },
            "label_format": { "currency_symbol": "$", "precision": 0 }
        }"#,
    )
    .expect("partial config");

    assert_eq!(config.series_id.as_deref(), Some("price"));
    assert!(config.idle_pulse);
    assert_eq!(config.pulse.interval_ms, 1_500.0);
    assert_eq!(config.pulse.ring_duration_ms, 1_600.0);
    assert_eq!(config.release_behavior, ReleaseBehavior::ReturnToLatest);
    assert_eq!(
        config.transition,
        TransitionConfig::Spring(SpringParams {
            stiffness: 300.0,
            ..SpringParams::default()
        })
    );
    assert_eq!(config.label_format.currency_symbol.as_deref(), Some("$"));
    assert_eq!(config.label_format.precision, 0);
    assert!(config.label_format.group_thousands);
    assert!(BeaconEngine::new(config).is_ok());
}

#[test]
fn timing_curve_deserializes_with_easing() {
    let transition: TransitionConfig =
        serde_json::from_str(r#"{ "Timing": { "duration_ms": 250.0, "easing": "EaseInOutCubic" } }"#)
            .expect("timing curve");

    assert_eq!(
        transition,
        TransitionConfig::Timing {
            duration_ms: 250.0,
            easing: Easing::EaseInOutCubic,
        }
    );
}
