use chart_scrub::api::{BeaconConfig, BeaconEngine};
use chart_scrub::core::{Series, Viewport};
use chart_scrub::interaction::{InteractionState, ScrubState, TransitionDecision};
use serde_json::Value;

fn engine() -> BeaconEngine {
    let mut engine = BeaconEngine::new(BeaconConfig::default()).expect("engine init");
    engine
        .set_series(vec![
            Series::new("price", [10.0, 22.0, 29.0, 45.0, 98.0]).with_label("Price"),
            Series::new("volume", [3.0, 1.0, 4.0, 1.0, 5.0]).with_y_axis("volume"),
        ])
        .expect("set series");
    engine
        .fit_scales_to_viewport(Viewport::new(400, 200))
        .expect("fit scales");
    engine
}

#[test]
fn snapshot_captures_scrub_and_transition_state() {
    let mut engine = engine();
    engine.pointer_move(200.0);
    engine.frame(16.0);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.clock_ms, 16.0);
    assert_eq!(snapshot.series_ids, vec!["price".to_owned(), "volume".to_owned()]);
    assert_eq!(snapshot.series_len, 5);
    assert_eq!(snapshot.beacon_series_id.as_deref(), Some("price"));
    assert_eq!(snapshot.scrub_state, ScrubState::Engaged { index: 2 });
    assert_eq!(snapshot.interaction, InteractionState::Scrubbing);
    assert_eq!(snapshot.last_interaction, Some(InteractionState::Scrubbing));
    assert_eq!(snapshot.last_decision, Some(TransitionDecision::Jump));
    assert_eq!(snapshot.target.as_ref().map(|target| target.index), Some(2));
    assert!(snapshot.animation.is_none());
    assert_eq!(snapshot.pulse_progress, None);
}

#[test]
fn snapshot_json_is_stable_for_identical_histories() {
    let mut first = engine();
    let mut second = engine();
    for engine in [&mut first, &mut second] {
        engine.pointer_move(100.0);
        engine.pointer_move(300.0);
        engine.pointer_end();
        engine.frame(40.0);
    }

    let first_json = first.snapshot_json_pretty().expect("snapshot json");
    let second_json = second.snapshot_json_pretty().expect("snapshot json");
    assert_eq!(first_json, second_json);
}

#[test]
fn snapshot_json_exposes_animation_in_flight() {
    let mut engine = engine();
    engine
        .set_series(vec![
            Series::new("price", [10.0, 22.0, 29.0, 45.0, 54.0]).with_label("Price"),
            Series::new("volume", [3.0, 1.0, 4.0, 1.0, 5.0]).with_y_axis("volume"),
        ])
        .expect("update series");

    let json = engine.snapshot_json_pretty().expect("snapshot json");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["last_decision"], Value::from("Animate"));
    assert_eq!(value["scrub_state"], Value::from("Disengaged"));
    assert!(value["animation"].is_object());
    assert!(value["animation"]["curve"]["Spring"].is_object());
    assert_eq!(value["target"]["index"], Value::from(4));
}
