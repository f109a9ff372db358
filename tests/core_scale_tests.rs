use approx::assert_relative_eq;
use chart_scrub::core::LinearScale;

#[test]
fn scale_maps_domain_endpoints_to_range_endpoints() {
    let scale = LinearScale::new((0.0, 4.0), (0.0, 400.0)).expect("valid scale");

    assert_eq!(scale.project(0.0), 0.0);
    assert_eq!(scale.project(4.0), 400.0);
    assert_eq!(scale.project(2.0), 200.0);
}

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.project(original);
    let recovered = scale.invert(px);

    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn reversed_range_maps_high_values_to_top() {
    let scale = LinearScale::new((10.0, 110.0), (600.0, 0.0)).expect("valid scale");

    assert_eq!(scale.project(110.0), 0.0);
    assert_eq!(scale.project(10.0), 600.0);
    assert!(scale.project(50.0) > scale.project(60.0));
}

#[test]
fn values_outside_domain_extrapolate_without_clamping() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0)).expect("valid scale");

    assert_relative_eq!(scale.project(-5.0), -50.0, epsilon = 1e-9);
    assert_relative_eq!(scale.project(15.0), 150.0, epsilon = 1e-9);
    assert_relative_eq!(scale.invert(250.0), 25.0, epsilon = 1e-9);
}

#[test]
fn degenerate_domain_projects_to_range_midpoint() {
    let scale = LinearScale::new((5.0, 5.0), (0.0, 300.0)).expect("valid scale");

    assert!(scale.is_degenerate_domain());
    for value in [-1e9, 0.0, 5.0, 42.0, 1e9] {
        assert_eq!(scale.project(value), 150.0);
    }
    assert_eq!(scale.invert(123.0), 5.0);
}

#[test]
fn non_finite_bounds_are_rejected() {
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (0.0, f64::INFINITY)).is_err());
    assert!(LinearScale::new((-f64::MAX, f64::MAX), (0.0, 1.0)).is_err());
}

#[test]
fn layout_can_update_domain_and_range() {
    let mut scale = LinearScale::new((0.0, 1.0), (0.0, 1.0)).expect("valid scale");
    scale.set_domain(0.0, 13.0).expect("set domain");
    scale.set_range(0.0, 260.0).expect("set range");

    assert_eq!(scale.domain(), (0.0, 13.0));
    assert_eq!(scale.range(), (0.0, 260.0));
    assert_relative_eq!(scale.project(6.5), 130.0, epsilon = 1e-9);
    assert!(scale.set_domain(0.0, f64::NAN).is_err());
    assert_eq!(scale.domain(), (0.0, 13.0));
}
