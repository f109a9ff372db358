use approx::assert_relative_eq;
use chart_scrub::core::LinearScale;
use proptest::prelude::*;

proptest! {
    #[test]
    fn scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        range_start in -5_000.0f64..5_000.0,
        range_span in 1.0f64..5_000.0,
        reversed in any::<bool>(),
        value_factor in 0.0f64..1.0
    ) {
        let range_end = if reversed {
            range_start - range_span
        } else {
            range_start + range_span
        };
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (range_start, range_end))
            .expect("valid scale");

        let recovered = scale.invert(scale.project(value));
        prop_assert!((recovered - value).abs() <= 1e-6);
    }

    #[test]
    fn scale_endpoints_property(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        range_start in -5_000.0f64..5_000.0,
        range_end in -5_000.0f64..5_000.0
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (range_start, range_end))
            .expect("valid scale");

        prop_assert_eq!(scale.project(domain_start), range_start);
        prop_assert_eq!(scale.project(domain_end), range_end);
    }

    #[test]
    fn scale_monotonic_property(
        domain_span in 1.0f64..1_000.0,
        range_span in 1.0f64..5_000.0,
        reversed in any::<bool>(),
        first in 0.0f64..0.49,
        second in 0.51f64..1.0
    ) {
        let range = if reversed { (range_span, 0.0) } else { (0.0, range_span) };
        let scale = LinearScale::new((0.0, domain_span), range).expect("valid scale");

        let lower = scale.project(first * domain_span);
        let upper = scale.project(second * domain_span);
        if reversed {
            prop_assert!(lower > upper);
        } else {
            prop_assert!(lower < upper);
        }
    }

    #[test]
    fn degenerate_scale_midpoint_property(
        domain_value in -1_000_000.0f64..1_000_000.0,
        range_start in -5_000.0f64..5_000.0,
        range_end in -5_000.0f64..5_000.0,
        input in proptest::num::f64::NORMAL
    ) {
        let scale = LinearScale::new((domain_value, domain_value), (range_start, range_end))
            .expect("valid scale");

        assert_relative_eq!(
            scale.project(input),
            (range_start + range_end) / 2.0,
            epsilon = 1e-9
        );
    }
}
