use chart_scrub::api::{BeaconConfig, BeaconEngine};
use chart_scrub::core::{AxisScales, LinearScale, Projector, Series, Viewport};
use chart_scrub::interaction::resolve_nearest_index;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_series(id: &str, len: usize) -> Series {
    Series::with_gaps(
        id,
        (0..len).map(|i| {
            let t = i as f64;
            (i % 97 != 0).then_some(400.0 + t * 0.03 + (t * 0.1).sin() * 5.0)
        }),
    )
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (1_080.0, 0.0)).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.project(black_box(4_321.123));
            let _ = scale.invert(px);
        })
    });
}

fn bench_nearest_index_10k(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 9_999.0), (0.0, 1_920.0)).expect("valid scale");

    c.bench_function("nearest_index_10k", |b| {
        b.iter(|| {
            for px in (0..1_920).step_by(7) {
                let _ = resolve_nearest_index(scale, black_box(f64::from(px)), 10_000);
            }
        })
    });
}

fn bench_project_index_10k(c: &mut Criterion) {
    let series = generated_series("price", 10_000);
    let scales = AxisScales::fit_to_series(std::slice::from_ref(&series), Viewport::new(1920, 1080))
        .expect("fit scales");
    let projector = Projector::new(scales).expect("projector");

    c.bench_function("project_index_10k", |b| {
        b.iter(|| {
            for index in 0..series.len() {
                let _ = projector.project_index(black_box(&series), index);
            }
        })
    });
}

fn bench_engine_scrub_frame_2k(c: &mut Criterion) {
    let mut engine = BeaconEngine::new(BeaconConfig::default().with_idle_pulse(true))
        .expect("engine init");
    engine
        .set_series(vec![generated_series("price", 2_000)])
        .expect("set series");
    engine
        .fit_scales_to_viewport(Viewport::new(1600, 900))
        .expect("fit scales");

    let mut now_ms = 0.0;
    c.bench_function("engine_scrub_frame_2k", |b| {
        b.iter(|| {
            now_ms += 16.0;
            engine.pointer_move(black_box(now_ms % 1_600.0));
            let _ = engine.frame(now_ms);
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_nearest_index_10k,
    bench_project_index_10k,
    bench_engine_scrub_frame_2k
);
criterion_main!(benches);
