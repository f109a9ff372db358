use chart_scrub::telemetry::{
    DEFAULT_TRACING_DIRECTIVE, init_default_tracing, init_tracing_with_directive,
};

#[test]
fn tracing_initializes_at_most_once() {
    assert!(DEFAULT_TRACING_DIRECTIVE.starts_with("chart_scrub"));

    let _ = init_default_tracing();
    assert!(!init_tracing_with_directive("chart_scrub=debug"));
}
