//! Telemetry helpers for applications embedding `chart-scrub`.
//!
//! Tracing setup stays explicit and opt-in. Hosts either call
//! `init_default_tracing`/`init_tracing_with_directive` or install their own
//! `tracing` subscriber.

/// Directive used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_DIRECTIVE: &str = "chart_scrub=info";

/// Initializes a compact `tracing` subscriber using [`DEFAULT_TRACING_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directive(DEFAULT_TRACING_DIRECTIVE)
}

/// Initializes a compact `tracing` subscriber, preferring `RUST_LOG` and
/// falling back to `directive`.
#[must_use]
pub fn init_tracing_with_directive(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}
