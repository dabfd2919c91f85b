//! Opt-in `tracing` setup for hosts and the bundled CLI.
//!
//! Chart rendering only emits events; installing a subscriber is left to the
//! embedding application unless it asks for the stock one here.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "profile_charts=info";

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_LOG_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_LOG_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter,
/// e.g. `"profile_charts=debug"` to trace every chart render.
#[must_use]
pub fn init_tracing_with_fallback(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
