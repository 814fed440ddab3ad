//! Tracing setup for hosts embedding `mood-chart`.
//!
//! The renderer only emits `tracing` events. Hosts either call
//! `init_default_tracing` or install their own subscriber.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "mood_chart=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already registered.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
