//! Telemetry helpers for applications embedding `chart-data`.
//!
//! The library only emits `tracing` events under the `chart_data` target:
//! `debug!` when a data object is built, `trace!` for zero injection and
//! x-domain resolution, `warn!` for ignored UI-state hints. Hosts that keep
//! their own subscriber can raise or silence that target without touching
//! anything else.

/// Filter used when `RUST_LOG` is unset: `chart_data` events at `info`,
/// everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,chart_data=info";

/// Installs a compact subscriber using [`DEFAULT_FILTER`] unless `RUST_LOG`
/// is set.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with a caller-supplied fallback filter.
///
/// `RUST_LOG` still wins when present. An unparsable `fallback` returns
/// `false` without installing anything.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match EnvFilter::try_new(fallback) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
