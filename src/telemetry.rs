//! Opt-in tracing bootstrap.
//!
//! The renderers emit `tracing` events (malformed colors, dispatch traces,
//! render failures) but never install a subscriber themselves; hosts that
//! want one without wiring their own can enable the `telemetry` feature and
//! call [`init_default_tracing`].

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`, defaulting
/// to `activity_cards=info` when the variable is unset.
///
/// Returns `true` when the subscriber was installed, `false` when the
/// feature is off or the host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("activity_cards=info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
