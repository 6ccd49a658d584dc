use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging for an embedding application.
///
/// The engine itself only emits events (rule fallback warnings, per-issue
/// debug traces); hosts that already install their own subscriber should
/// skip this and will still see those events.
pub fn init_telemetry() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true),
        )
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("slatrack telemetry initialized with structured logging");
    Ok(())
}

/// Shutdown telemetry gracefully.
pub fn shutdown_telemetry() {
    tracing::info!("slatrack telemetry shutdown complete");
}
