//! powerai — a battery-guardian dashboard mockup with a simulated battery.
//!
//! Run with:  `RUST_LOG=info powerai`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("powerai v{} starting", env!("CARGO_PKG_VERSION"));

    powerai_app::run().map_err(Into::into)
}
