//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging for a bot process.
///
/// Reads `.env` if present, then installs a fmt subscriber honoring
/// `RUST_LOG` (default `info`). Safe to call once at startup; embedding
/// applications that install their own subscriber skip this.
pub fn init_telemetry() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    tracing::info!("Telemetry initialized");
}
