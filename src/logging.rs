//! Logging setup
//!
//! Installs a global `tracing` subscriber writing to stdout. The filter comes
//! from `RUST_LOG` and defaults to `info`.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize tracing; subsequent calls are no-ops
///
/// Failure to install (another subscriber already set) is returned so the
/// caller can carry on without logging.
pub fn init() -> anyhow::Result<()> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    let _ = INITIALIZED.set(());
    tracing::info!("Logging initialized");
    Ok(())
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
