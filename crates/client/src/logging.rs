//! Logging setup for the rover binary.
//!
//! Logs always go to stderr so stdout stays free for piping. The filter is
//! taken from `RUST_LOG`, falling back to `info`.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

pub fn setup_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
