//! Rover simulator binary.
//!
//! Reads a mission as JSON from stdin, simulates it, and writes the report to
//! `expected.json` (or `ROVER_OUTPUT_PATH`).
//!
//! # Examples
//!
//! ```bash
//! echo '{"arena":{"corner1":{"x":0,"y":0},"corner2":{"x":2,"y":2}},
//!        "location":{"x":0,"y":0},"heading":"north",
//!        "directions":["forward","right","forward"]}' | cargo run -p rover-client
//! ```

use anyhow::{Context, Result};
use rover_client::{Client, ClientConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    logging::setup_logging()?;

    let config = ClientConfig::from_env();
    tracing::debug!("Output path: {}", config.output_path.display());

    Client::new(config)
        .run(tokio::io::stdin())
        .await
        .context("Error processing instructions")?;

    Ok(())
}
