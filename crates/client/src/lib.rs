//! Stdin-to-file wrapper around the rover simulator.
//!
//! # Pipeline
//!
//! ```text
//! stdin ──read_to_end──▶ Mission (JSON) ──simulate──▶ Report ──▶ expected.json
//! ```
//!
//! The stages run strictly in order: the whole input is read before the
//! simulation starts, and the report is written only after it finishes. Any
//! read, parse or write failure surfaces as a [`ClientError`] and no output
//! file is produced.

pub mod config;
pub mod error;
pub mod io;
pub mod logging;

pub use config::ClientConfig;
pub use error::{ClientError, Result};

use rover_core::{Report, simulate};
use tokio::io::AsyncRead;

/// Composition root for a single run.
#[derive(Clone, Debug, Default)]
pub struct Client {
    config: ClientConfig,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Reads a mission from `input`, simulates it, and writes the report to
    /// the configured output path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the input stream fails or is empty
    /// - the input is not a valid mission document
    /// - the report cannot be encoded or written
    pub async fn run<R>(&self, input: R) -> Result<Report>
    where
        R: AsyncRead + Unpin,
    {
        let raw = io::read_input(input).await?;
        let document = io::decode_mission(&raw)?;
        let mission = document.mission();

        tracing::info!(
            location = %mission.location,
            heading = %mission.heading,
            directions = mission.directions.len(),
            "Simulating mission"
        );

        let report = simulate(&mission);

        tracing::info!(
            status = %report.status,
            location = %report.location,
            heading = %report.heading,
            consumed = report.path.len(),
            "Simulation finished"
        );

        let encoded = io::encode_report(&report, &document, self.config.pretty_output)?;
        io::write_output(&self.config.output_path, &encoded).await?;

        Ok(report)
    }
}
