//! Error types raised by the I/O pipeline around the simulator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while reading a mission or persisting its report.
///
/// Simulation outcomes (`crash`, `error`) are never represented here; they
/// are part of the report.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to read input: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("input was empty")]
    EmptyInput,

    #[error("invalid mission JSON: {0}")]
    ParseInput(#[source] serde_json::Error),

    #[error("failed to encode report: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write report to {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ClientError>;
