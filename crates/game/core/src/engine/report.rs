use crate::action::{Heading, Instruction};
use crate::state::Position;

/// Terminal classification of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Status {
    /// Every instruction was processed and the rover stayed in the arena.
    Ok,
    /// An instruction outside the known vocabulary stopped the run.
    Error,
    /// A `forward` would have left the arena.
    Crash,
}

impl Status {
    pub fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }
}

/// Result of a single simulation run.
///
/// `path` holds the instructions actually consumed, including the one that
/// ended the run early.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub status: Status,
    pub location: Position,
    pub heading: Heading,
    pub path: Vec<Instruction>,
}
