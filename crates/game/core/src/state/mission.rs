use crate::action::{Heading, Instruction};
use crate::env::Arena;
use crate::state::Position;

/// Everything the simulator needs for a single run.
///
/// Field names follow the mission JSON: `directions` is the ordered
/// instruction list, which may contain values the rover does not understand.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mission {
    pub arena: Arena,
    pub location: Position,
    pub heading: Heading,
    pub directions: Vec<Instruction>,
}

impl Mission {
    pub fn new(arena: Arena, location: Position, heading: Heading) -> Self {
        Self {
            arena,
            location,
            heading,
            directions: Vec::new(),
        }
    }

    /// Appends instructions to the mission (builder pattern).
    #[must_use]
    pub fn with_directions<I>(mut self, directions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Instruction>,
    {
        self.directions.extend(directions.into_iter().map(Into::into));
        self
    }
}
