//! Instruction interpretation loop.
//!
//! [`Rover`] applies one instruction at a time against an [`Arena`] and
//! reports what happened as a [`StepOutcome`]. [`simulate`] drives a rover
//! through a whole [`Mission`] and folds the outcomes into a [`Report`].
//! Neither can fail: crashes and unknown instructions are ordinary results.

mod report;

pub use report::{Report, Status};

use crate::action::{Heading, Instruction, Turn};
use crate::env::Arena;
use crate::state::{Mission, Position};

/// What a single instruction did to the rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved one unit; carries the new location.
    Moved(Position),
    /// Rotated in place; carries the new heading.
    Turned(Heading),
    /// The move would have ended at `destination`, outside the arena (or
    /// outside the coordinate space when `None`). The rover did not move.
    Crashed { destination: Option<Position> },
    /// Instruction not understood; the rover is unchanged.
    Rejected,
}

impl StepOutcome {
    /// Terminal outcomes end the run.
    pub fn status(self) -> Option<Status> {
        match self {
            StepOutcome::Moved(_) | StepOutcome::Turned(_) => None,
            StepOutcome::Crashed { .. } => Some(Status::Crash),
            StepOutcome::Rejected => Some(Status::Error),
        }
    }
}

/// Working copy of the rover's pose during a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rover {
    location: Position,
    heading: Heading,
}

impl Rover {
    pub fn new(location: Position, heading: Heading) -> Self {
        Self { location, heading }
    }

    pub fn location(&self) -> Position {
        self.location
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Applies one instruction. Rotation never changes location and movement
    /// never changes heading; a crash or rejection leaves the rover as is.
    pub fn step(&mut self, instruction: &Instruction, arena: &Arena) -> StepOutcome {
        match instruction {
            Instruction::Forward => match self.heading.advance(self.location) {
                Some(destination) if arena.contains(destination) => {
                    self.location = destination;
                    StepOutcome::Moved(destination)
                }
                destination => StepOutcome::Crashed { destination },
            },
            other => match other.turn() {
                Some(turn) => self.rotate(turn),
                None => StepOutcome::Rejected,
            },
        }
    }

    fn rotate(&mut self, turn: Turn) -> StepOutcome {
        self.heading = self.heading.rotate(turn);
        StepOutcome::Turned(self.heading)
    }

    fn report(self, status: Status, path: Vec<Instruction>) -> Report {
        Report {
            status,
            location: self.location,
            heading: self.heading,
            path,
        }
    }
}

impl From<&Mission> for Rover {
    fn from(mission: &Mission) -> Self {
        Self::new(mission.location, mission.heading)
    }
}

/// Runs every instruction of `mission` in order and reports where the rover
/// ended up.
///
/// Stops at the first crash or unrecognized instruction; that instruction is
/// still the last entry of the returned path.
pub fn simulate(mission: &Mission) -> Report {
    let mut rover = Rover::from(mission);
    let mut path = Vec::with_capacity(mission.directions.len());

    for instruction in &mission.directions {
        path.push(instruction.clone());

        if let Some(status) = rover.step(instruction, &mission.arena).status() {
            return rover.report(status, path);
        }
    }

    rover.report(Status::Ok, path)
}
