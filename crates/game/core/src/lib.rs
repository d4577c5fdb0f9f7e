//! Deterministic rover simulation shared by the client and offline tools.
//!
//! `rover-core` defines the canonical rules (instructions, headings, arena
//! bounds) and exposes a pure [`simulate`] entry point. A [`Mission`] goes in,
//! a [`Report`] comes out; nothing here performs I/O or fails with an error.
//! Unrecognized instructions and out-of-bounds moves are reported through
//! [`Status`] instead.
pub mod action;
pub mod engine;
pub mod env;
pub mod state;

pub use action::{Heading, Instruction, Turn};
pub use engine::{Report, Rover, Status, StepOutcome, simulate};
pub use env::Arena;
pub use state::{Mission, Position};
