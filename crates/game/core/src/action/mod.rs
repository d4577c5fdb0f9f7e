//! Instruction vocabulary and the heading rules it drives.
//!
//! - `instruction`: the commands a mission may contain, including values the
//!   rover does not recognize
//! - `movement`: headings, turns, and the unit step taken by `forward`
mod instruction;
mod movement;

pub use instruction::Instruction;
pub use movement::{Heading, Turn};
