//! Immutable values describing where the rover is and what it was asked to do.
mod mission;
mod position;

pub use mission::Mission;
pub use position::Position;
