//! Static environment the rover moves through.
mod arena;

pub use arena::Arena;
