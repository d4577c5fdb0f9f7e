use crate::state::Position;

/// Axis-aligned rectangle bounding legal rover positions.
///
/// Corners may be supplied in any order; containment is always tested against
/// the normalized minimum and maximum, and both edges are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    pub corner1: Position,
    pub corner2: Position,
}

impl Arena {
    pub const fn new(corner1: Position, corner2: Position) -> Self {
        Self { corner1, corner2 }
    }

    /// Lower-left corner after normalization.
    pub fn min(&self) -> Position {
        Position::new(
            self.corner1.x.min(self.corner2.x),
            self.corner1.y.min(self.corner2.y),
        )
    }

    /// Upper-right corner after normalization.
    pub fn max(&self) -> Position {
        Position::new(
            self.corner1.x.max(self.corner2.x),
            self.corner1.y.max(self.corner2.y),
        )
    }

    pub fn contains(&self, position: Position) -> bool {
        let (min, max) = (self.min(), self.max());
        (min.x..=max.x).contains(&position.x) && (min.y..=max.y).contains(&position.y)
    }
}
