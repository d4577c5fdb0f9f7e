use crate::state::Position;

/// Compass heading of the rover.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Clockwise rotation order. Turning right advances one slot, turning
    /// left steps back one, both wrapping.
    pub const CYCLE: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::South => (0, -1),
            Heading::East => (1, 0),
            Heading::West => (-1, 0),
        }
    }

    /// Position one unit ahead of `origin`, or `None` when the step would
    /// leave the `i64` coordinate space.
    pub fn advance(self, origin: Position) -> Option<Position> {
        let (dx, dy) = self.delta();
        origin.offset(dx, dy)
    }

    pub fn rotate(self, turn: Turn) -> Heading {
        let len = Self::CYCLE.len();
        let index = self.cycle_index();
        let next = match turn {
            Turn::Left => (index + len - 1) % len,
            Turn::Right => (index + 1) % len,
        };
        Self::CYCLE[next]
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    fn cycle_index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }
}

/// In-place rotation by a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Turn {
    Left,
    Right,
}
