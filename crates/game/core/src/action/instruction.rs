use std::fmt;

use crate::action::Turn;

/// One entry of a mission's `directions` list.
///
/// Anything other than `forward`, `left` or `right` is kept verbatim as
/// [`Instruction::Unrecognized`] so it can be echoed back in the report path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Instruction {
    Forward,
    Left,
    Right,
    Unrecognized(String),
}

impl Instruction {
    pub fn as_str(&self) -> &str {
        match self {
            Instruction::Forward => "forward",
            Instruction::Left => "left",
            Instruction::Right => "right",
            Instruction::Unrecognized(raw) => raw,
        }
    }

    /// Rotation requested by this instruction, if it is a turn.
    pub fn turn(&self) -> Option<Turn> {
        match self {
            Instruction::Left => Some(Turn::Left),
            Instruction::Right => Some(Turn::Right),
            _ => None,
        }
    }
}

impl From<&str> for Instruction {
    fn from(raw: &str) -> Self {
        match raw {
            "forward" => Instruction::Forward,
            "left" => Instruction::Left,
            "right" => Instruction::Right,
            other => Instruction::Unrecognized(other.to_owned()),
        }
    }
}

impl From<String> for Instruction {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "forward" | "left" | "right" => Instruction::from(raw.as_str()),
            _ => Instruction::Unrecognized(raw),
        }
    }
}

impl From<Instruction> for String {
    fn from(instruction: Instruction) -> Self {
        match instruction {
            Instruction::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
