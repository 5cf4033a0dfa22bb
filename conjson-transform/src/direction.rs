//! Marshal/unmarshal direction flag

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Not;

/// Direction of a transformation: encoding or decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Marshaling (encoding): in-memory value to serialized bytes
    Marshal,
    /// Unmarshaling (decoding): serialized bytes to in-memory value
    Unmarshal,
}

impl Direction {
    /// The opposite direction
    pub fn reverse(self) -> Self {
        match self {
            Direction::Marshal => Direction::Unmarshal,
            Direction::Unmarshal => Direction::Marshal,
        }
    }

    /// Human-readable name of the direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Marshal => "Marshal",
            Direction::Unmarshal => "Unmarshal",
        }
    }
}

impl Not for Direction {
    type Output = Direction;

    fn not(self) -> Self::Output {
        self.reverse()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
