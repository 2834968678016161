#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One agent action per tick, handed back to the host simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    PlaceHazard,
    Idle,
}

impl Action {
    /// Translate a one-cell offset into the matching move.
    ///
    /// Offsets outside the 4-neighbor table yield `None`; callers degrade
    /// to [`Action::Idle`].
    pub fn from_offset(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (1, 0) => Some(Action::MoveRight),
            (-1, 0) => Some(Action::MoveLeft),
            (0, 1) => Some(Action::MoveUp),
            (0, -1) => Some(Action::MoveDown),
            _ => None,
        }
    }
}
