#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid coordinate. `x` grows rightward, `y` grows upward.
///
/// Cells are plain keys into host-owned tables; they carry no payload and
/// are copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell offset from `self` by `(dx, dy)`.
    pub const fn step(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Offset of `self` relative to `origin`.
    pub const fn offset_from(self, origin: Cell) -> (i32, i32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Fixed order for determinism: left, down, right, up.
///
/// Neighbor expansion and blast rays both walk directions in this order, so
/// equal-distance ties always resolve the same way on every run.
pub const SCAN_ORDER: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
