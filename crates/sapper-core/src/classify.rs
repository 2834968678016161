#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What occupies a grid cell at one instant.
///
/// The host classifies every queried cell into exactly one of these tags;
/// vacancy is reported as [`Classification::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Classification {
    Empty,
    Treasure,
    AmmoPickup,
    SoftBlock,
    OreBlock,
    IndestructibleBlock,
    Hazard,
}

impl Classification {
    /// The agent can walk onto this cell.
    pub fn passable(self) -> bool {
        matches!(
            self,
            Classification::Empty | Classification::Treasure | Classification::AmmoPickup
        )
    }

    /// A blast can destroy this cell.
    pub fn destructible(self) -> bool {
        matches!(self, Classification::SoftBlock | Classification::OreBlock)
    }

    /// A blast ray stops here after including this cell.
    pub fn blocks_blast(self) -> bool {
        matches!(
            self,
            Classification::SoftBlock
                | Classification::OreBlock
                | Classification::IndestructibleBlock
        )
    }
}
