#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timing and geometry of placed hazards.
///
/// Defaults match the standard ruleset the engine was written against;
/// hosts with different rules override the fields they need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HazardConfig {
    /// Ticks a hazard burns before detonating. A hazard first seen at tick
    /// `t` detonates at `t + fuse_ticks - 1`.
    pub fuse_ticks: u32,
    /// Blast reach along each cardinal ray, in cells.
    pub blast_radius: i32,
    /// Lookahead in ticks: a hazard detonating exactly this far ahead
    /// accelerates every other hazard caught in its blast.
    pub chain_window: u32,
    /// Ticks after placement during which the footprint counts as unsafe.
    pub placement_grace: u32,
    /// Ticks before detonation at which the footprint turns unsafe again.
    pub detonation_warning: u32,
}

impl HazardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fuse_ticks(mut self, fuse_ticks: u32) -> Self {
        self.fuse_ticks = fuse_ticks;
        self
    }

    pub fn with_blast_radius(mut self, blast_radius: i32) -> Self {
        self.blast_radius = blast_radius;
        self
    }

    pub fn with_chain_window(mut self, chain_window: u32) -> Self {
        self.chain_window = chain_window;
        self
    }

    pub fn with_placement_grace(mut self, placement_grace: u32) -> Self {
        self.placement_grace = placement_grace;
        self
    }

    pub fn with_detonation_warning(mut self, detonation_warning: u32) -> Self {
        self.detonation_warning = detonation_warning;
        self
    }
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self {
            fuse_ticks: 35,
            blast_radius: 2,
            chain_window: 2,
            placement_grace: 3,
            detonation_warning: 2,
        }
    }
}
