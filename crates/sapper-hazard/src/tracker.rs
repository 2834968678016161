use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sapper_core::{Cell, GridView};

use crate::blast::{blast_footprint, claim_targets};
use crate::config::HazardConfig;

/// What one [`HazardTracker::update`] call changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UpdateDelta {
    /// Hazards seen for the first time this tick.
    pub placed: u32,
    /// Tracked hazards the host no longer reports.
    pub resolved: u32,
    /// Hazards whose detonation was pulled earlier by a chain.
    pub accelerated: u32,
}

/// Tracks every active hazard's detonation schedule and the destructible
/// cells pending blasts have already claimed.
///
/// The two tables here are the only state that survives between ticks;
/// everything else the engine derives fresh from the host's snapshot.
#[derive(Debug, Clone)]
pub struct HazardTracker {
    config: HazardConfig,
    // position -> absolute detonation tick
    hazards: BTreeMap<Cell, u64>,
    // position -> destructible cells its blast will consume
    claims: BTreeMap<Cell, Vec<Cell>>,
}

impl HazardTracker {
    pub fn new(config: HazardConfig) -> Self {
        assert!(config.fuse_ticks > 0, "fuse must burn for at least one tick");
        assert!(config.blast_radius >= 0, "blast radius must be non-negative");
        Self {
            config,
            hazards: BTreeMap::new(),
            claims: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> HazardConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }

    /// Scheduled detonation tick of the hazard at `cell`, if one is tracked.
    pub fn detonation_tick(&self, cell: Cell) -> Option<u64> {
        self.hazards.get(&cell).copied()
    }

    /// Positions of every tracked hazard, in cell order.
    pub fn tracked_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.hazards.keys().copied()
    }

    /// Ingest the authoritative hazard positions for `tick`.
    ///
    /// Call once per tick, before any safety query for that tick. Tracked
    /// positions the host dropped are resolved together with their claims;
    /// new positions are scheduled a full fuse ahead; hazards caught in an
    /// imminent blast are pulled earlier, never pushed later.
    pub fn update<G: GridView>(
        &mut self,
        grid: &G,
        active: &BTreeSet<Cell>,
        tick: u64,
    ) -> UpdateDelta {
        let mut delta = UpdateDelta::default();

        let resolved: Vec<Cell> = self
            .hazards
            .keys()
            .copied()
            .filter(|cell| !active.contains(cell))
            .collect();
        delta.resolved = resolved.len() as u32;
        for cell in resolved {
            self.hazards.remove(&cell);
            self.claims.remove(&cell);
        }

        for &cell in active {
            if self.hazards.contains_key(&cell) {
                continue;
            }
            let detonation = tick + u64::from(self.config.fuse_ticks) - 1;
            self.hazards.insert(cell, detonation);
            self.claims
                .insert(cell, claim_targets(grid, cell, self.config.blast_radius));
            delta.placed += 1;
        }

        delta.accelerated = self.accelerate_chains(grid, tick);
        delta
    }

    /// Pull forward every hazard caught in the blast of one detonating
    /// `chain_window` ticks from now. Chained hazards land one tick after
    /// their trigger, so cascades detonate a tick apart.
    ///
    /// Idempotent at a given tick: accelerating an already-accelerated
    /// hazard is a no-op, and detonation ticks only ever decrease.
    fn accelerate_chains<G: GridView>(&mut self, grid: &G, tick: u64) -> u32 {
        let trigger_tick = tick + u64::from(self.config.chain_window);

        let mut footprint = BTreeSet::new();
        for (&cell, &detonation) in &self.hazards {
            if detonation == trigger_tick {
                footprint.extend(blast_footprint(grid, cell, self.config.blast_radius));
            }
        }
        if footprint.is_empty() {
            return 0;
        }

        let chained_tick = trigger_tick + 1;
        let mut accelerated = 0;
        for (cell, detonation) in self.hazards.iter_mut() {
            if *detonation == trigger_tick || !footprint.contains(cell) {
                continue;
            }
            if chained_tick < *detonation {
                *detonation = chained_tick;
                accelerated += 1;
            }
        }
        accelerated
    }

    /// Every cell unsafe to stand on at `tick`: the full blast footprint of
    /// each hazard currently in a dangerous phase of its life.
    ///
    /// A hazard is dangerous for a short grace window after placement and
    /// again from shortly before detonation; in the quiet middle of its fuse
    /// the footprint is treated as traversable.
    pub fn dangerous_cells<G: GridView>(&self, grid: &G, tick: u64) -> BTreeSet<Cell> {
        let mut cells = BTreeSet::new();
        for (&cell, &detonation) in &self.hazards {
            if !self.is_dangerous(detonation, tick) {
                continue;
            }
            cells.extend(blast_footprint(grid, cell, self.config.blast_radius));
        }
        cells
    }

    /// Destructible cells some pending blast will already consume. Spending
    /// ammo on these is wasted, so the planner skips them.
    pub fn claimed_cells(&self) -> BTreeSet<Cell> {
        self.claims.values().flatten().copied().collect()
    }

    fn is_dangerous(&self, detonation: u64, tick: u64) -> bool {
        // The grace window end is derived from the schedule rather than a
        // stored placement tick, so accelerated hazards shift with it.
        let grace_end = (detonation + u64::from(self.config.placement_grace))
            .saturating_sub(u64::from(self.config.fuse_ticks));
        let warning_start = detonation.saturating_sub(u64::from(self.config.detonation_warning));
        tick <= grace_end || tick >= warning_start
    }
}

impl Default for HazardTracker {
    fn default() -> Self {
        Self::new(HazardConfig::default())
    }
}
