use crate::cell::Cell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only agent facts, supplied fresh by the host every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentState {
    /// Cell the agent currently stands on.
    pub position: Cell,
    /// Hazards the agent can still place.
    pub ammo: u32,
}

impl AgentState {
    pub fn new(position: Cell, ammo: u32) -> Self {
        Self { position, ammo }
    }
}
