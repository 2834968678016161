use std::collections::{BTreeMap, BTreeSet, VecDeque};

use sapper_core::{Action, AgentState, Cell, Classification, GridView, SCAN_ORDER};

/// Outcome of one planning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    /// Goal cell and its path length, when the search found one.
    pub target: Option<(Cell, u32)>,
}

impl Decision {
    fn idle() -> Self {
        Self {
            action: Action::Idle,
            target: None,
        }
    }
}

/// Classifications the search will lock onto this tick.
///
/// Treasure and ammo are always worth reaching. An open cell only counts
/// while fleeing, and destructible blocks only while armed; fleeing and
/// mining are mutually exclusive.
#[derive(Debug, Clone, Copy)]
struct DesiredSet {
    flee: bool,
    armed: bool,
}

impl DesiredSet {
    fn contains(self, class: Classification) -> bool {
        match class {
            Classification::Treasure | Classification::AmmoPickup => true,
            Classification::Empty => self.flee,
            Classification::SoftBlock | Classification::OreBlock => self.armed,
            Classification::IndestructibleBlock | Classification::Hazard => false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SearchHit {
    target: Cell,
    first_step: Cell,
    distance: u32,
}

/// Choose one action for the tick.
///
/// Runs a breadth-first search from the agent's cell, pruning anything out
/// of bounds, already seen, unsafe, or claimed by a pending blast. The
/// first desired cell found wins; ties at equal distance fall to the fixed
/// scan order. With no reachable target the agent idles.
pub fn plan<G: GridView>(
    grid: &G,
    agent: AgentState,
    unsafe_cells: &BTreeSet<Cell>,
    claimed_cells: &BTreeSet<Cell>,
) -> Decision {
    let flee = unsafe_cells.contains(&agent.position);
    let desired = DesiredSet {
        flee,
        armed: !flee && agent.ammo > 0,
    };

    let Some(hit) = search(grid, agent.position, desired, unsafe_cells, claimed_cells) else {
        return Decision::idle();
    };
    let target = Some((hit.target, hit.distance));

    // One hop onto a destructible block means blast it from here rather
    // than walk into it.
    if hit.distance == 1 && grid.classification_at(hit.target).destructible() {
        return Decision {
            action: Action::PlaceHazard,
            target,
        };
    }

    let (dx, dy) = hit.first_step.offset_from(agent.position);
    Decision {
        action: Action::from_offset(dx, dy).unwrap_or(Action::Idle),
        target,
    }
}

/// [`plan`] reduced to the action alone.
pub fn decide<G: GridView>(
    grid: &G,
    agent: AgentState,
    unsafe_cells: &BTreeSet<Cell>,
    claimed_cells: &BTreeSet<Cell>,
) -> Action {
    plan(grid, agent, unsafe_cells, claimed_cells).action
}

fn search<G: GridView>(
    grid: &G,
    start: Cell,
    desired: DesiredSet,
    unsafe_cells: &BTreeSet<Cell>,
    claimed_cells: &BTreeSet<Cell>,
) -> Option<SearchHit> {
    let mut came_from: BTreeMap<Cell, Cell> = BTreeMap::new();
    let mut queue: VecDeque<(Cell, u32)> = VecDeque::new();
    queue.push_back((start, 0));

    while let Some((current, distance)) = queue.pop_front() {
        for (dx, dy) in SCAN_ORDER {
            let next = current.step(dx, dy);
            if next == start
                || came_from.contains_key(&next)
                || !grid.in_bounds(next)
                || unsafe_cells.contains(&next)
                || claimed_cells.contains(&next)
            {
                continue;
            }

            // Recorded even for cells the agent cannot enter, so a match on
            // a block still has a predecessor chain back to the start.
            came_from.insert(next, current);

            let class = grid.classification_at(next);
            if desired.contains(class) {
                return Some(SearchHit {
                    target: next,
                    first_step: first_step(start, next, &came_from),
                    distance: distance + 1,
                });
            }
            if class.passable() {
                queue.push_back((next, distance + 1));
            }
        }
    }
    None
}

/// Walk the predecessor chain from `target` back to the cell adjacent to
/// `start`.
fn first_step(start: Cell, target: Cell, came_from: &BTreeMap<Cell, Cell>) -> Cell {
    let mut cell = target;
    while let Some(&previous) = came_from.get(&cell) {
        if previous == start {
            break;
        }
        cell = previous;
    }
    cell
}
