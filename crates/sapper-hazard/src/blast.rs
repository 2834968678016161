use std::collections::BTreeSet;

use sapper_core::{Cell, GridView, SCAN_ORDER};

/// Cells a blast at `origin` reaches: the origin plus four cardinal rays of
/// up to `radius` cells.
///
/// A ray includes the first blast-absorbing cell it meets, then stops; rays
/// also stop at the grid edge. An out-of-bounds origin reaches nothing.
pub fn blast_footprint<G: GridView>(grid: &G, origin: Cell, radius: i32) -> BTreeSet<Cell> {
    let mut cells = BTreeSet::new();
    if !grid.in_bounds(origin) {
        return cells;
    }
    cells.insert(origin);
    for (dx, dy) in SCAN_ORDER {
        for reach in 1..=radius {
            let cell = origin.step(dx * reach, dy * reach);
            if !grid.in_bounds(cell) {
                break;
            }
            cells.insert(cell);
            if grid.classification_at(cell).blocks_blast() {
                break;
            }
        }
    }
    cells
}

/// Destructible cells within `radius` along each cardinal ray from `origin`.
///
/// Unlike [`blast_footprint`], rays here do not stop at blocking cells: a
/// soft block two cells out is claimed even when another block sits between
/// it and the origin. Walk order is fixed, so the result order is too.
pub fn claim_targets<G: GridView>(grid: &G, origin: Cell, radius: i32) -> Vec<Cell> {
    let mut targets = Vec::new();
    if !grid.in_bounds(origin) {
        return targets;
    }
    for (dx, dy) in SCAN_ORDER {
        for reach in 1..=radius {
            let cell = origin.step(dx * reach, dy * reach);
            if !grid.in_bounds(cell) {
                break;
            }
            if grid.classification_at(cell).destructible() {
                targets.push(cell);
            }
        }
    }
    targets
}
