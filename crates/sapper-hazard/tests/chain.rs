use std::collections::{BTreeMap, BTreeSet};

use sapper_core::{Cell, Classification, GridView};
use sapper_hazard::{HazardConfig, HazardTracker};

struct TestGrid {
    columns: i32,
    rows: i32,
    tiles: BTreeMap<Cell, Classification>,
}

impl TestGrid {
    fn open(columns: i32, rows: i32) -> Self {
        Self {
            columns,
            rows,
            tiles: BTreeMap::new(),
        }
    }

    fn put(&mut self, x: i32, y: i32, class: Classification) {
        self.tiles.insert(Cell::new(x, y), class);
    }
}

impl GridView for TestGrid {
    fn columns(&self) -> i32 {
        self.columns
    }

    fn rows(&self) -> i32 {
        self.rows
    }

    fn entity_at(&self, cell: Cell) -> Option<Classification> {
        self.tiles.get(&cell).copied()
    }
}

fn active(cells: &[(i32, i32)]) -> BTreeSet<Cell> {
    cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()
}

#[test]
fn imminent_blast_pulls_neighbors_one_tick_behind_it() {
    let grid = TestGrid::open(12, 12);
    let mut tracker = HazardTracker::new(HazardConfig::default());

    // First hazard detonates at 34, the second at 39.
    tracker.update(&grid, &active(&[(4, 4)]), 0);
    tracker.update(&grid, &active(&[(4, 4), (6, 4)]), 5);
    assert_eq!(tracker.detonation_tick(Cell::new(4, 4)), Some(34));
    assert_eq!(tracker.detonation_tick(Cell::new(6, 4)), Some(39));

    // Nothing chains while the first blast is still far off.
    let delta = tracker.update(&grid, &active(&[(4, 4), (6, 4)]), 20);
    assert_eq!(delta.accelerated, 0);
    assert_eq!(tracker.detonation_tick(Cell::new(6, 4)), Some(39));

    // At tick 32 the first hazard is exactly chain_window away and its
    // blast covers the second, two cells along the row.
    let delta = tracker.update(&grid, &active(&[(4, 4), (6, 4)]), 32);
    assert_eq!(delta.accelerated, 1);
    assert_eq!(tracker.detonation_tick(Cell::new(4, 4)), Some(34));
    assert_eq!(tracker.detonation_tick(Cell::new(6, 4)), Some(35));
}

#[test]
fn acceleration_is_idempotent_within_a_tick() {
    let grid = TestGrid::open(12, 12);
    let mut tracker = HazardTracker::new(HazardConfig::default());

    tracker.update(&grid, &active(&[(4, 4)]), 0);
    tracker.update(&grid, &active(&[(4, 4), (6, 4)]), 5);

    let first = tracker.update(&grid, &active(&[(4, 4), (6, 4)]), 32);
    let second = tracker.update(&grid, &active(&[(4, 4), (6, 4)]), 32);

    assert_eq!(first.accelerated, 1);
    assert_eq!(second.accelerated, 0);
    assert_eq!(tracker.detonation_tick(Cell::new(6, 4)), Some(35));
}

#[test]
fn detonation_ticks_never_increase() {
    let grid = TestGrid::open(12, 12);
    let mut tracker = HazardTracker::new(HazardConfig::default());

    tracker.update(&grid, &active(&[(4, 4)]), 0);
    tracker.update(&grid, &active(&[(4, 4), (6, 4)]), 5);
    tracker.update(&grid, &active(&[(4, 4), (6, 4), (6, 6)]), 8);

    let set = active(&[(4, 4), (6, 4), (6, 6)]);
    let watched = [Cell::new(4, 4), Cell::new(6, 4), Cell::new(6, 6)];
    let mut last: Vec<u64> = watched
        .iter()
        .map(|&cell| tracker.detonation_tick(cell).unwrap())
        .collect();

    for tick in 9..=40 {
        tracker.update(&grid, &set, tick);
        for (i, &cell) in watched.iter().enumerate() {
            let now = tracker.detonation_tick(cell).unwrap();
            assert!(now <= last[i], "detonation moved later at tick {tick}");
            last[i] = now;
        }
    }

    // The chain actually fired: both later hazards were pulled in.
    assert_eq!(last, vec![34, 35, 36]);
}

#[test]
fn cascades_detonate_one_tick_apart() {
    let grid = TestGrid::open(16, 16);
    let mut tracker = HazardTracker::new(HazardConfig::default());

    // A row of hazards two cells apart: each blast reaches the next hazard
    // but not the one after it.
    tracker.update(&grid, &active(&[(2, 8)]), 0);
    tracker.update(&grid, &active(&[(2, 8), (4, 8)]), 10);
    tracker.update(&grid, &active(&[(2, 8), (4, 8), (6, 8)]), 20);
    assert_eq!(tracker.detonation_tick(Cell::new(2, 8)), Some(34));
    assert_eq!(tracker.detonation_tick(Cell::new(4, 8)), Some(44));
    assert_eq!(tracker.detonation_tick(Cell::new(6, 8)), Some(54));

    let set = active(&[(2, 8), (4, 8), (6, 8)]);
    let mut accelerations = Vec::new();
    for tick in 21..=40 {
        let delta = tracker.update(&grid, &set, tick);
        if delta.accelerated > 0 {
            accelerations.push((tick, delta.accelerated));
        }
    }

    // Tick 32 chains the middle hazard to 35; tick 33 sees the middle one
    // two ticks out and chains the last to 36.
    assert_eq!(accelerations, vec![(32, 1), (33, 1)]);
    assert_eq!(tracker.detonation_tick(Cell::new(2, 8)), Some(34));
    assert_eq!(tracker.detonation_tick(Cell::new(4, 8)), Some(35));
    assert_eq!(tracker.detonation_tick(Cell::new(6, 8)), Some(36));
}

#[test]
fn walls_stop_a_chain() {
    let mut grid = TestGrid::open(12, 12);
    grid.put(5, 4, Classification::IndestructibleBlock);
    let mut tracker = HazardTracker::new(HazardConfig::default());

    tracker.update(&grid, &active(&[(4, 4)]), 0);
    tracker.update(&grid, &active(&[(4, 4), (6, 4)]), 5);

    let delta = tracker.update(&grid, &active(&[(4, 4), (6, 4)]), 32);
    assert_eq!(delta.accelerated, 0);
    assert_eq!(tracker.detonation_tick(Cell::new(6, 4)), Some(39));
}

#[test]
fn hazard_already_detonating_with_its_trigger_is_left_alone() {
    let grid = TestGrid::open(12, 12);
    let mut tracker = HazardTracker::new(HazardConfig::default());

    // Both placed the same tick, so both detonate at 34 and neither can
    // pull the other earlier.
    tracker.update(&grid, &active(&[(4, 4), (6, 4)]), 0);
    let delta = tracker.update(&grid, &active(&[(4, 4), (6, 4)]), 32);

    assert_eq!(delta.accelerated, 0);
    assert_eq!(tracker.detonation_tick(Cell::new(4, 4)), Some(34));
    assert_eq!(tracker.detonation_tick(Cell::new(6, 4)), Some(34));
}
