use std::collections::{BTreeMap, BTreeSet};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sapper_agent::planner::plan;
use sapper_core::{AgentState, Cell, Classification, GridView};

struct BenchGrid {
    columns: i32,
    rows: i32,
    tiles: BTreeMap<Cell, Classification>,
}

impl GridView for BenchGrid {
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

fn open_grid(side: i32) -> BenchGrid {
    let mut tiles = BTreeMap::new();
    tiles.insert(Cell::new(side - 1, side - 1), Classification::Treasure);
    BenchGrid {
        columns: side,
        rows: side,
        tiles,
    }
}

fn walled_grid(side: i32) -> BenchGrid {
    let mut grid = open_grid(side);
    // Alternating wall columns with single gaps force a serpentine search.
    for x in (2..side - 1).step_by(2) {
        let gap = if (x / 2) % 2 == 0 { 0 } else { side - 1 };
        for y in 0..side {
            if y != gap {
                grid.tiles
                    .insert(Cell::new(x, y), Classification::IndestructibleBlock);
            }
        }
    }
    grid
}

fn bench_target_planner(c: &mut Criterion) {
    let agent = AgentState::new(Cell::new(0, 0), 1);
    let unsafe_cells = BTreeSet::new();
    let claimed_cells = BTreeSet::new();

    let grid = open_grid(32);
    c.bench_function("sapper-agent/planner.plan(open 32x32)", |b| {
        b.iter(|| {
            let decision = plan(&grid, agent, &unsafe_cells, &claimed_cells);
            black_box(decision.action);
        })
    });

    let grid = walled_grid(32);
    c.bench_function("sapper-agent/planner.plan(walled 32x32)", |b| {
        b.iter(|| {
            let decision = plan(&grid, agent, &unsafe_cells, &claimed_cells);
            black_box(decision.action);
        })
    });
}

criterion_group!(benches, bench_target_planner);
criterion_main!(benches);
