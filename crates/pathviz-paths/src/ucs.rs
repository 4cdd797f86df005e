use std::collections::BinaryHeap;
use std::ops::ControlFlow;

use pathviz_core::{Cell, Grid};

use crate::error::SearchError;
use crate::neighbors::neighbors_of;
use crate::observer::Observer;
use crate::record::VisitRecord;
use crate::search::{Exploration, check_endpoints};

/// Sentinel cost for cells not reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

/// Cost of a single step. Terrain is unweighted.
const STEP_COST: i32 = 1;

/// Heap entry ordered by cost, then by insertion sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    cost: i32,
    seq: u64,
    cell: Cell,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest, oldest entry.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Uniform-cost search from `start` to `goal`.
///
/// The heap has no decrease-key: a cheaper route to a cell pushes a second
/// entry and reports the cell to `on_visit` again. Entries whose cost is
/// above the cell's best known cost are skipped when popped. Equal costs pop
/// in insertion order.
pub fn ucs<O: Observer + ?Sized>(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    observer: &mut O,
) -> Result<Exploration, SearchError> {
    check_endpoints(grid, start, goal)?;

    let dims = grid.dims();
    let mut record = VisitRecord::new(dims);
    let mut costs = vec![UNREACHABLE; dims.len()];
    let mut open: BinaryHeap<Entry> = BinaryHeap::new();
    let mut seq = 0u64;
    let mut visits = 0;

    if let Some(si) = dims.index(start) {
        costs[si] = 0;
    }
    open.push(Entry {
        cost: 0,
        seq,
        cell: start,
    });

    while let Some(Entry { cost, cell, .. }) = open.pop() {
        let Some(ci) = dims.index(cell) else {
            continue;
        };
        // Skip stale entries.
        if cost > costs[ci] {
            continue;
        }
        if cell == goal {
            return Ok(Exploration::found(record, visits));
        }

        for n in neighbors_of(cell, dims) {
            let Some(ni) = dims.index(n) else {
                continue;
            };
            if grid.is_obstacle(n) {
                continue;
            }
            let tentative = cost + STEP_COST;
            if tentative >= costs[ni] {
                continue;
            }
            costs[ni] = tentative;
            record.insert(n, cell);
            seq += 1;
            open.push(Entry {
                cost: tentative,
                seq,
                cell: n,
            });
            visits += 1;
            if let ControlFlow::Break(()) = observer.on_visit(n) {
                return Ok(Exploration::cancelled(record, visits));
            }
        }
    }

    Ok(Exploration::exhausted(record, visits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs;
    use crate::observer::Recorder;
    use crate::record::reconstruct_path;
    use pathviz_core::Dims;

    #[test]
    fn entry_order_is_cost_then_insertion() {
        let mut heap = BinaryHeap::new();
        heap.push(Entry { cost: 2, seq: 0, cell: Cell::new(0, 0) });
        heap.push(Entry { cost: 1, seq: 2, cell: Cell::new(0, 1) });
        heap.push(Entry { cost: 1, seq: 1, cell: Cell::new(0, 2) });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.cell).collect();
        assert_eq!(order, vec![Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)]);
    }

    #[test]
    fn matches_bfs_visit_order_on_uniform_costs() {
        let grid = Grid::parse(
            "
S.....
.###..
...#..
.#...G
",
        )
        .unwrap();
        let (start, goal) = (Cell::new(0, 0), Cell::new(3, 5));
        let mut by_ucs = Recorder::default();
        let mut by_bfs = Recorder::default();
        ucs(&grid, start, goal, &mut by_ucs).unwrap();
        bfs(&grid, start, goal, &mut by_bfs).unwrap();
        assert_eq!(by_ucs.visits, by_bfs.visits);
    }

    #[test]
    fn shortest_path_length() {
        let grid = Grid::new(Dims::new(10, 10));
        let (start, goal) = (Cell::new(2, 3), Cell::new(7, 8));
        let mut rec = Recorder::default();
        let ex = ucs(&grid, start, goal, &mut rec).unwrap();
        assert!(ex.found);
        let path = reconstruct_path(&ex.record, start, goal, &mut rec).unwrap();
        assert_eq!(path.len(), 11);
    }

    #[test]
    fn never_reports_a_cell_twice_on_uniform_costs() {
        let grid = Grid::new(Dims::new(6, 6));
        let mut rec = Recorder::default();
        let ex = ucs(&grid, Cell::new(0, 0), Cell::new(5, 5), &mut rec).unwrap();
        let mut seen = rec.visits.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), rec.visits.len());
        assert_eq!(ex.visits, rec.visits.len());
    }
}
