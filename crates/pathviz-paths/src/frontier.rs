use std::collections::VecDeque;
use std::ops::ControlFlow;

use pathviz_core::{Cell, Grid};

use crate::error::SearchError;
use crate::neighbors::neighbors_of;
use crate::observer::Observer;
use crate::record::VisitRecord;
use crate::search::{Exploration, check_endpoints};

/// The open set of an unweighted search. Its pop order is the only thing
/// that distinguishes breadth-first from depth-first search.
pub(crate) trait Frontier {
    fn push(&mut self, cell: Cell);
    fn pop(&mut self) -> Option<Cell>;
}

/// FIFO: oldest discovered cell first.
impl Frontier for VecDeque<Cell> {
    #[inline]
    fn push(&mut self, cell: Cell) {
        self.push_back(cell);
    }

    #[inline]
    fn pop(&mut self) -> Option<Cell> {
        self.pop_front()
    }
}

/// LIFO: most recently discovered cell first.
impl Frontier for Vec<Cell> {
    #[inline]
    fn push(&mut self, cell: Cell) {
        Vec::push(self, cell);
    }

    #[inline]
    fn pop(&mut self) -> Option<Cell> {
        Vec::pop(self)
    }
}

/// Unweighted graph search shared by BFS and DFS.
///
/// Cells are marked visited when they are pushed, so each cell is pushed,
/// recorded and reported at most once.
pub(crate) fn explore<F, O>(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    observer: &mut O,
    mut frontier: F,
) -> Result<Exploration, SearchError>
where
    F: Frontier,
    O: Observer + ?Sized,
{
    check_endpoints(grid, start, goal)?;

    let dims = grid.dims();
    let mut record = VisitRecord::new(dims);
    let mut visited = vec![false; dims.len()];
    if let Some(si) = dims.index(start) {
        visited[si] = true;
    }
    frontier.push(start);
    let mut visits = 0;

    while let Some(current) = frontier.pop() {
        if current == goal {
            return Ok(Exploration::found(record, visits));
        }
        for n in neighbors_of(current, dims) {
            let Some(ni) = dims.index(n) else {
                continue;
            };
            if visited[ni] || grid.is_obstacle(n) {
                continue;
            }
            visited[ni] = true;
            record.insert(n, current);
            frontier.push(n);
            visits += 1;
            if let ControlFlow::Break(()) = observer.on_visit(n) {
                return Ok(Exploration::cancelled(record, visits));
            }
        }
    }

    Ok(Exploration::exhausted(record, visits))
}
