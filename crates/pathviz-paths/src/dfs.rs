use pathviz_core::{Cell, Grid};

use crate::error::SearchError;
use crate::frontier::explore;
use crate::observer::Observer;
use crate::search::Exploration;

/// Depth-first search from `start` to `goal`.
///
/// Neighbors are pushed up, down, left, right and popped last-in first-out,
/// so the right-hand neighbor is expanded first. Reachability only: the path
/// found is not necessarily shortest.
pub fn dfs<O: Observer + ?Sized>(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    observer: &mut O,
) -> Result<Exploration, SearchError> {
    explore(grid, start, goal, observer, Vec::new())
}
