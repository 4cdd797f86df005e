use std::collections::VecDeque;

use pathviz_core::{Cell, Grid};

use crate::error::SearchError;
use crate::frontier::explore;
use crate::observer::Observer;
use crate::search::Exploration;

/// Breadth-first search from `start` to `goal`.
///
/// Cells are expanded in non-decreasing step distance from `start`, so a
/// found path is a shortest one in edge count.
pub fn bfs<O: Observer + ?Sized>(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    observer: &mut O,
) -> Result<Exploration, SearchError> {
    explore(grid, start, goal, observer, VecDeque::new())
}
