use pathviz_core::{Cell, Dims};

use crate::error::SearchError;
use crate::observer::Observer;

/// The came-from tree built by one search: for every discovered cell, the
/// cell it was reached from.
///
/// Stored as a flat parent array over the grid, so lookups are O(1) and the
/// record never outlives the dimensions it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    dims: Dims,
    parents: Vec<Option<Cell>>,
    len: usize,
}

impl VisitRecord {
    /// Create an empty record for a grid of `dims`.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            parents: vec![None; dims.len()],
            len: 0,
        }
    }

    /// The grid dimensions the record covers.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Record (or overwrite) the parent of `cell`. Out-of-bounds cells are
    /// ignored.
    pub fn insert(&mut self, cell: Cell, parent: Cell) {
        if let Some(i) = self.dims.index(cell) {
            if self.parents[i].is_none() {
                self.len += 1;
            }
            self.parents[i] = Some(parent);
        }
    }

    /// The parent of `cell`, if it has one.
    #[inline]
    pub fn parent_of(&self, cell: Cell) -> Option<Cell> {
        self.dims.index(cell).and_then(|i| self.parents[i])
    }

    /// Whether `cell` has a recorded parent.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.parent_of(cell).is_some()
    }

    /// Number of cells with a recorded parent.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over `(cell, parent)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (self.dims.cell(i), p)))
    }
}

/// Walk `record` from `goal` back to `start` and return the path in
/// start-to-goal order, both ends included.
///
/// `observer.on_path` is called for the goal and every intermediate cell, in
/// goal-to-start order; the start itself is not reported.
pub fn reconstruct_path<O: Observer + ?Sized>(
    record: &VisitRecord,
    start: Cell,
    goal: Cell,
    observer: &mut O,
) -> Result<Vec<Cell>, SearchError> {
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        // A valid chain visits each recorded cell at most once.
        if path.len() > record.len() {
            log::error!("parent chain from {goal} loops at {current}");
            return Err(SearchError::BrokenChain { at: current });
        }
        let Some(parent) = record.parent_of(current) else {
            log::error!("parent chain from {goal} breaks at {current}");
            return Err(SearchError::BrokenChain { at: current });
        };
        path.push(current);
        current = parent;
    }
    // Report only once the whole chain is known to be sound.
    for &cell in &path {
        observer.on_path(cell);
    }
    path.push(start);
    path.reverse();
    Ok(path)
}
