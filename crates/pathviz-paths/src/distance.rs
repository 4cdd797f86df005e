use pathviz_core::Cell;

/// Manhattan (L1) distance: the edge count of a shortest 4-directional path
/// on an open grid.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
