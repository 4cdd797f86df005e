use pathviz_core::{Cell, Dims};

/// Cardinal offsets as (drow, dcol), in enumeration order: up, down, left,
/// right. Depth-first visit order depends on this order.
const DIRS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The in-bounds 4-directional neighbors of `cell`, in the order up, down,
/// left, right.
pub fn neighbors_of(cell: Cell, dims: Dims) -> impl Iterator<Item = Cell> {
    DIRS.into_iter()
        .map(move |(dr, dc)| cell.shift(dr, dc))
        .filter(move |&n| dims.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(cell: Cell) -> Vec<Cell> {
        neighbors_of(cell, Dims::new(10, 10)).collect()
    }

    #[test]
    fn interior_order() {
        assert_eq!(
            collect(Cell::new(5, 5)),
            vec![Cell::new(4, 5), Cell::new(6, 5), Cell::new(5, 4), Cell::new(5, 6)]
        );
    }

    #[test]
    fn corners_have_two() {
        assert_eq!(collect(Cell::new(0, 0)), vec![Cell::new(1, 0), Cell::new(0, 1)]);
        assert_eq!(collect(Cell::new(9, 9)), vec![Cell::new(8, 9), Cell::new(9, 8)]);
    }

    #[test]
    fn edges_have_three() {
        assert_eq!(
            collect(Cell::new(0, 4)),
            vec![Cell::new(1, 4), Cell::new(0, 3), Cell::new(0, 5)]
        );
        assert_eq!(collect(Cell::new(4, 9)).len(), 3);
    }

    #[test]
    fn all_neighbors_adjacent() {
        let dims = Dims::new(10, 10);
        for c in dims.iter() {
            let ns: Vec<_> = neighbors_of(c, dims).collect();
            assert!((2..=4).contains(&ns.len()));
            assert!(ns.iter().all(|&n| c.is_adjacent(n) && dims.contains(n)));
        }
    }
}
