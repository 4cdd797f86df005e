//! Screen layout: where grid cells, menu buttons and status lines go.

use pathviz_core::{Cell, Dims, Point};
use pathviz_paths::Algorithm;

/// Terminal columns per grid cell; terminal cells are roughly twice as tall
/// as they are wide.
pub const CELL_WIDTH: i32 = 2;
/// Width of the menu panel, border included.
pub const MENU_WIDTH: i32 = 26;
/// Minimum screen height, so the panel always fits.
pub const MIN_HEIGHT: i32 = 20;

const BUTTON_WIDTH: i32 = 13;
const BUTTON_ROWS: [(Algorithm, i32); 3] = [(Algorithm::Bfs, 2), (Algorithm::Dfs, 4), (Algorithm::Ucs, 6)];

/// Positions of every on-screen element for a grid of given dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    dims: Dims,
}

impl Layout {
    pub fn new(dims: Dims) -> Self {
        Self { dims }
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Top-left screen position of the grid area (inside the border).
    #[inline]
    pub fn grid_origin(&self) -> Point {
        Point::new(1, 1)
    }

    /// Width and height of the grid area in screen cells.
    #[inline]
    pub fn grid_size(&self) -> Point {
        Point::new(self.dims.cols * CELL_WIDTH, self.dims.rows)
    }

    /// Left edge of the menu panel.
    #[inline]
    pub fn menu_x(&self) -> i32 {
        self.grid_origin().x + self.grid_size().x + 1
    }

    /// Total screen size the application draws into.
    pub fn screen_size(&self) -> Point {
        Point::new(
            self.menu_x() + MENU_WIDTH,
            (self.grid_size().y + 2).max(MIN_HEIGHT),
        )
    }

    /// Screen position of the left half of `cell`.
    #[inline]
    pub fn screen_of(&self, cell: Cell) -> Point {
        let o = self.grid_origin();
        Point::new(o.x + cell.col * CELL_WIDTH, o.y + cell.row)
    }

    /// The grid cell under screen position `p`, if any.
    pub fn cell_at(&self, p: Point) -> Option<Cell> {
        let o = self.grid_origin();
        let (dx, dy) = (p.x - o.x, p.y - o.y);
        if dx < 0 || dy < 0 {
            return None;
        }
        let cell = Cell::new(dy, dx / CELL_WIDTH);
        self.dims.contains(cell).then_some(cell)
    }

    /// Screen position of the run button for `algorithm`.
    pub fn button_pos(&self, algorithm: Algorithm) -> Point {
        let y = BUTTON_ROWS
            .iter()
            .find(|(a, _)| *a == algorithm)
            .map_or(0, |&(_, y)| y);
        Point::new(self.menu_x() + 2, y)
    }

    /// Width of a run button.
    #[inline]
    pub fn button_width(&self) -> i32 {
        BUTTON_WIDTH
    }

    /// The run button under screen position `p`, if any.
    pub fn button_at(&self, p: Point) -> Option<Algorithm> {
        Algorithm::ALL.into_iter().find(|&a| {
            let b = self.button_pos(a);
            p.y == b.y && p.x >= b.x && p.x < b.x + BUTTON_WIDTH
        })
    }

    /// Screen position of status line `i` (0-based) in the menu panel.
    #[inline]
    pub fn status_line(&self, i: i32) -> Point {
        Point::new(self.menu_x() + 2, 9 + i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_round_trip_through_screen() {
        let layout = Layout::new(Dims::new(10, 10));
        for cell in layout.dims().iter() {
            let p = layout.screen_of(cell);
            assert_eq!(layout.cell_at(p), Some(cell));
            assert_eq!(layout.cell_at(p.shift(1, 0)), Some(cell));
        }
    }

    #[test]
    fn outside_grid_is_no_cell() {
        let layout = Layout::new(Dims::new(10, 10));
        assert_eq!(layout.cell_at(Point::new(0, 0)), None);
        assert_eq!(layout.cell_at(Point::new(21, 1)), None);
        assert_eq!(layout.cell_at(Point::new(1, 11)), None);
    }

    #[test]
    fn buttons_hit_test() {
        let layout = Layout::new(Dims::new(10, 10));
        for a in Algorithm::ALL {
            let p = layout.button_pos(a);
            assert_eq!(layout.button_at(p), Some(a));
            assert_eq!(layout.button_at(p.shift(BUTTON_WIDTH - 1, 0)), Some(a));
            assert_eq!(layout.button_at(p.shift(BUTTON_WIDTH, 0)), None);
        }
        assert_eq!(layout.button_at(Point::new(0, 0)), None);
    }

    #[test]
    fn screen_fits_everything() {
        let layout = Layout::new(Dims::new(10, 10));
        let size = layout.screen_size();
        assert_eq!(size.x, 1 + 20 + 1 + MENU_WIDTH);
        assert_eq!(size.y, MIN_HEIGHT);
        assert_eq!(Layout::new(Dims::new(30, 10)).screen_size().y, 32);
    }
}
