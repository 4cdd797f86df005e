//! The [`Grid`] model: a fixed-size 2D store of [`CellState`]s.
//!
//! A `Grid` is owned by the application and borrowed immutably by searches.
//! It does not enforce the single-start / single-goal discipline; it only
//! remembers the most recently painted start and goal.
//!
//! Grids can also be built from an ASCII layout, one line per row:
//!
//! ```text
//! S..#
//! .#.G
//! ```
//!
//! where `.` is empty, `S` start, `G` goal and `#` an obstacle.

use std::fmt;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Cell, Dims};

/// The state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    Goal,
    Obstacle,
}

impl CellState {
    /// The layout glyph for this state.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Obstacle => '#',
        }
    }

    /// Parse a layout glyph.
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            'S' => Some(Self::Start),
            'G' => Some(Self::Goal),
            '#' => Some(Self::Obstacle),
            _ => None,
        }
    }
}

/// A fixed-size 2D grid of [`CellState`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dims,
    cells: Vec<CellState>,
    start: Option<Cell>,
    goal: Option<Cell>,
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![CellState::Empty; dims.len()],
            start: None,
            goal: None,
        }
    }

    /// Create a grid from a validated configuration.
    pub fn with_config(cfg: &GridConfig) -> Result<Self, GridError> {
        Ok(Self::new(cfg.dims()?))
    }

    /// Build a grid from an ASCII layout (see the module docs).
    ///
    /// Leading and trailing blank lines are ignored; every other line must
    /// have the same width.
    pub fn parse(layout: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1);
        let lines = &lines[..end];

        let width = lines.first().map_or(0, |l| l.chars().count());
        let dims = GridConfig::new(lines.len() as i32, width as i32).dims()?;
        let mut grid = Self::new(dims);

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentSize {
                    line: row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row as i32, col as i32);
                let state = CellState::from_glyph(ch).ok_or(GridError::InvalidGlyph { ch, cell })?;
                grid.set_cell(cell, state)?;
            }
        }
        Ok(grid)
    }

    /// The grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Whether `cell` is inside the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.dims.contains(cell)
    }

    fn index(&self, cell: Cell) -> Result<usize, GridError> {
        self.dims.index(cell).ok_or(GridError::OutOfBounds {
            cell,
            dims: self.dims,
        })
    }

    /// Read the state at `cell`.
    pub fn get_cell(&self, cell: Cell) -> Result<CellState, GridError> {
        Ok(self.cells[self.index(cell)?])
    }

    /// Overwrite the state at `cell`.
    ///
    /// Painting `Start` or `Goal` makes `cell` the remembered start or goal.
    /// Overwriting the remembered start or goal with anything else forgets it.
    pub fn set_cell(&mut self, cell: Cell, state: CellState) -> Result<(), GridError> {
        let i = self.index(cell)?;
        self.cells[i] = state;

        if self.start == Some(cell) && state != CellState::Start {
            self.start = None;
        }
        if self.goal == Some(cell) && state != CellState::Goal {
            self.goal = None;
        }
        match state {
            CellState::Start => self.start = Some(cell),
            CellState::Goal => self.goal = Some(cell),
            CellState::Empty | CellState::Obstacle => {}
        }
        Ok(())
    }

    /// Set every cell to `Empty` and forget the start and goal.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Empty);
        self.start = None;
        self.goal = None;
        log::trace!("grid {} reset", self.dims);
    }

    /// The remembered start cell.
    #[inline]
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    /// The remembered goal cell.
    #[inline]
    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    /// Both endpoints, if both are set.
    #[inline]
    pub fn endpoints(&self) -> Option<(Cell, Cell)> {
        Some((self.start?, self.goal?))
    }

    /// Whether `cell` holds an obstacle. Out-of-bounds cells are not
    /// obstacles; callers bound-check separately.
    #[inline]
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.dims
            .index(cell)
            .is_some_and(|i| self.cells[i] == CellState::Obstacle)
    }

    /// Count how many cells hold `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Iterate over `(Cell, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.dims.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.dims.cols.max(1) as usize;
        for (row, chunk) in self.cells.chunks(cols).enumerate() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for state in chunk {
                write!(f, "{}", state.glyph())?;
            }
        }
        Ok(())
    }
}
