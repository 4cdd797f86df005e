//! Grid configuration.

use crate::error::GridError;
use crate::geom::Dims;

/// Default number of grid rows.
pub const DEFAULT_ROWS: i32 = 10;
/// Default number of grid columns.
pub const DEFAULT_COLS: i32 = 10;

/// Dimensions a [`Grid`](crate::Grid) is built with. Fixed for the grid's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl GridConfig {
    /// Create a configuration with the given size.
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Check the configuration and return the grid dimensions.
    pub fn dims(&self) -> Result<Dims, GridError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(GridError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(Dims::new(self.rows, self.cols))
    }
}
