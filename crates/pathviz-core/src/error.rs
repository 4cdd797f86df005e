//! Errors raised by the grid model.

use std::fmt;

use crate::geom::{Cell, Dims};

/// Errors that can occur when building or accessing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The cell lies outside the grid.
    OutOfBounds { cell: Cell, dims: Dims },
    /// Rows or columns are not strictly positive.
    InvalidDimensions { rows: i32, cols: i32 },
    /// Layout lines have inconsistent widths.
    InconsistentSize { line: usize, expected: usize, found: usize },
    /// A character not in the layout alphabet was found.
    InvalidGlyph { ch: char, cell: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, dims } => {
                write!(f, "cell {cell} is outside the {dims} grid")
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {rows}x{cols}")
            }
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has {found} columns, expected {expected}"
            ),
            Self::InvalidGlyph { ch, cell } => {
                write!(f, "layout contains invalid glyph \u{201c}{ch}\u{201d} at {cell}")
            }
        }
    }
}

impl std::error::Error for GridError {}
