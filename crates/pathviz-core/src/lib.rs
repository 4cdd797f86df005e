//! **pathviz-core**: grid model and presentation types for the pathviz
//! search demonstrator.
//!
//! This crate provides the [`Grid`] that searches run on, the [`Cell`] and
//! [`Dims`] coordinate types, and the screen-side types ([`Canvas`],
//! [`Glyph`], [`Msg`], [`Driver`]) shared by back-ends and the application.

pub mod canvas;
pub mod config;
pub mod driver;
pub mod error;
pub mod geom;
pub mod grid;
pub mod messages;
pub mod style;

pub use canvas::{Canvas, Frame, FrameCell, compute_frame};
pub use config::{DEFAULT_COLS, DEFAULT_ROWS, GridConfig};
pub use driver::Driver;
pub use error::GridError;
pub use geom::{Cell, Dims, Point};
pub use grid::{CellState, Grid};
pub use messages::{Key, MouseAction, Msg};
pub use style::{Color, Glyph};
