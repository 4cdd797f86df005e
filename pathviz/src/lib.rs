//! **pathviz**: an interactive terminal demonstrator for uninformed grid
//! search.
//!
//! Paint a start, a goal and walls on a grid, then watch BFS, DFS or UCS
//! explore it cell by cell and trace the path it finds. The searches live in
//! `pathviz-paths`; this crate supplies the state, drawing, pacing and event
//! loop on top of any [`Driver`](pathviz_core::Driver).

pub mod animate;
pub mod app;
pub mod cli;
pub mod colors;
pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod screen;
pub mod view;

#[cfg(test)]
mod testing;

pub use app::run;
pub use cli::Args;
pub use config::{DemoConfig, Pacing};
pub use model::{Action, Demo};
