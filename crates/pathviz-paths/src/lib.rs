//! Search algorithms for pathviz grids.
//!
//! Three uninformed searches share one contract: explore from a start cell
//! towards a goal on a [`Grid`](pathviz_core::Grid), treating obstacles as
//! walls, and report every newly discovered cell to an [`Observer`]:
//!
//! - **BFS** ([`bfs`]): FIFO frontier, shortest paths in step count
//! - **DFS** ([`dfs`]): LIFO frontier, reachability only
//! - **UCS** ([`ucs`]): binary-heap frontier keyed by accumulated cost
//!
//! Each returns an [`Exploration`] holding the came-from [`VisitRecord`];
//! [`reconstruct_path`] turns that into a start-to-goal path and reports the
//! path cells, goal first. [`run_search`] does both and times the run.
//!
//! ```
//! use pathviz_core::{Cell, Grid};
//! use pathviz_paths::{Algorithm, Recorder, run_search};
//!
//! let grid = Grid::parse("S.#\n...\n#.G").unwrap();
//! let mut rec = Recorder::default();
//! let result = run_search(Algorithm::Bfs, &grid, Cell::new(0, 0), Cell::new(2, 2), &mut rec).unwrap();
//! assert!(result.found);
//! assert_eq!(result.path.len(), 5);
//! assert_eq!(rec.path.first(), Some(&Cell::new(2, 2)));
//! ```

mod bfs;
mod dfs;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod observer;
mod record;
mod search;
mod ucs;

pub use bfs::bfs;
pub use dfs::dfs;
pub use distance::manhattan;
pub use error::{EndpointProblem, SearchError};
pub use neighbors::neighbors_of;
pub use observer::{NoopObserver, Observer, Recorder};
pub use record::{VisitRecord, reconstruct_path};
pub use search::{Algorithm, Exploration, ParseAlgorithmError, SearchResult, run_painted, run_search};
pub use ucs::{UNREACHABLE, ucs};
