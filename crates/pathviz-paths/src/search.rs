use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use pathviz_core::{Cell, Grid};

use crate::bfs::bfs;
use crate::dfs::dfs;
use crate::error::{EndpointProblem, SearchError};
use crate::observer::Observer;
use crate::record::{VisitRecord, reconstruct_path};
use crate::ucs::ucs;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Uniform-cost search.
    Ucs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Ucs];

    /// Short upper-case name, e.g. `"BFS"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Ucs => "UCS",
        }
    }

    /// Run the exploration phase of this algorithm only.
    pub fn explore<O: Observer + ?Sized>(
        self,
        grid: &Grid,
        start: Cell,
        goal: Cell,
        observer: &mut O,
    ) -> Result<Exploration, SearchError> {
        match self {
            Self::Bfs => bfs(grid, start, goal, observer),
            Self::Dfs => dfs(grid, start, goal, observer),
            Self::Ucs => ucs(grid, start, goal, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dfs or ucs)", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            "dfs" | "depth-first" => Ok(Self::Dfs),
            "ucs" | "uniform-cost" => Ok(Self::Ucs),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Exploration
// ---------------------------------------------------------------------------

/// What one exploration produced: whether the goal was reached and the
/// came-from tree built on the way.
#[derive(Debug, Clone)]
pub struct Exploration {
    pub found: bool,
    /// The observer asked the search to stop.
    pub cancelled: bool,
    pub record: VisitRecord,
    /// Number of `on_visit` notifications sent.
    pub visits: usize,
}

impl Exploration {
    pub(crate) fn found(record: VisitRecord, visits: usize) -> Self {
        Self {
            found: true,
            cancelled: false,
            record,
            visits,
        }
    }

    pub(crate) fn exhausted(record: VisitRecord, visits: usize) -> Self {
        Self {
            found: false,
            cancelled: false,
            record,
            visits,
        }
    }

    pub(crate) fn cancelled(record: VisitRecord, visits: usize) -> Self {
        Self {
            found: false,
            cancelled: true,
            record,
            visits,
        }
    }
}

/// Refuse endpoints a search cannot start from.
pub(crate) fn check_endpoints(grid: &Grid, start: Cell, goal: Cell) -> Result<(), SearchError> {
    let problem = if !grid.contains(start) {
        EndpointProblem::StartOutOfBounds
    } else if !grid.contains(goal) {
        EndpointProblem::GoalOutOfBounds
    } else if start == goal {
        EndpointProblem::SameCell
    } else if grid.is_obstacle(start) {
        EndpointProblem::StartBlocked
    } else if grid.is_obstacle(goal) {
        EndpointProblem::GoalBlocked
    } else {
        return Ok(());
    };
    Err(SearchError::InvalidEndpoints {
        start: Some(start),
        goal: Some(goal),
        problem,
    })
}

// ---------------------------------------------------------------------------
// run_search
// ---------------------------------------------------------------------------

/// The outcome of [`run_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub found: bool,
    pub cancelled: bool,
    /// Start to goal inclusive; empty unless `found`.
    pub path: Vec<Cell>,
    /// Number of `on_visit` notifications sent.
    pub visits: usize,
    /// Wall time of the whole run, observer time included.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Number of steps on the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run `algorithm` from `start` to `goal`, then report the path to
/// `observer` if one was found.
pub fn run_search<O: Observer + ?Sized>(
    algorithm: Algorithm,
    grid: &Grid,
    start: Cell,
    goal: Cell,
    observer: &mut O,
) -> Result<SearchResult, SearchError> {
    log::debug!("{algorithm}: searching {start} -> {goal} on a {} grid", grid.dims());
    let started = Instant::now();

    let ex = algorithm.explore(grid, start, goal, observer)?;
    let path = if ex.found {
        reconstruct_path(&ex.record, start, goal, observer)?
    } else {
        Vec::new()
    };

    let result = SearchResult {
        algorithm,
        found: ex.found,
        cancelled: ex.cancelled,
        path,
        visits: ex.visits,
        elapsed: started.elapsed(),
    };
    if result.cancelled {
        log::info!("{algorithm}: cancelled after {} visits", result.visits);
    } else {
        log::debug!(
            "{algorithm}: found={} steps={} visits={} in {:?}",
            result.found,
            result.steps(),
            result.visits,
            result.elapsed
        );
    }
    Ok(result)
}

/// Run `algorithm` between the start and goal painted on `grid`.
pub fn run_painted<O: Observer + ?Sized>(
    algorithm: Algorithm,
    grid: &Grid,
    observer: &mut O,
) -> Result<SearchResult, SearchError> {
    let Some((start, goal)) = grid.endpoints() else {
        return Err(SearchError::InvalidEndpoints {
            start: grid.start(),
            goal: grid.goal(),
            problem: EndpointProblem::Missing,
        });
    };
    run_search(algorithm, grid, start, goal, observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{NoopObserver, Recorder};
    use pathviz_core::{CellState, Dims};

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(" DFS ".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert_eq!("uniform-cost".parse::<Algorithm>(), Ok(Algorithm::Ucs));
        assert!("astar".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::Ucs.to_string(), "UCS");
    }

    #[test]
    fn endpoints_checked_before_any_work() {
        let mut grid = Grid::new(Dims::new(4, 4));
        grid.set_cell(Cell::new(1, 1), CellState::Obstacle).unwrap();
        let cases = [
            (Cell::new(-1, 0), Cell::new(0, 0), EndpointProblem::StartOutOfBounds),
            (Cell::new(0, 0), Cell::new(4, 0), EndpointProblem::GoalOutOfBounds),
            (Cell::new(2, 2), Cell::new(2, 2), EndpointProblem::SameCell),
            (Cell::new(1, 1), Cell::new(2, 2), EndpointProblem::StartBlocked),
            (Cell::new(2, 2), Cell::new(1, 1), EndpointProblem::GoalBlocked),
        ];
        for algorithm in Algorithm::ALL {
            for (start, goal, problem) in cases {
                let mut rec = Recorder::default();
                let err = run_search(algorithm, &grid, start, goal, &mut rec).unwrap_err();
                assert_eq!(
                    err,
                    SearchError::InvalidEndpoints {
                        start: Some(start),
                        goal: Some(goal),
                        problem
                    }
                );
                assert!(rec.visits.is_empty());
            }
        }
    }

    #[test]
    fn painted_endpoints_required() {
        let mut grid = Grid::new(Dims::new(4, 4));
        grid.set_cell(Cell::new(0, 0), CellState::Start).unwrap();
        let err = run_painted(Algorithm::Bfs, &grid, &mut NoopObserver).unwrap_err();
        assert_eq!(
            err,
            SearchError::InvalidEndpoints {
                start: Some(Cell::new(0, 0)),
                goal: None,
                problem: EndpointProblem::Missing
            }
        );

        grid.set_cell(Cell::new(3, 3), CellState::Goal).unwrap();
        let result = run_painted(Algorithm::Bfs, &grid, &mut NoopObserver).unwrap();
        assert!(result.found);
        assert_eq!(result.steps(), 6);
    }

    #[test]
    fn not_found_has_empty_path() {
        let grid = Grid::parse("S#G").unwrap();
        for algorithm in Algorithm::ALL {
            let mut rec = Recorder::default();
            let result = run_painted(algorithm, &grid, &mut rec).unwrap();
            assert!(!result.found);
            assert!(!result.cancelled);
            assert!(result.path.is_empty());
            assert!(rec.path.is_empty());
            assert_eq!(result.visits, 0);
        }
    }
}
