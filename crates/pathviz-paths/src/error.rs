use std::fmt;

use pathviz_core::Cell;

/// Why a pair of endpoints was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointProblem {
    StartOutOfBounds,
    GoalOutOfBounds,
    SameCell,
    StartBlocked,
    GoalBlocked,
    /// The grid has no start or no goal painted.
    Missing,
}

impl fmt::Display for EndpointProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StartOutOfBounds => "start is outside the grid",
            Self::GoalOutOfBounds => "goal is outside the grid",
            Self::SameCell => "start and goal are the same cell",
            Self::StartBlocked => "start is an obstacle",
            Self::GoalBlocked => "goal is an obstacle",
            Self::Missing => "start or goal is not set",
        })
    }
}

/// Errors returned by searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The search was asked to run between unusable endpoints. No search
    /// work was done.
    InvalidEndpoints {
        start: Option<Cell>,
        goal: Option<Cell>,
        problem: EndpointProblem,
    },
    /// A parent chain did not lead back to the start. This is a bookkeeping
    /// bug, not a user error.
    BrokenChain { at: Cell },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints {
                start,
                goal,
                problem,
            } => {
                write!(f, "invalid endpoints ")?;
                match start {
                    Some(s) => write!(f, "{s}")?,
                    None => write!(f, "-")?,
                }
                write!(f, " -> ")?;
                match goal {
                    Some(g) => write!(f, "{g}")?,
                    None => write!(f, "-")?,
                }
                write!(f, ": {problem}")
            }
            Self::BrokenChain { at } => {
                write!(f, "parent chain broken at {at}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
