//! Application settings.

use std::time::Duration;

use pathviz_core::GridConfig;

/// Delays between animation frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// After each newly discovered cell.
    pub visit: Duration,
    /// After each path cell.
    pub path: Duration,
}

impl Pacing {
    /// No delays: run searches as fast as the screen can be updated.
    pub const NONE: Self = Self {
        visit: Duration::ZERO,
        path: Duration::ZERO,
    };
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            visit: Duration::from_millis(50),
            path: Duration::from_millis(100),
        }
    }
}

/// Everything a [`Demo`](crate::model::Demo) is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub grid: GridConfig,
    pub pacing: Pacing,
    /// Probability that a cell becomes an obstacle when scattering.
    pub obstacle_density: f64,
    /// Seed for obstacle scattering.
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            pacing: Pacing::default(),
            obstacle_density: 0.25,
            seed: 0,
        }
    }
}
