//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pathviz_core::{DEFAULT_COLS, DEFAULT_ROWS, GridConfig};

use crate::config::{DemoConfig, Pacing};

/// Largest accepted grid side; the whole grid has to fit on one terminal.
pub const MAX_SIDE: i64 = 500;

#[derive(Parser, Debug)]
#[command(name = "pathviz")]
#[command(about = "Watch BFS, DFS and UCS explore a grid you paint in the terminal")]
pub struct Args {
    /// Grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS, value_parser = clap::value_parser!(i32).range(1..=MAX_SIDE))]
    pub rows: i32,

    /// Grid columns
    #[arg(long, default_value_t = DEFAULT_COLS, value_parser = clap::value_parser!(i32).range(1..=MAX_SIDE))]
    pub cols: i32,

    /// Delay after each discovered cell, in milliseconds
    #[arg(long, default_value_t = 50)]
    pub visit_delay_ms: u64,

    /// Delay after each path cell, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub path_delay_ms: u64,

    /// Chance that a cell becomes an obstacle when scattering (0.0 to 1.0)
    #[arg(long, default_value_t = 0.25, value_parser = parse_density)]
    pub obstacle_density: f64,

    /// Seed for obstacle scattering; random when omitted
    #[arg(long, env = "PATHVIZ_SEED")]
    pub seed: Option<u64>,

    /// Where log output goes; the terminal itself is taken by the UI
    #[arg(long, default_value = "pathviz.log")]
    pub log_file: PathBuf,
}

impl Args {
    pub fn demo_config(&self) -> DemoConfig {
        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("obstacle seed: {seed}");
        DemoConfig {
            grid: GridConfig::new(self.rows, self.cols),
            pacing: Pacing {
                visit: Duration::from_millis(self.visit_delay_ms),
                path: Duration::from_millis(self.path_delay_ms),
            },
            obstacle_density: self.obstacle_density,
            seed,
        }
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&d) {
        Ok(d)
    } else {
        Err(format!("{d} is not between 0.0 and 1.0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["pathviz", "--seed", "7"]).unwrap();
        let cfg = args.demo_config();
        assert_eq!(cfg.grid, GridConfig::default());
        assert_eq!(cfg.pacing, Pacing::default());
        assert_eq!(cfg.obstacle_density, 0.25);
        assert_eq!(cfg.seed, 7);
        assert_eq!(args.log_file, PathBuf::from("pathviz.log"));
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "pathviz",
            "--rows",
            "20",
            "--cols",
            "30",
            "--visit-delay-ms",
            "0",
            "--obstacle-density",
            "0.5",
        ])
        .unwrap();
        let cfg = args.demo_config();
        assert_eq!(cfg.grid, GridConfig::new(20, 30));
        assert_eq!(cfg.pacing.visit, Duration::ZERO);
        assert_eq!(cfg.pacing.path, Duration::from_millis(100));
        assert_eq!(cfg.obstacle_density, 0.5);
    }

    #[test]
    fn density_out_of_range_rejected() {
        assert!(Args::try_parse_from(["pathviz", "--obstacle-density", "1.5"]).is_err());
        assert!(Args::try_parse_from(["pathviz", "--obstacle-density", "lots"]).is_err());
    }

    #[test]
    fn grid_size_bounded() {
        assert!(Args::try_parse_from(["pathviz", "--rows", "0"]).is_err());
        assert!(Args::try_parse_from(["pathviz", "--cols", "50000"]).is_err());
        assert!(Args::try_parse_from(["pathviz", "--rows", "-4"]).is_err());
        let args = Args::try_parse_from(["pathviz", "--rows", "500", "--cols", "1"]).unwrap();
        assert_eq!(args.demo_config().grid, GridConfig::new(500, 1));
    }
}
