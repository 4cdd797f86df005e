//! Colour palette for the demonstrator.

use pathviz_core::Color;

// -- Grid cells --

/// Empty cell background.
pub const EMPTY_BG: Color = Color::WHITE;
/// Start cell: purple.
pub const START_BG: Color = Color::from_rgb(138, 43, 226);
/// Goal cell: red.
pub const GOAL_BG: Color = Color::from_rgb(255, 0, 0);
/// Obstacle cell: blue.
pub const OBSTACLE_BG: Color = Color::from_rgb(0, 0, 255);
/// Cell discovered by the running search.
pub const SEARCH_BG: Color = Color::from_rgb(145, 145, 145);
/// Cell on the final path.
pub const PATH_BG: Color = Color::from_rgb(165, 42, 42);
/// Letters drawn on start and goal cells.
pub const MARKER_FG: Color = Color::WHITE;

// -- Menu panel --

pub const PANEL_BG: Color = Color::from_rgb(211, 211, 211);
pub const BUTTON_BG: Color = Color::from_rgb(200, 200, 200);
pub const TEXT_FG: Color = Color::BLACK;
pub const BORDER_FG: Color = Color::from_rgb(98, 100, 106);
pub const FAIL_FG: Color = Color::from_rgb(170, 0, 0);
pub const OK_FG: Color = Color::from_rgb(0, 120, 0);
