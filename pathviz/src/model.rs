//! The demonstrator's state and input handling.

use pathviz_core::{Canvas, Cell, CellState, Dims, Driver, Grid, GridError, Key, MouseAction, Msg};
use pathviz_paths::{Algorithm, EndpointProblem, SearchError, SearchResult, run_painted};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animate::PacedObserver;
use crate::config::{DemoConfig, Pacing};
use crate::layout::Layout;
use crate::screen::Screen;
use crate::view::View;

// ---------------------------------------------------------------------------
// Overlay
// ---------------------------------------------------------------------------

/// Search progress drawn over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    None,
    Visited,
    Path,
}

/// One [`Mark`] per grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    dims: Dims,
    marks: Vec<Mark>,
}

impl Overlay {
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            marks: vec![Mark::None; dims.len()],
        }
    }

    pub fn get(&self, cell: Cell) -> Mark {
        self.dims
            .index(cell)
            .map_or(Mark::None, |i| self.marks[i])
    }

    pub fn set(&mut self, cell: Cell, mark: Mark) {
        if let Some(i) = self.dims.index(cell) {
            self.marks[i] = mark;
        }
    }

    pub fn clear(&mut self) {
        self.marks.fill(Mark::None);
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }
}

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

/// Text shown in the menu panel.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    pub status: String,
    /// The last completed search.
    pub last: Option<SearchResult>,
    /// The search currently running.
    pub running: Option<Algorithm>,
}

// ---------------------------------------------------------------------------
// Demo
// ---------------------------------------------------------------------------

/// What the event loop should do after an input message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    /// The screen was resized or cleared; redraw everything.
    Redraw,
    Search(Algorithm),
    Quit,
}

/// The demonstrator: a paintable grid, a search overlay and a menu.
pub struct Demo {
    grid: Grid,
    overlay: Overlay,
    layout: Layout,
    panel: Panel,
    pacing: Pacing,
    density: f64,
    rng: StdRng,
}

impl Demo {
    pub fn new(config: &DemoConfig) -> Result<Self, GridError> {
        let grid = Grid::with_config(&config.grid)?;
        let dims = grid.dims();
        Ok(Self {
            grid,
            overlay: Overlay::new(dims),
            layout: Layout::new(dims),
            panel: Panel::default(),
            pacing: config.pacing,
            density: config.obstacle_density.clamp(0.0, 1.0),
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Handle one input message.
    pub fn update(&mut self, msg: Msg) -> Action {
        match msg {
            Msg::Init => {
                self.panel.status = "Paint a start and a goal".to_string();
                Action::Redraw
            }
            Msg::Quit => Action::Quit,
            Msg::Screen { .. } => Action::Redraw,
            Msg::KeyDown { key } => self.update_key(key),
            Msg::Mouse { action, pos } => {
                if let Some(cell) = self.layout.cell_at(pos) {
                    let painted = match action {
                        MouseAction::Main => self.paint_main(cell),
                        MouseAction::Secondary => self.toggle_obstacle(cell),
                        MouseAction::Auxiliary | MouseAction::Release => Ok(()),
                    };
                    if let Err(e) = painted {
                        log::warn!("paint at {cell} failed: {e}");
                    }
                    Action::Continue
                } else if action == MouseAction::Main {
                    self.layout.button_at(pos).map_or(Action::Continue, Action::Search)
                } else {
                    Action::Continue
                }
            }
        }
    }

    fn update_key(&mut self, key: Key) -> Action {
        match key {
            Key::Escape | Key::Char('q') => Action::Quit,
            Key::Char('b') => Action::Search(Algorithm::Bfs),
            Key::Char('d') => Action::Search(Algorithm::Dfs),
            Key::Char('u') => Action::Search(Algorithm::Ucs),
            Key::Char('r') => {
                self.grid.reset();
                self.overlay.clear();
                self.panel.last = None;
                self.panel.status = "Grid reset".to_string();
                Action::Continue
            }
            Key::Char('g') => {
                if let Err(e) = self.scatter() {
                    log::warn!("scatter failed: {e}");
                }
                Action::Continue
            }
            Key::Char('c') => {
                self.overlay.clear();
                Action::Continue
            }
            _ => Action::Continue,
        }
    }

    /// Left click: clear a painted cell, or paint the missing start, then
    /// the missing goal.
    fn paint_main(&mut self, cell: Cell) -> Result<(), GridError> {
        let next = match self.grid.get_cell(cell)? {
            CellState::Start | CellState::Goal | CellState::Obstacle => CellState::Empty,
            CellState::Empty if self.grid.start().is_none() => CellState::Start,
            CellState::Empty if self.grid.goal().is_none() => CellState::Goal,
            CellState::Empty => return Ok(()),
        };
        self.grid.set_cell(cell, next)?;
        self.overlay.clear();
        Ok(())
    }

    /// Right click: toggle an obstacle. Start and goal are left alone.
    fn toggle_obstacle(&mut self, cell: Cell) -> Result<(), GridError> {
        let next = match self.grid.get_cell(cell)? {
            CellState::Empty => CellState::Obstacle,
            CellState::Obstacle => CellState::Empty,
            CellState::Start | CellState::Goal => return Ok(()),
        };
        self.grid.set_cell(cell, next)?;
        self.overlay.clear();
        Ok(())
    }

    /// Replace every obstacle with a fresh random scatter. Start and goal
    /// are kept.
    fn scatter(&mut self) -> Result<(), GridError> {
        for cell in self.grid.dims().iter() {
            match self.grid.get_cell(cell)? {
                CellState::Start | CellState::Goal => continue,
                CellState::Empty | CellState::Obstacle => {}
            }
            let state = if self.rng.random_bool(self.density) {
                CellState::Obstacle
            } else {
                CellState::Empty
            };
            self.grid.set_cell(cell, state)?;
        }
        self.overlay.clear();
        self.panel.status = format!("Scattered {} obstacles", self.grid.count(CellState::Obstacle));
        Ok(())
    }

    /// Draw the whole screen.
    pub fn draw(&self, canvas: &mut Canvas) {
        View {
            layout: &self.layout,
            grid: &self.grid,
            overlay: &self.overlay,
            panel: &self.panel,
        }
        .draw(canvas);
    }

    /// Run `algorithm` between the painted endpoints, animating on `screen`.
    ///
    /// Returns [`Action::Quit`] if a quit request arrived during the search.
    /// Screen errors and broken parent chains are returned as errors.
    pub fn search<D: Driver>(
        &mut self,
        algorithm: Algorithm,
        screen: &mut Screen<D>,
    ) -> Result<Action, Box<dyn std::error::Error>> {
        if self.grid.endpoints().is_none() {
            self.panel.status = endpoint_hint(EndpointProblem::Missing).to_string();
            return Ok(Action::Continue);
        }

        self.overlay.clear();
        self.panel.running = Some(algorithm);
        self.panel.status = format!("Running {algorithm}... Esc stops");
        self.draw(screen.canvas());
        screen.present()?;

        let mut observer = PacedObserver::new(
            &self.layout,
            &self.grid,
            &mut self.overlay,
            &self.panel,
            screen,
            self.pacing,
        );
        let outcome = run_painted(algorithm, &self.grid, &mut observer);
        let (screen_error, quit) = observer.finish();
        self.panel.running = None;

        if let Some(e) = screen_error {
            return Err(e);
        }
        match outcome {
            Ok(result) => {
                self.panel.status = if result.cancelled {
                    format!("{algorithm}: stopped")
                } else if result.found {
                    format!("{algorithm}: path found")
                } else {
                    format!("{algorithm}: no path")
                };
                self.panel.last = Some(result);
            }
            Err(SearchError::InvalidEndpoints { problem, .. }) => {
                self.panel.status = endpoint_hint(problem).to_string();
            }
            Err(e @ SearchError::BrokenChain { .. }) => {
                log::error!("{algorithm}: {e}");
                return Err(Box::new(e));
            }
        }
        Ok(if quit { Action::Quit } else { Action::Continue })
    }
}

fn endpoint_hint(problem: EndpointProblem) -> &'static str {
    match problem {
        EndpointProblem::Missing => "Paint start and goal first",
        EndpointProblem::SameCell => "Start and goal must differ",
        EndpointProblem::StartBlocked | EndpointProblem::GoalBlocked => "Start or goal is walled",
        EndpointProblem::StartOutOfBounds | EndpointProblem::GoalOutOfBounds => "Endpoint off the grid",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Point;

    fn demo() -> Demo {
        Demo::new(&DemoConfig {
            pacing: Pacing::NONE,
            ..DemoConfig::default()
        })
        .unwrap()
    }

    fn click(d: &mut Demo, action: MouseAction, cell: Cell) -> Action {
        let p = d.layout().screen_of(cell);
        d.update(Msg::Mouse { action, pos: p })
    }

    #[test]
    fn left_clicks_paint_start_then_goal() {
        let mut d = demo();
        click(&mut d, MouseAction::Main, Cell::new(0, 0));
        click(&mut d, MouseAction::Main, Cell::new(4, 4));
        click(&mut d, MouseAction::Main, Cell::new(5, 5));
        assert_eq!(d.grid().start(), Some(Cell::new(0, 0)));
        assert_eq!(d.grid().goal(), Some(Cell::new(4, 4)));
        assert_eq!(d.grid().get_cell(Cell::new(5, 5)), Ok(CellState::Empty));
    }

    #[test]
    fn left_click_clears_painted_cells() {
        let mut d = demo();
        click(&mut d, MouseAction::Main, Cell::new(0, 0));
        click(&mut d, MouseAction::Main, Cell::new(1, 1));
        click(&mut d, MouseAction::Secondary, Cell::new(2, 2));

        click(&mut d, MouseAction::Main, Cell::new(0, 0));
        assert_eq!(d.grid().start(), None);
        click(&mut d, MouseAction::Main, Cell::new(2, 2));
        assert_eq!(d.grid().count(CellState::Obstacle), 0);

        // The freed start is repainted first.
        click(&mut d, MouseAction::Main, Cell::new(3, 3));
        assert_eq!(d.grid().start(), Some(Cell::new(3, 3)));
    }

    #[test]
    fn right_click_toggles_obstacles_only() {
        let mut d = demo();
        click(&mut d, MouseAction::Main, Cell::new(0, 0));
        click(&mut d, MouseAction::Secondary, Cell::new(0, 0));
        assert_eq!(d.grid().start(), Some(Cell::new(0, 0)));

        click(&mut d, MouseAction::Secondary, Cell::new(1, 0));
        assert!(d.grid().is_obstacle(Cell::new(1, 0)));
        click(&mut d, MouseAction::Secondary, Cell::new(1, 0));
        assert!(!d.grid().is_obstacle(Cell::new(1, 0)));
    }

    #[test]
    fn keys_and_buttons_request_searches() {
        let mut d = demo();
        assert_eq!(d.update(Msg::char('b')), Action::Search(Algorithm::Bfs));
        assert_eq!(d.update(Msg::char('d')), Action::Search(Algorithm::Dfs));
        assert_eq!(d.update(Msg::char('u')), Action::Search(Algorithm::Ucs));
        let p = d.layout().button_pos(Algorithm::Dfs);
        assert_eq!(
            d.update(Msg::Mouse {
                action: MouseAction::Main,
                pos: p
            }),
            Action::Search(Algorithm::Dfs)
        );
        assert_eq!(d.update(Msg::key(Key::Escape)), Action::Quit);
        assert_eq!(d.update(Msg::Quit), Action::Quit);
        assert_eq!(d.update(Msg::mouse(MouseAction::Main, 200, 200)), Action::Continue);
    }

    #[test]
    fn scatter_keeps_endpoints() {
        let mut d = Demo::new(&DemoConfig {
            obstacle_density: 1.0,
            ..DemoConfig::default()
        })
        .unwrap();
        click(&mut d, MouseAction::Main, Cell::new(0, 0));
        click(&mut d, MouseAction::Main, Cell::new(9, 9));
        d.update(Msg::char('g'));
        assert_eq!(d.grid().count(CellState::Obstacle), 98);
        assert_eq!(d.grid().endpoints(), Some((Cell::new(0, 0), Cell::new(9, 9))));

        d.update(Msg::char('r'));
        assert_eq!(d.grid().count(CellState::Empty), 100);
        assert_eq!(d.grid().endpoints(), None);
    }

    #[test]
    fn scatter_is_seeded() {
        let cfg = DemoConfig {
            seed: 99,
            ..DemoConfig::default()
        };
        let mut a = Demo::new(&cfg).unwrap();
        let mut b = Demo::new(&cfg).unwrap();
        a.update(Msg::char('g'));
        b.update(Msg::char('g'));
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn overlay_marks() {
        let mut o = Overlay::new(Dims::new(2, 2));
        o.set(Cell::new(1, 1), Mark::Path);
        o.set(Cell::new(5, 5), Mark::Path);
        assert_eq!(o.get(Cell::new(1, 1)), Mark::Path);
        assert_eq!(o.get(Cell::new(5, 5)), Mark::None);
        assert_eq!(o.count(Mark::Path), 1);
        o.clear();
        assert_eq!(o.count(Mark::None), 4);
    }

    #[test]
    fn clicks_outside_grid_ignored() {
        let mut d = demo();
        let action = d.update(Msg::Mouse {
            action: MouseAction::Secondary,
            pos: Point::new(0, 0),
        });
        assert_eq!(action, Action::Continue);
        assert_eq!(d.grid().count(CellState::Empty), 100);
    }
}
