//! Drawing the grid and menu panel into a [`Canvas`].

use pathviz_core::{Canvas, Cell, CellState, Color, Glyph, Grid, Point};
use pathviz_paths::Algorithm;

use crate::colors::*;
use crate::layout::{CELL_WIDTH, Layout};
use crate::model::{Mark, Overlay, Panel};

const HELP: [&str; 5] = [
    "Left click: start/goal",
    "Right click: wall",
    "b d u: run  Esc: stop",
    "g: scatter  r: reset",
    "c: clear  q: quit",
];

/// A borrowed snapshot of everything drawn on screen.
pub struct View<'a> {
    pub layout: &'a Layout,
    pub grid: &'a Grid,
    pub overlay: &'a Overlay,
    pub panel: &'a Panel,
}

impl View<'_> {
    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.fill(Glyph::default().with_bg(PANEL_BG));
        self.draw_border(canvas);
        for cell in self.layout.dims().iter() {
            self.draw_cell(canvas, cell);
        }
        self.draw_panel(canvas);
    }

    /// Redraw a single grid cell.
    pub fn draw_cell(&self, canvas: &mut Canvas, cell: Cell) {
        let state = self.grid.get_cell(cell).unwrap_or_default();
        let base = Glyph::default().with_fg(MARKER_FG).with_bold(true);
        let (bg, letter) = match state {
            CellState::Start => (START_BG, 'S'),
            CellState::Goal => (GOAL_BG, 'G'),
            CellState::Obstacle => (OBSTACLE_BG, ' '),
            CellState::Empty => match self.overlay.get(cell) {
                Mark::None => (EMPTY_BG, ' '),
                Mark::Visited => (SEARCH_BG, ' '),
                Mark::Path => (PATH_BG, ' '),
            },
        };
        let p = self.layout.screen_of(cell);
        canvas.set(p, base.with_bg(bg).with_char(letter));
        for dx in 1..CELL_WIDTH {
            canvas.set(p.shift(dx, 0), base.with_bg(bg));
        }
    }

    fn draw_border(&self, canvas: &mut Canvas) {
        let style = Glyph::default().with_fg(BORDER_FG).with_bg(PANEL_BG);
        let size = self.layout.grid_size();
        let (right, bottom) = (size.x + 1, size.y + 1);
        for x in 1..right {
            canvas.set(Point::new(x, 0), style.with_char('─'));
            canvas.set(Point::new(x, bottom), style.with_char('─'));
        }
        for y in 1..bottom {
            canvas.set(Point::new(0, y), style.with_char('│'));
            canvas.set(Point::new(right, y), style.with_char('│'));
        }
        canvas.set(Point::new(0, 0), style.with_char('┌'));
        canvas.set(Point::new(right, 0), style.with_char('┐'));
        canvas.set(Point::new(0, bottom), style.with_char('└'));
        canvas.set(Point::new(right, bottom), style.with_char('┘'));
    }

    fn draw_panel(&self, canvas: &mut Canvas) {
        let text = Glyph::default().with_fg(TEXT_FG).with_bg(PANEL_BG);
        let x = self.layout.menu_x() + 2;
        canvas.text(Point::new(x, 0), "Grid search", text.with_bold(true));

        for alg in Algorithm::ALL {
            let p = self.layout.button_pos(alg);
            let running = self.panel.running == Some(alg);
            let style = text.with_bg(BUTTON_BG).with_bold(running);
            let label = format!("[ Run {alg} ]");
            let width = self.layout.button_width() as usize;
            canvas.text(p, &format!("{label:<width$}"), style);
        }

        canvas.text(self.layout.status_line(0), &self.panel.status, text);
        let lines = self.result_lines();
        for (i, (line, fg)) in lines.iter().enumerate() {
            canvas.text(self.layout.status_line(1 + i as i32), line, text.with_fg(*fg));
        }
        let help_top = 1 + lines.len().max(3) as i32 + 1;
        for (i, line) in HELP.iter().enumerate() {
            canvas.text(self.layout.status_line(help_top + i as i32), line, text.with_fg(BORDER_FG));
        }
    }

    fn result_lines(&self) -> Vec<(String, Color)> {
        let Some(r) = &self.panel.last else {
            return Vec::new();
        };
        let path = if r.found {
            (format!("Path: {} cells", r.path.len()), OK_FG)
        } else {
            ("Path: none".to_string(), FAIL_FG)
        };
        vec![
            path,
            (format!("Visited: {}", r.visits), TEXT_FG),
            (format!("Time: {:.3} sec", r.elapsed.as_secs_f64()), TEXT_FG),
        ]
    }
}
