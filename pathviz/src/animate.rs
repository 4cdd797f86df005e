//! Animating a running search.

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use pathviz_core::{Cell, Driver, Grid, Key, Msg};
use pathviz_paths::Observer;

use crate::config::Pacing;
use crate::layout::Layout;
use crate::model::{Mark, Overlay, Panel};
use crate::screen::Screen;
use crate::view::View;

/// An [`Observer`] that paints each event on screen, then waits out the
/// configured delay while watching for input.
///
/// Esc or `q` during exploration stops the search; during the path
/// animation it skips the remaining delays. A window close request stops
/// the search and is reported by [`finish`](PacedObserver::finish).
pub struct PacedObserver<'a, D: Driver> {
    layout: &'a Layout,
    grid: &'a Grid,
    overlay: &'a mut Overlay,
    panel: &'a Panel,
    screen: &'a mut Screen<D>,
    pacing: Pacing,
    error: Option<Box<dyn std::error::Error>>,
    quit: bool,
    hurry: bool,
}

impl<'a, D: Driver> PacedObserver<'a, D> {
    pub fn new(
        layout: &'a Layout,
        grid: &'a Grid,
        overlay: &'a mut Overlay,
        panel: &'a Panel,
        screen: &'a mut Screen<D>,
        pacing: Pacing,
    ) -> Self {
        Self {
            layout,
            grid,
            overlay,
            panel,
            screen,
            pacing,
            error: None,
            quit: false,
            hurry: false,
        }
    }

    /// The first screen error, if any, and whether a quit was requested.
    pub fn finish(self) -> (Option<Box<dyn std::error::Error>>, bool) {
        (self.error, self.quit)
    }

    fn show(&mut self, cell: Cell, mark: Mark) -> ControlFlow<()> {
        if self.error.is_some() {
            return ControlFlow::Break(());
        }
        self.overlay.set(cell, mark);
        View {
            layout: self.layout,
            grid: self.grid,
            overlay: &*self.overlay,
            panel: self.panel,
        }
        .draw_cell(self.screen.canvas(), cell);
        if let Err(e) = self.screen.present() {
            log::error!("screen update failed: {e}");
            self.error = Some(e);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    /// Poll input until `delay` has passed. Polls at least once, so a stop
    /// request is seen even without delays.
    fn wait(&mut self, delay: Duration) -> ControlFlow<()> {
        let deadline = Instant::now() + delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.screen.poll(remaining) {
                Err(e) => {
                    log::error!("input polling failed: {e}");
                    self.error = Some(e);
                    return ControlFlow::Break(());
                }
                Ok(Some(Msg::KeyDown {
                    key: Key::Escape | Key::Char('q'),
                })) => {
                    log::debug!("stop requested");
                    return ControlFlow::Break(());
                }
                Ok(Some(Msg::Quit)) => {
                    self.quit = true;
                    return ControlFlow::Break(());
                }
                Ok(Some(Msg::Screen { .. })) => {
                    self.screen.invalidate();
                }
                Ok(_) => {}
            }
            if Instant::now() >= deadline {
                return ControlFlow::Continue(());
            }
        }
    }
}

impl<D: Driver> Observer for PacedObserver<'_, D> {
    fn on_visit(&mut self, cell: Cell) -> ControlFlow<()> {
        self.show(cell, Mark::Visited)?;
        self.wait(self.pacing.visit)
    }

    fn on_path(&mut self, cell: Cell) {
        if self.show(cell, Mark::Path).is_break() || self.hurry {
            return;
        }
        if self.wait(self.pacing.path).is_break() {
            self.hurry = true;
        }
    }
}
