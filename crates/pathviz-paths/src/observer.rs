use std::ops::ControlFlow;

use pathviz_core::Cell;

/// Receives search events, in order, as they happen.
///
/// Both hooks run synchronously on the searching thread, so an observer may
/// block (e.g. to pace an animation) before the search continues.
pub trait Observer {
    /// Called once for each newly discovered cell. Returning
    /// `ControlFlow::Break` stops the search, which then reports no path.
    fn on_visit(&mut self, _cell: Cell) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called for each path cell, from the goal back towards the start.
    fn on_path(&mut self, _cell: Cell) {}
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_visit(&mut self, cell: Cell) -> ControlFlow<()> {
        (**self).on_visit(cell)
    }

    fn on_path(&mut self, cell: Cell) {
        (**self).on_path(cell)
    }
}

/// An observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

/// An observer that records both event sequences, for diagnostics and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    pub visits: Vec<Cell>,
    pub path: Vec<Cell>,
}

impl Observer for Recorder {
    fn on_visit(&mut self, cell: Cell) -> ControlFlow<()> {
        self.visits.push(cell);
        ControlFlow::Continue(())
    }

    fn on_path(&mut self, cell: Cell) {
        self.path.push(cell);
    }
}
