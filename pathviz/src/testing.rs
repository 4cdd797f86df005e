use std::collections::VecDeque;
use std::time::Duration;

use pathviz_core::{Canvas, Cell, Driver, Frame, Glyph, Msg, MouseAction};

use crate::layout::Layout;

/// A driver that replays scripted input and keeps what was drawn.
///
/// Once the script runs out, non-blocking polls see nothing and blocking
/// polls see a quit request, so the event loop ends when the session goes
/// idle.
#[derive(Debug)]
pub struct MockDriver {
    script: VecDeque<Msg>,
    pub screen: Canvas,
    pub frames: usize,
    pub initialised: bool,
    pub closed: bool,
}

impl MockDriver {
    pub fn new(size: pathviz_core::Point, script: impl IntoIterator<Item = Msg>) -> Self {
        Self {
            script: script.into_iter().collect(),
            screen: Canvas::new(size.x, size.y),
            frames: 0,
            initialised: false,
            closed: false,
        }
    }

    pub fn glyph_of(&self, layout: &Layout, cell: Cell) -> Glyph {
        self.screen.at(layout.screen_of(cell))
    }
}

impl Driver for MockDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.initialised = true;
        Ok(())
    }

    fn poll_msg(&mut self, timeout: Duration) -> Result<Option<Msg>, Box<dyn std::error::Error>> {
        match self.script.pop_front() {
            Some(msg) => Ok(Some(msg)),
            None if timeout.is_zero() => Ok(None),
            None => Ok(Some(Msg::Quit)),
        }
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        for fc in frame.cells {
            self.screen.set(fc.pos, fc.glyph);
        }
        self.frames += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// A main-button click on `cell`.
pub fn click(layout: &Layout, cell: Cell) -> Msg {
    Msg::Mouse {
        action: MouseAction::Main,
        pos: layout.screen_of(cell),
    }
}

/// A secondary-button click on `cell`.
pub fn right_click(layout: &Layout, cell: Cell) -> Msg {
    Msg::Mouse {
        action: MouseAction::Secondary,
        pos: layout.screen_of(cell),
    }
}
