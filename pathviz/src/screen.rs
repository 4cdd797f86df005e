//! Double-buffered drawing on top of a [`Driver`].

use std::time::Duration;

use pathviz_core::{Canvas, Driver, Msg, Point, compute_frame};

/// A driver plus the previous and current canvases. Only glyphs that changed
/// since the last [`present`](Screen::present) are sent to the driver.
pub struct Screen<D: Driver> {
    driver: D,
    prev: Canvas,
    curr: Canvas,
}

impl<D: Driver> Screen<D> {
    pub fn new(driver: D, size: Point) -> Self {
        Self {
            driver,
            prev: Canvas::new(size.x, size.y),
            curr: Canvas::new(size.x, size.y),
        }
    }

    /// The canvas to draw the next frame into.
    pub fn canvas(&mut self) -> &mut Canvas {
        &mut self.curr
    }

    /// Flush the changes since the last presented frame.
    pub fn present(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let frame = compute_frame(&self.prev, &self.curr);
        if !frame.cells.is_empty() {
            self.driver.flush(frame)?;
        }
        self.prev.clone_from(&self.curr);
        Ok(())
    }

    /// Forget what is on screen so the next present redraws everything.
    pub fn invalidate(&mut self) {
        self.prev = Canvas::new(0, 0);
    }

    /// Wait up to `timeout` for input.
    pub fn poll(&mut self, timeout: Duration) -> Result<Option<Msg>, Box<dyn std::error::Error>> {
        self.driver.poll_msg(timeout)
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Give back the driver.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
