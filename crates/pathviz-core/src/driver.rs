//! The [`Driver`] trait implemented by screen back-ends.

use std::time::Duration;

use crate::canvas::Frame;
use crate::messages::Msg;

/// Back-end driver (e.g. a terminal).
///
/// The application loop is synchronous: it polls one message at a time,
/// draws into a [`Canvas`](crate::Canvas) and flushes the diff.
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Wait up to `timeout` for the next input message.
    fn poll_msg(&mut self, timeout: Duration) -> Result<Option<Msg>, Box<dyn std::error::Error>>;

    /// Flush a computed frame to the screen.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Clean up / restore the screen.
    fn close(&mut self);
}
