//! The event loop.

use std::time::Duration;

use pathviz_core::{Driver, Msg};

use crate::model::{Action, Demo};
use crate::screen::Screen;

/// How long the idle loop waits for input before polling again.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run `demo` on `driver` until the user quits. The driver is closed on the
/// way out, whether or not the loop failed, and handed back.
pub fn run<D: Driver>(demo: &mut Demo, driver: D) -> Result<D, Box<dyn std::error::Error>> {
    let mut screen = Screen::new(driver, demo.layout().screen_size());
    screen.driver_mut().init()?;
    log::info!("pathviz started on a {} grid", demo.grid().dims());

    let result = event_loop(demo, &mut screen);
    let mut driver = screen.into_driver();
    driver.close();
    match &result {
        Ok(()) => log::info!("pathviz finished"),
        Err(e) => log::error!("pathviz stopped: {e}"),
    }
    result.map(|()| driver)
}

fn event_loop<D: Driver>(demo: &mut Demo, screen: &mut Screen<D>) -> Result<(), Box<dyn std::error::Error>> {
    let mut action = demo.update(Msg::Init);
    loop {
        match action {
            Action::Quit => return Ok(()),
            Action::Redraw => screen.invalidate(),
            Action::Search(algorithm) => {
                if demo.search(algorithm, screen)? == Action::Quit {
                    return Ok(());
                }
            }
            Action::Continue => {}
        }
        demo.draw(screen.canvas());
        screen.present()?;

        action = loop {
            if let Some(msg) = screen.poll(IDLE_POLL)? {
                break demo.update(msg);
            }
        };
    }
}
