//! Crossterm terminal driver for pathviz.
//!
//! Provides a [`CrosstermDriver`] that implements [`pathviz_core::Driver`],
//! turning [`Frame`] diffs into terminal writes and crossterm events into
//! pathviz [`Msg`]s.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{Color, Driver, Frame, Key, MouseAction, Msg, Point};

/// Maps a [`pathviz_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// Maps a crossterm [`KeyCode`] to a pathviz [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Maps a crossterm mouse event to a pathviz [`Msg`]. Moves, drags and
/// scrolling are dropped.
fn to_mouse_msg(me: MouseEvent) -> Option<Msg> {
    let action = match me.kind {
        MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
        MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
        MouseEventKind::Down(MouseButton::Middle) => MouseAction::Auxiliary,
        MouseEventKind::Up(_) => MouseAction::Release,
        _ => return None,
    };
    Some(Msg::Mouse {
        action,
        pos: Point::new(me.column as i32, me.row as i32),
    })
}

/// Maps a crossterm [`Event`] to a pathviz [`Msg`].
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        // Some platforms also report releases and repeats.
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => to_key(code).map(|key| Msg::KeyDown { key }),
        Event::Mouse(me) => to_mouse_msg(me),
        Event::Resize(w, h) => Some(Msg::Screen {
            width: w as i32,
            height: h as i32,
        }),
        _ => None,
    }
}

/// A terminal back-end for pathviz using crossterm.
pub struct CrosstermDriver {
    mouse_enabled: bool,
    active: bool,
}

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
            active: false,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            queue!(stdout, event::EnableMouseCapture)?;
        }
        stdout.flush()?;
        log::debug!("terminal initialised (mouse: {})", self.mouse_enabled);
        Ok(())
    }

    fn poll_msg(&mut self, timeout: Duration) -> Result<Option<Msg>, Box<dyn std::error::Error>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(to_msg(event::read()?))
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();

        for fc in &frame.cells {
            let p = fc.pos;
            let glyph = &fc.glyph;
            queue!(
                stdout,
                cursor::MoveTo(p.x as u16, p.y as u16),
                SetForegroundColor(to_ct_color(glyph.fg)),
                SetBackgroundColor(to_ct_color(glyph.bg))
            )?;
            if glyph.bold {
                queue!(stdout, style::SetAttribute(Attribute::Bold))?;
            }
            queue!(stdout, style::Print(glyph.ch))?;
            if glyph.bold {
                queue!(stdout, style::SetAttribute(Attribute::Reset))?;
            }
        }

        queue!(stdout, style::ResetColor)?;
        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = queue!(stdout, event::DisableMouseCapture);
        }
        let _ = queue!(stdout, style::ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}

impl Drop for CrosstermDriver {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key_event(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn key_press_maps() {
        assert_eq!(
            to_msg(key_event(KeyCode::Char('b'), KeyEventKind::Press)),
            Some(Msg::char('b'))
        );
        assert_eq!(
            to_msg(key_event(KeyCode::Esc, KeyEventKind::Press)),
            Some(Msg::key(Key::Escape))
        );
        assert_eq!(
            to_msg(key_event(KeyCode::Char(' '), KeyEventKind::Press)),
            Some(Msg::key(Key::Space))
        );
    }

    #[test]
    fn key_release_dropped() {
        assert_eq!(to_msg(key_event(KeyCode::Char('b'), KeyEventKind::Release)), None);
        assert_eq!(to_msg(key_event(KeyCode::F(1), KeyEventKind::Press)), None);
    }

    #[test]
    fn mouse_buttons_map() {
        assert_eq!(
            to_msg(mouse_event(MouseEventKind::Down(MouseButton::Left), 4, 2)),
            Some(Msg::mouse(MouseAction::Main, 4, 2))
        );
        assert_eq!(
            to_msg(mouse_event(MouseEventKind::Down(MouseButton::Right), 0, 0)),
            Some(Msg::mouse(MouseAction::Secondary, 0, 0))
        );
        assert_eq!(to_msg(mouse_event(MouseEventKind::Moved, 1, 1)), None);
    }

    #[test]
    fn resize_maps() {
        assert_eq!(
            to_msg(Event::Resize(80, 24)),
            Some(Msg::Screen {
                width: 80,
                height: 24
            })
        );
    }

    #[test]
    fn default_color_resets() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
